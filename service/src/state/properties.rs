//! [`Property`] store slice.

use common::{Money, Reduce};
use smart_default::SmartDefault;

use crate::domain::{property, Property};

/// State of the cached [`Property`] list.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct State {
    /// Cached [`Property`]s, the most recently added first.
    pub properties: Vec<Property>,

    /// Indicator whether the [`Property`]s are being loaded.
    pub loading: bool,

    /// Last loading error, if any.
    pub error: Option<String>,

    /// Applied [`Filters`].
    pub filters: Filters,
}

/// Filters of the [`Property`] list.
#[derive(Clone, Debug, Eq, PartialEq, SmartDefault)]
pub struct Filters {
    /// Minimal price, if any.
    pub min_price: Option<Money>,

    /// Maximal price, if any.
    pub max_price: Option<Money>,

    /// Required [`property::Kind`], if any.
    pub kind: Option<property::Kind>,

    /// Required location, if any.
    pub location: Option<String>,

    /// Required number of bedrooms, if any.
    pub bedrooms: Option<u8>,

    /// Required number of bathrooms, if any.
    pub bathrooms: Option<u8>,

    /// Indicator whether only [`Property`]s sold without a broker are shown.
    #[default(true)]
    pub no_broker_only: bool,
}

/// Partial update of [`Filters`].
///
/// Only the [`Some`] fields are applied.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct FiltersPatch {
    /// New [`Filters::min_price`].
    pub min_price: Option<Option<Money>>,

    /// New [`Filters::max_price`].
    pub max_price: Option<Option<Money>>,

    /// New [`Filters::kind`].
    pub kind: Option<Option<property::Kind>>,

    /// New [`Filters::location`].
    pub location: Option<Option<String>>,

    /// New [`Filters::bedrooms`].
    pub bedrooms: Option<Option<u8>>,

    /// New [`Filters::bathrooms`].
    pub bathrooms: Option<Option<u8>>,

    /// New [`Filters::no_broker_only`].
    pub no_broker_only: Option<bool>,
}

impl Filters {
    /// Merges the provided [`FiltersPatch`] into these [`Filters`].
    #[must_use]
    pub fn merge(self, patch: FiltersPatch) -> Self {
        let FiltersPatch {
            min_price,
            max_price,
            kind,
            location,
            bedrooms,
            bathrooms,
            no_broker_only,
        } = patch;

        Self {
            min_price: min_price.unwrap_or(self.min_price),
            max_price: max_price.unwrap_or(self.max_price),
            kind: kind.unwrap_or(self.kind),
            location: location.unwrap_or(self.location),
            bedrooms: bedrooms.unwrap_or(self.bedrooms),
            bathrooms: bathrooms.unwrap_or(self.bathrooms),
            no_broker_only: no_broker_only.unwrap_or(self.no_broker_only),
        }
    }
}

/// Action upon a [`State`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Action {
    /// Replaces the cached [`Property`]s, finishing the loading.
    Set(Vec<Property>),

    /// Marks the [`Property`]s as being loaded (or not).
    SetLoading(bool),

    /// Records a loading error, finishing the loading.
    SetError(String),

    /// Merges a [`FiltersPatch`] into the [`Filters`].
    SetFilters(FiltersPatch),

    /// Prepends a new [`Property`].
    Add(Property),

    /// Replaces the [`Property`] with the same ID, if cached.
    Update(Property),

    /// Removes the [`Property`] with the provided ID.
    Delete(property::Id),
}

impl Reduce<Action> for State {
    fn reduce(mut self, action: Action) -> Self {
        match action {
            Action::Set(properties) => {
                self.properties = properties;
                self.loading = false;
                self.error = None;
            }
            Action::SetLoading(loading) => self.loading = loading,
            Action::SetError(error) => {
                self.error = Some(error);
                self.loading = false;
            }
            Action::SetFilters(patch) => {
                self.filters = self.filters.merge(patch);
            }
            Action::Add(property) => self.properties.insert(0, property),
            Action::Update(property) => {
                if let Some(p) =
                    self.properties.iter_mut().find(|p| p.id == property.id)
                {
                    *p = property;
                }
            }
            Action::Delete(id) => self.properties.retain(|p| p.id != id),
        }
        self
    }
}

#[cfg(test)]
mod spec {
    use common::{reduce::reduce_all, DateTime, Money, Reduce as _, SquareMeters};

    use super::{Action, Filters, FiltersPatch, State};
    use crate::domain::{property::Kind, Property};

    fn property(id: &str) -> Property {
        Property {
            id: id.into(),
            title: format!("Property {id}"),
            description: String::new(),
            kind: Kind::Apartment,
            location: "Dubai Marina".into(),
            area: SquareMeters::new(100).unwrap(),
            bedrooms: 2,
            bathrooms: 2,
            price: Money::aed(1_000_000),
            amenities: vec![],
            images: vec![],
            seller_id: "user1".into(),
            is_verified: false,
            created_at: DateTime::UNIX_EPOCH.coerce(),
            no_broker_reason: "Direct sale".into(),
        }
    }

    fn ids(state: &State) -> Vec<&str> {
        state.properties.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn add_prepends() {
        let state = reduce_all(
            State::default(),
            [Action::Add(property("1")), Action::Add(property("2"))],
        );

        assert_eq!(ids(&state), ["2", "1"]);
    }

    #[test]
    fn update_and_delete_by_id() {
        let mut renamed = property("1");
        renamed.title = "Renamed".into();

        let state = reduce_all(
            State::default(),
            [
                Action::Set(vec![property("1"), property("2")]),
                Action::Update(renamed),
                Action::Update(property("3")),
                Action::Delete("2".into()),
            ],
        );

        assert_eq!(ids(&state), ["1"]);
        assert_eq!(state.properties[0].title, "Renamed");
    }

    #[test]
    fn loading_lifecycle() {
        let state = State::default()
            .reduce(Action::SetLoading(true))
            .reduce(Action::SetError("offline".into()));
        assert!(!state.loading);
        assert_eq!(state.error.as_deref(), Some("offline"));

        let state = state.reduce(Action::Set(vec![property("1")]));
        assert_eq!(state.error, None);
    }

    #[test]
    fn filters_merge_partially() {
        assert!(Filters::default().no_broker_only);

        let state = reduce_all(
            State::default(),
            [
                Action::SetFilters(FiltersPatch {
                    bedrooms: Some(Some(2)),
                    location: Some(Some("Dubai Marina".into())),
                    ..FiltersPatch::default()
                }),
                Action::SetFilters(FiltersPatch {
                    location: Some(None),
                    ..FiltersPatch::default()
                }),
            ],
        );

        assert_eq!(state.filters.bedrooms, Some(2));
        assert_eq!(state.filters.location, None);
        assert!(state.filters.no_broker_only);
    }
}
