//! [`Unit`]-related read definitions.

use std::cmp::Ordering;

use itertools::Itertools as _;

use crate::domain::{unit, Unit};

/// Distinct values of every filterable text attribute of [`Unit`]s, sorted
/// for populating selector controls.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Facets {
    /// Distinct [`unit::AreaName`]s.
    pub areas: Vec<unit::AreaName>,

    /// Distinct [`unit::DeveloperName`]s.
    pub developers: Vec<unit::DeveloperName>,

    /// Distinct [`unit::PropertyType`]s.
    pub property_types: Vec<unit::PropertyType>,

    /// Distinct [`unit::ProjectName`]s.
    pub projects: Vec<unit::ProjectName>,
}

impl Facets {
    /// Extracts [`Facets`] of the provided [`Unit`]s.
    ///
    /// Absent attributes never produce an option.
    #[must_use]
    pub fn extract(units: &[Unit]) -> Self {
        Self {
            areas: distinct(units.iter().map(|u| &u.area_name)),
            developers: distinct(
                units.iter().filter_map(|u| u.developer_name.as_ref()),
            ),
            property_types: distinct(
                units.iter().filter_map(|u| u.property_type.as_ref()),
            ),
            projects: distinct(
                units.iter().filter_map(|u| u.project_name.as_ref()),
            ),
        }
    }
}

/// Collects distinct `values` sorted by [`locale_cmp()`].
fn distinct<'a, T>(values: impl Iterator<Item = &'a T>) -> Vec<T>
where
    T: AsRef<str> + Clone + Eq + std::hash::Hash + 'a,
{
    values
        .unique()
        .sorted_by(|a, b| locale_cmp((*a).as_ref(), (*b).as_ref()))
        .cloned()
        .collect()
}

/// Compares strings the way a locale-aware collation does for Latin text:
/// case-insensitively first, with lowercase preceding uppercase on ties.
#[must_use]
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    let folded = |s: &str| s.chars().flat_map(char::to_lowercase).collect::<String>();
    folded(a).cmp(&folded(b)).then_with(|| b.cmp(a))
}

/// Selected [`Unit`] shown in the details panel.
///
/// Lives independently from the [`list::Criteria`]: changing the criteria
/// never resets or moves the [`Selection`], so it may point to a [`Unit`]
/// filtered out of the visible list.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Selection(Option<unit::Id>);

impl Selection {
    /// Creates a new [`Selection`] of the [`Unit`] with the provided `id`.
    #[must_use]
    pub fn of(id: unit::Id) -> Self {
        Self(Some(id))
    }

    /// Creates a new [`Selection`] of the first of the provided [`Unit`]s.
    ///
    /// Selects nothing if there are no [`Unit`]s.
    #[must_use]
    pub fn first_of(units: &[Unit]) -> Self {
        Self(units.first().map(|u| u.id))
    }

    /// Returns the selected [`unit::Id`], if any.
    #[must_use]
    pub fn id(self) -> Option<unit::Id> {
        self.0
    }

    /// Resolves this [`Selection`] against the full (unfiltered) collection
    /// of [`Unit`]s.
    ///
    /// [`None`] is returned when nothing is selected or the selected [`Unit`]
    /// doesn't exist.
    #[must_use]
    pub fn resolve(self, units: &[Unit]) -> Option<&Unit> {
        let id = self.0?;
        units.iter().find(|u| u.id == id)
    }

    /// Indicates whether the provided [`Unit`] is the selected one.
    #[must_use]
    pub fn is(self, unit: &Unit) -> bool {
        self.0 == Some(unit.id)
    }
}

pub mod list {
    //! [`Unit`] list definitions.

    use std::str::FromStr;

    use common::define_kind;
    use rust_decimal::Decimal;

    use crate::domain::{unit, Unit};

    /// Criteria of filtering a [`Unit`] list.
    ///
    /// A [`Unit`] passes when it satisfies every active constraint.
    #[derive(Clone, Debug, Default, Eq, PartialEq)]
    pub struct Criteria {
        /// Required [`unit::AreaName`].
        pub area: Facet<unit::AreaName>,

        /// Required [`unit::DeveloperName`].
        pub developer: Facet<unit::DeveloperName>,

        /// Required [`unit::PropertyType`].
        pub property_type: Facet<unit::PropertyType>,

        /// Required [`unit::ProjectName`].
        pub project: Facet<unit::ProjectName>,

        /// [`Range`] of the price (in its currency units).
        pub price: Range,

        /// [`Range`] of the actual area (in square meters).
        pub actual_area: Range,

        /// [`Range`] of the number of rooms.
        pub rooms: Range,

        /// Required [`Ownership`].
        pub ownership: Ownership,
    }

    impl Criteria {
        /// Indicates whether no constraint of these [`Criteria`] is active.
        #[must_use]
        pub fn is_inactive(&self) -> bool {
            *self == Self::default()
        }

        /// Checks whether the provided [`Unit`] satisfies these [`Criteria`].
        #[must_use]
        pub fn matches(&self, unit: &Unit) -> bool {
            let Self {
                area,
                developer,
                property_type,
                project,
                price,
                actual_area,
                rooms,
                ownership,
            } = self;

            area.admits(Some(&unit.area_name))
                && developer.admits(unit.developer_name.as_ref())
                && property_type.admits(unit.property_type.as_ref())
                && project.admits(unit.project_name.as_ref())
                && price.admits(unit.price.map(|p| p.amount))
                && actual_area.admits(unit.actual_area.map(|a| a.value()))
                && rooms.admits(unit.rooms.map(|r| Decimal::from(r.count())))
                && ownership.admits(unit)
        }

        /// Filters the provided [`Unit`]s, preserving their relative order.
        #[must_use]
        pub fn apply<'u>(&self, units: &'u [Unit]) -> Vec<&'u Unit> {
            units.iter().filter(|u| self.matches(u)).collect()
        }
    }

    /// Constraint of a text attribute.
    #[derive(Clone, Debug, Default, Eq, PartialEq)]
    pub enum Facet<T> {
        /// Any value (including absence) is admitted.
        #[default]
        All,

        /// Only the exactly equal value is admitted.
        Only(T),
    }

    impl<T: PartialEq> Facet<T> {
        /// Checks whether the provided attribute `value` is admitted.
        #[must_use]
        pub fn admits(&self, value: Option<&T>) -> bool {
            match self {
                Self::All => true,
                Self::Only(expected) => value == Some(expected),
            }
        }
    }

    /// Parses exactly `all` or an empty string as [`Facet::All`], and anything
    /// else as [`Facet::Only`].
    impl<T: FromStr> FromStr for Facet<T> {
        type Err = T::Err;

        fn from_str(s: &str) -> Result<Self, Self::Err> {
            if s.is_empty() || s == "all" {
                return Ok(Self::All);
            }
            s.parse().map(Self::Only)
        }
    }

    /// Inclusive numeric range constraint.
    ///
    /// `min <= max` is not enforced: a [`Range`] with `min > max` admits
    /// nothing.
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
    pub struct Range {
        /// Lower bound, if active.
        pub min: Option<Decimal>,

        /// Upper bound, if active.
        pub max: Option<Decimal>,
    }

    impl Range {
        /// Creates a new [`Range`] out of textual bounds, as typed by a user.
        ///
        /// See [`parse_bound()`] for which inputs result in an inactive bound.
        #[must_use]
        pub fn parse(min: &str, max: &str) -> Self {
            Self {
                min: parse_bound(min),
                max: parse_bound(max),
            }
        }

        /// Indicates whether any bound of this [`Range`] is active.
        #[must_use]
        pub fn is_active(&self) -> bool {
            self.min.is_some() || self.max.is_some()
        }

        /// Checks whether the provided attribute `value` is admitted.
        ///
        /// A missing `value` fails every active bound.
        #[must_use]
        pub fn admits(&self, value: Option<Decimal>) -> bool {
            if !self.is_active() {
                return true;
            }
            value.is_some_and(|v| {
                self.min.map_or(true, |min| v >= min)
                    && self.max.map_or(true, |max| v <= max)
            })
        }
    }

    /// Parses a textual numeric bound.
    ///
    /// [`None`] (no constraint) is returned for blank and unparseable inputs.
    /// Both plain (`1000000`, `1.5`) and scientific (`1e6`) notations are
    /// accepted, surrounding whitespace is ignored.
    #[must_use]
    pub fn parse_bound(input: &str) -> Option<Decimal> {
        let input = input.trim();
        if input.is_empty() {
            return None;
        }
        Decimal::from_str(input)
            .or_else(|_| Decimal::from_scientific(input))
            .ok()
    }

    define_kind! {
        #[doc = "Ownership type selector."]
        enum Ownership {
            #[doc = "Any ownership type."]
            All = 0,

            #[doc = "Freehold units only."]
            Freehold = 1,

            #[doc = "Leasehold units only."]
            Leasehold = 2,
        }
    }

    impl Default for Ownership {
        fn default() -> Self {
            Self::All
        }
    }

    impl Ownership {
        /// Checks whether the provided [`Unit`] is admitted.
        #[must_use]
        pub fn admits(self, unit: &Unit) -> bool {
            match self {
                Self::All => true,
                Self::Freehold => unit.is_free_hold,
                Self::Leasehold => unit.is_lease_hold,
            }
        }
    }
}

#[cfg(test)]
mod spec {
    use std::cmp::Ordering;

    use common::{Money, SquareMeters};
    use rust_decimal::Decimal;

    use super::{
        list::{parse_bound, Criteria, Facet, Ownership, Range},
        locale_cmp, Facets, Selection,
    };
    use crate::{
        domain::{unit, Unit},
        infra::database::mock::fixtures,
    };

    fn area(name: &str) -> Facet<unit::AreaName> {
        Facet::Only(unit::AreaName::new(name).unwrap())
    }

    fn areas(units: &[&Unit]) -> Vec<String> {
        units.iter().map(|u| u.area_name.to_string()).collect()
    }

    fn bare(id: u64) -> Unit {
        Unit {
            id: id.into(),
            area_id: 1.into(),
            area_name: unit::AreaName::new("Nowhere").unwrap(),
            unit_number: None,
            building_number: None,
            floor: None,
            rooms: None,
            actual_area: None,
            balcony_area: None,
            property_type: None,
            project_id: None,
            project_name: None,
            master_project_name: None,
            developer_name: None,
            price: None,
            is_free_hold: false,
            is_lease_hold: false,
            cover_image_url: None,
        }
    }

    #[test]
    fn inactive_criteria_pass_everything() {
        let units = fixtures::units();
        let criteria = Criteria::default();

        assert!(criteria.is_inactive());
        assert_eq!(criteria.apply(&units), units.iter().collect::<Vec<_>>());
    }

    #[test]
    fn min_price_keeps_original_order() {
        let units = fixtures::units();
        let criteria = Criteria {
            price: Range::parse("1000000", ""),
            ..Criteria::default()
        };

        assert_eq!(
            areas(&criteria.apply(&units)),
            ["Downtown Dubai", "Dubai Marina", "Al Satwa"],
        );
    }

    #[test]
    fn area_and_ownership_are_conjunctive() {
        let units = fixtures::units();

        let freehold = Criteria {
            area: area("Business Bay"),
            ownership: Ownership::Freehold,
            ..Criteria::default()
        };
        assert_eq!(areas(&freehold.apply(&units)), ["Business Bay"]);

        let leasehold = Criteria {
            ownership: Ownership::Leasehold,
            ..freehold
        };
        assert!(leasehold.apply(&units).is_empty());
    }

    #[test]
    fn leasehold_only() {
        let units = fixtures::units();
        let criteria = Criteria {
            ownership: Ownership::Leasehold,
            ..Criteria::default()
        };

        assert_eq!(areas(&criteria.apply(&units)), ["Al Satwa"]);
    }

    #[test]
    fn filtering_is_a_repeatable_subsequence() {
        let units = fixtures::units();
        let criteria = Criteria {
            developer: "Select Group".parse().unwrap(),
            rooms: Range::parse("", "3"),
            ..Criteria::default()
        };

        let first = criteria.apply(&units);
        let second = criteria.apply(&units);
        assert_eq!(first, second);
        assert_eq!(areas(&first), ["Business Bay", "Dubai Marina"]);

        let mut rest = units.iter();
        for unit in first {
            assert!(rest.any(|u| u == unit), "not a subsequence");
        }
    }

    #[test]
    fn missing_value_fails_active_bound() {
        let mut priced = bare(1);
        priced.price = Some(Money::aed(10));
        priced.actual_area = SquareMeters::new(50);
        priced.rooms = Some(2.into());
        let units = [bare(2), priced];

        for criteria in [
            Criteria {
                price: Range::parse("0", ""),
                ..Criteria::default()
            },
            Criteria {
                price: Range::parse("", "999999999"),
                ..Criteria::default()
            },
            Criteria {
                actual_area: Range::parse("1", ""),
                ..Criteria::default()
            },
            Criteria {
                rooms: Range::parse("", "10"),
                ..Criteria::default()
            },
        ] {
            let found = criteria.apply(&units);
            assert_eq!(found.len(), 1, "{criteria:?}");
            assert_eq!(found[0].id, 1.into(), "{criteria:?}");
        }
    }

    #[test]
    fn min_above_max_excludes_everything() {
        let units = fixtures::units();
        let criteria = Criteria {
            price: Range::parse("3000000", "1000000"),
            ..Criteria::default()
        };

        assert!(criteria.apply(&units).is_empty());
    }

    #[test]
    fn absent_text_attribute_fails_only_active_facet() {
        let units = [bare(1)];

        assert_eq!(Criteria::default().apply(&units).len(), 1);
        assert!(Criteria {
            project: Facet::Only(unit::ProjectName::new("Burj Views").unwrap()),
            ..Criteria::default()
        }
        .apply(&units)
        .is_empty());
    }

    #[test]
    fn empty_collection() {
        let criteria = Criteria {
            price: Range::parse("1", "2"),
            ..Criteria::default()
        };

        assert!(criteria.apply(&[]).is_empty());
        assert_eq!(Facets::extract(&[]), Facets::default());
    }

    #[test]
    fn parses_bounds() {
        assert_eq!(parse_bound(""), None);
        assert_eq!(parse_bound("   "), None);
        assert_eq!(parse_bound("abc"), None);
        assert_eq!(parse_bound("12abc"), None);
        assert_eq!(parse_bound(" 800000 "), Some(Decimal::from(800_000)));
        assert_eq!(parse_bound("1.5"), Some("1.5".parse().unwrap()));
        assert_eq!(parse_bound("1e6"), Some(Decimal::from(1_000_000)));
    }

    #[test]
    fn unparseable_bound_is_inactive() {
        let units = fixtures::units();
        let criteria = Criteria {
            price: Range::parse("lots", "abc"),
            ..Criteria::default()
        };

        assert!(!criteria.price.is_active());
        assert_eq!(criteria.apply(&units).len(), units.len());
    }

    #[test]
    fn parses_facets() {
        assert_eq!("all".parse::<Facet<unit::AreaName>>(), Ok(Facet::All));
        assert_eq!("".parse::<Facet<unit::AreaName>>(), Ok(Facet::All));
        assert_eq!(
            "Dubai Marina".parse::<Facet<unit::AreaName>>(),
            Ok(area("Dubai Marina")),
        );
        assert_eq!("All".parse::<Facet<unit::AreaName>>(), Ok(area("All")));
    }

    #[test]
    fn extracts_sorted_distinct_facets() {
        let facets = Facets::extract(&fixtures::units());

        assert_eq!(
            facets.areas.iter().map(ToString::to_string).collect::<Vec<_>>(),
            [
                "Al Satwa",
                "Business Bay",
                "Downtown Dubai",
                "Dubai Marina",
                "Jumeirah Village Circle",
            ],
        );
        assert_eq!(
            facets
                .developers
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>(),
            ["DIFC Developments", "Emaar", "Meraas", "Select Group"],
        );
    }

    #[test]
    fn facets_skip_absent_values() {
        let facets = Facets::extract(&[bare(1)]);

        assert_eq!(facets.areas.len(), 1);
        assert!(facets.developers.is_empty());
        assert!(facets.property_types.is_empty());
        assert!(facets.projects.is_empty());
    }

    #[test]
    fn locale_order() {
        assert_eq!(locale_cmp("al Satwa", "Business Bay"), Ordering::Less);
        assert_eq!(locale_cmp("a", "A"), Ordering::Less);
        assert_eq!(locale_cmp("Emaar", "emaar"), Ordering::Greater);
        assert_eq!(locale_cmp("Emaar", "Emaar"), Ordering::Equal);
    }

    #[test]
    fn selection_survives_filtering() {
        let units = fixtures::units();
        let selection = Selection::first_of(&units);
        let criteria = Criteria {
            area: area("Al Satwa"),
            ..Criteria::default()
        };

        let visible = criteria.apply(&units);
        assert!(!visible.iter().any(|u| selection.is(u)));
        assert_eq!(
            selection.resolve(&units).map(|u| u.area_name.to_string()),
            Some("Downtown Dubai".to_owned()),
        );
    }

    #[test]
    fn unknown_selection_resolves_to_none() {
        let units = fixtures::units();

        assert_eq!(Selection::of(42.into()).resolve(&units), None);
        assert_eq!(Selection::default().resolve(&units), None);
        assert_eq!(Selection::first_of(&[]), Selection::default());
    }
}
