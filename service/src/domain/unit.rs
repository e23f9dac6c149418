//! [`Unit`] definitions.

use std::fmt;

use common::{Money, SquareMeters};
use derive_more::{Display, From, FromStr, Into};

/// Real-estate unit listed directly by its owner.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Unit {
    /// ID of this [`Unit`].
    pub id: Id,

    /// [`AreaId`] of the area this [`Unit`] is located in.
    pub area_id: AreaId,

    /// [`AreaName`] of the area this [`Unit`] is located in.
    pub area_name: AreaName,

    /// [`UnitNumber`] of this [`Unit`] inside its building, if known.
    pub unit_number: Option<UnitNumber>,

    /// [`BuildingNumber`] of the building this [`Unit`] is located in.
    pub building_number: Option<BuildingNumber>,

    /// [`Floor`] of this [`Unit`], if known.
    pub floor: Option<Floor>,

    /// Number of [`Rooms`] in this [`Unit`], if known.
    pub rooms: Option<Rooms>,

    /// Actual area of this [`Unit`], if known.
    pub actual_area: Option<SquareMeters>,

    /// Balcony area of this [`Unit`], if any.
    pub balcony_area: Option<SquareMeters>,

    /// [`PropertyType`] of this [`Unit`], if known.
    pub property_type: Option<PropertyType>,

    /// [`ProjectId`] of the project this [`Unit`] belongs to, if any.
    pub project_id: Option<ProjectId>,

    /// [`ProjectName`] of the project this [`Unit`] belongs to, if any.
    pub project_name: Option<ProjectName>,

    /// [`ProjectName`] of the master project this [`Unit`] belongs to, if any.
    pub master_project_name: Option<ProjectName>,

    /// [`DeveloperName`] of the developer who built this [`Unit`], if known.
    pub developer_name: Option<DeveloperName>,

    /// Asking price of this [`Unit`], if disclosed.
    pub price: Option<Money>,

    /// Indicator whether this [`Unit`] is owned as freehold.
    pub is_free_hold: bool,

    /// Indicator whether this [`Unit`] is owned as leasehold.
    pub is_lease_hold: bool,

    /// [`ImageUrl`] of the cover photo of this [`Unit`], if any.
    pub cover_image_url: Option<ImageUrl>,
}

impl Unit {
    /// Returns a short human-readable title of this [`Unit`].
    ///
    /// Falls back to the [`Id`] when the [`UnitNumber`] is unknown.
    #[must_use]
    pub fn title(&self) -> String {
        match &self.unit_number {
            Some(num) => format!("Unit {num}"),
            None => format!("Unit #{}", self.id),
        }
    }

    /// Returns the location line of this [`Unit`]: its area, followed by its
    /// project (if any).
    #[must_use]
    pub fn location(&self) -> String {
        match &self.project_name {
            Some(project) => format!("{} · {project}", self.area_name),
            None => self.area_name.to_string(),
        }
    }
}

/// ID of a [`Unit`].
#[derive(
    Clone,
    Copy,
    Debug,
    Display,
    Eq,
    From,
    FromStr,
    Hash,
    Into,
    Ord,
    PartialEq,
    PartialOrd,
)]
pub struct Id(u64);

/// ID of an area in the land registry.
#[derive(
    Clone, Copy, Debug, Display, Eq, From, FromStr, Hash, Into, PartialEq,
)]
pub struct AreaId(u32);

/// ID of a project in the land registry.
#[derive(
    Clone, Copy, Debug, Display, Eq, From, FromStr, Hash, Into, PartialEq,
)]
pub struct ProjectId(u32);

define_text! {
    #[doc = "Name of an area a [`Unit`] is located in."]
    AreaName(256)
}

define_text! {
    #[doc = "Name of a developer who built a [`Unit`]."]
    DeveloperName(256)
}

define_text! {
    #[doc = "Type of a property, e.g. `Apartment` or `Villa`."]
    PropertyType(128)
}

define_text! {
    #[doc = "Name of a (master) project a [`Unit`] belongs to."]
    ProjectName(256)
}

define_text! {
    #[doc = "Number of a [`Unit`] inside its building."]
    UnitNumber(64)
}

define_text! {
    #[doc = "Number of a building a [`Unit`] is located in."]
    BuildingNumber(64)
}

define_text! {
    #[doc = "Floor of a [`Unit`], e.g. `12` or `G`."]
    Floor(16)
}

define_text! {
    #[doc = "URL of an image of a [`Unit`]."]
    ImageUrl(2048)
}

/// Number of bedrooms in a [`Unit`], where `0` means a studio.
#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    From,
    FromStr,
    Hash,
    Into,
    Ord,
    PartialEq,
    PartialOrd,
)]
pub struct Rooms(u8);

impl Rooms {
    /// Returns the number of these [`Rooms`].
    #[must_use]
    pub const fn count(self) -> u8 {
        self.0
    }
}

/// Displays as `Studio`, `1 Bed` or `{n} Beds`.
impl Display for Rooms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            0 => f.write_str("Studio"),
            1 => f.write_str("1 Bed"),
            n => write!(f, "{n} Beds"),
        }
    }
}

#[cfg(test)]
mod spec {
    use super::{AreaName, Rooms};

    #[test]
    fn rooms_label() {
        assert_eq!(Rooms::from(0).to_string(), "Studio");
        assert_eq!(Rooms::from(1).to_string(), "1 Bed");
        assert_eq!(Rooms::from(4).to_string(), "4 Beds");
    }

    #[test]
    fn text_must_be_trimmed_and_non_empty() {
        assert!(AreaName::new("Dubai Marina").is_some());
        assert!(AreaName::new("").is_none());
        assert!(AreaName::new(" Dubai Marina").is_none());
        assert!("".parse::<AreaName>().is_err());
    }
}
