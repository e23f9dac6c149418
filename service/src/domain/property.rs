//! [`Property`] definitions.

use common::{define_kind, unit, DateTimeOf, Money, SquareMeters};

use crate::domain::user;

/// Property advertised by its owner without a broker.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Property {
    /// ID of this [`Property`].
    pub id: Id,

    /// Title of this [`Property`].
    pub title: String,

    /// Description of this [`Property`].
    pub description: String,

    /// [`Kind`] of this [`Property`].
    pub kind: Kind,

    /// Location of this [`Property`].
    pub location: String,

    /// Area of this [`Property`].
    pub area: SquareMeters,

    /// Number of bedrooms in this [`Property`].
    pub bedrooms: u8,

    /// Number of bathrooms in this [`Property`].
    pub bathrooms: u8,

    /// Asking price of this [`Property`].
    pub price: Money,

    /// Amenities of this [`Property`].
    pub amenities: Vec<String>,

    /// URLs of the images of this [`Property`].
    pub images: Vec<String>,

    /// ID of the [`User`] selling this [`Property`].
    ///
    /// [`User`]: crate::domain::User
    pub seller_id: user::Id,

    /// Indicator whether ownership of this [`Property`] is verified.
    pub is_verified: bool,

    /// [`DateTime`] when this [`Property`] was created.
    ///
    /// [`DateTime`]: common::DateTime
    pub created_at: CreationDateTime,

    /// Reason the owner sells this [`Property`] without a broker.
    pub no_broker_reason: String,
}

define_id! {
    #[doc = "ID of a [`Property`]."]
    Id
}

define_kind! {
    #[doc = "Kind of a [`Property`]."]
    enum Kind {
        #[doc = "An apartment in a building."]
        Apartment = 1,

        #[doc = "A standalone villa."]
        Villa = 2,

        #[doc = "A townhouse."]
        Townhouse = 3,

        #[doc = "An office."]
        Office = 4,

        #[doc = "A shop."]
        Shop = 5,
    }
}

/// [`DateTime`] when a [`Property`] was created.
///
/// [`DateTime`]: common::DateTime
pub type CreationDateTime = DateTimeOf<(Property, unit::Creation)>;
