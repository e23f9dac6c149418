//! [`User`] definitions.

use common::{define_kind, unit, DateTimeOf};

/// Registered user of the platform.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct User {
    /// ID of this [`User`].
    pub id: Id,

    /// [`Email`] of this [`User`].
    pub email: Email,

    /// [`Phone`] number of this [`User`].
    pub phone: Phone,

    /// [`Name`] of this [`User`].
    pub name: Name,

    /// [`Kind`] of this [`User`].
    pub kind: Kind,

    /// Indicator whether this [`User`] passed the identity verification.
    pub is_verified: bool,

    /// [`SubscriptionPlan`] of this [`User`].
    pub subscription_plan: SubscriptionPlan,

    /// [`DateTime`] when the [`SubscriptionPlan`] of this [`User`] expires.
    ///
    /// [`None`] for the free plan.
    ///
    /// [`DateTime`]: common::DateTime
    pub subscription_expiry: Option<ExpiryDateTime>,

    /// [`DateTime`] when this [`User`] was created.
    ///
    /// [`DateTime`]: common::DateTime
    pub created_at: CreationDateTime,
}

define_id! {
    #[doc = "ID of a [`User`]."]
    Id
}

define_text! {
    #[doc = "Email of a [`User`]."]
    Email(320)
}

define_text! {
    #[doc = "Phone number of a [`User`]."]
    Phone(32)
}

define_text! {
    #[doc = "Name of a [`User`]."]
    Name(256)
}

define_kind! {
    #[doc = "Kind of a [`User`]."]
    enum Kind {
        #[doc = "Property owner listing units."]
        Seller = 1,

        #[doc = "Prospective buyer."]
        Buyer = 2,

        #[doc = "Investor looking for deals."]
        Investor = 3,
    }
}

define_kind! {
    #[doc = "Subscription plan of a [`User`]."]
    enum SubscriptionPlan {
        #[doc = "Free plan."]
        Free = 1,

        #[doc = "Premium plan."]
        Premium = 2,

        #[doc = "Plan for professional sellers."]
        ProSeller = 3,
    }
}

/// [`DateTime`] when a [`User`] was created.
///
/// [`DateTime`]: common::DateTime
pub type CreationDateTime = DateTimeOf<(User, unit::Creation)>;

/// [`DateTime`] when a [`SubscriptionPlan`] of a [`User`] expires.
///
/// [`DateTime`]: common::DateTime
pub type ExpiryDateTime = DateTimeOf<(SubscriptionPlan, unit::End)>;

/// Participant of a [`Chat`].
///
/// [`Chat`]: crate::domain::Chat
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Participant {
    /// ID of the [`User`] behind this [`Participant`].
    pub id: Id,

    /// Displayed [`Name`] of this [`Participant`].
    pub name: Name,

    /// URL of the avatar of this [`Participant`], if any.
    pub avatar: Option<String>,

    /// [`Role`] of this [`Participant`] in a [`Chat`].
    ///
    /// [`Chat`]: crate::domain::Chat
    pub role: Role,
}

define_kind! {
    #[doc = "Role of a [`Participant`] in a [`Chat`].\n\n[`Chat`]: crate::domain::Chat"]
    enum Role {
        #[doc = "Prospective buyer."]
        Buyer = 1,

        #[doc = "Property owner."]
        Seller = 2,
    }
}
