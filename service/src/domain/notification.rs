//! [`Notification`] definitions.

use common::{define_kind, unit, DateTimeOf, Money, Percent};

use crate::domain::{self, chat};

/// Notification shown in the notification center.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Notification {
    /// ID of this [`Notification`].
    pub id: Id,

    /// Title of this [`Notification`].
    pub title: String,

    /// Message of this [`Notification`].
    pub message: String,

    /// [`DateTime`] when this [`Notification`] was issued.
    ///
    /// [`DateTime`]: common::DateTime
    pub issued_at: DeliveryDateTime,

    /// Indicator whether this [`Notification`] was read.
    pub is_read: bool,

    /// [`Payload`] of this [`Notification`].
    pub payload: Payload,
}

impl Notification {
    /// Returns [`Kind`] of this [`Notification`].
    #[must_use]
    pub fn kind(&self) -> Kind {
        self.payload.kind()
    }
}

define_id! {
    #[doc = "ID of a [`Notification`]."]
    Id
}

define_kind! {
    #[doc = "Kind of a [`Notification`]."]
    enum Kind {
        #[doc = "Platform-wide announcement."]
        System = 1,

        #[doc = "Action or attention required from the user."]
        Important = 2,

        #[doc = "Informational update."]
        Info = 3,
    }
}

impl Kind {
    /// Returns the human-readable label of this [`Kind`].
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::System => "System",
            Self::Important => "Important",
            Self::Info => "Info",
        }
    }
}

/// Typed data attached to a [`Notification`].
///
/// Each variant belongs to exactly one [`Kind`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Payload {
    /// Upcoming maintenance window.
    Maintenance {
        /// [`DateTime`] when the maintenance starts.
        ///
        /// [`DateTime`]: common::DateTime
        starts_at: MaintenanceStartDateTime,

        /// [`DateTime`] when the maintenance ends.
        ///
        /// [`DateTime`]: common::DateTime
        ends_at: MaintenanceEndDateTime,

        /// Reason of the maintenance.
        reason: String,
    },

    /// Finished maintenance.
    MaintenanceCompleted {
        /// ID of the finished maintenance.
        maintenance_id: String,

        /// Improvements delivered by the maintenance.
        improvements: Vec<String>,
    },

    /// Platform performance improvements.
    PerformanceUpdate {
        /// Delivered improvements.
        improvements: Vec<String>,
    },

    /// Documents of a listing have been verified.
    DocumentsVerified {
        /// ID of the verified listing.
        listing_id: String,

        /// Names of the verified documents.
        documents: Vec<String>,
    },

    /// Payment has been processed.
    Payment {
        /// ID of the payment transaction.
        transaction_id: String,

        /// Paid amount.
        amount: Money,

        /// ID of the listing the payment is made for.
        listing_id: String,

        /// Duration the listing is featured for.
        feature_duration: String,
    },

    /// Account verification is not finished yet.
    VerificationRequired {
        /// Steps left to finish the verification.
        steps: Vec<String>,

        /// Completed part of the verification.
        completion: Percent,
    },

    /// New message in a [`Chat`].
    ///
    /// [`Chat`]: crate::domain::Chat
    NewMessage {
        /// ID of the [`Chat`] the message is sent to.
        ///
        /// [`Chat`]: crate::domain::Chat
        chat_id: chat::Id,

        /// Name of the message sender.
        sender: String,

        /// Listing the conversation is about.
        listing: String,
    },

    /// New property matching the user preferences.
    NewProperty {
        /// ID of the listed [`Unit`].
        ///
        /// [`Unit`]: crate::domain::Unit
        property_id: domain::unit::Id,

        /// Location of the listed property.
        location: String,

        /// Asking price of the listed property.
        price: Money,

        /// Type of the listed property.
        property_type: String,
    },
}

impl Payload {
    /// Returns [`Kind`] this [`Payload`] belongs to.
    #[must_use]
    pub const fn kind(&self) -> Kind {
        match self {
            Self::Maintenance { .. }
            | Self::MaintenanceCompleted { .. }
            | Self::PerformanceUpdate { .. } => Kind::System,
            Self::DocumentsVerified { .. }
            | Self::Payment { .. }
            | Self::VerificationRequired { .. } => Kind::Important,
            Self::NewMessage { .. } | Self::NewProperty { .. } => Kind::Info,
        }
    }

    /// Returns short human-readable details of this [`Payload`].
    #[must_use]
    pub fn details(&self) -> String {
        match self {
            Self::Maintenance {
                starts_at,
                ends_at,
                reason,
            } => format!(
                "{reason} ({} {} - {} UTC)",
                starts_at.to_date_string(),
                starts_at.to_time_string(),
                ends_at.to_time_string(),
            ),
            Self::MaintenanceCompleted {
                maintenance_id,
                improvements,
            } => format!("{maintenance_id}: {}", improvements.join(", ")),
            Self::PerformanceUpdate { improvements } => improvements.join(", "),
            Self::DocumentsVerified {
                listing_id,
                documents,
            } => format!("listing #{listing_id}: {}", documents.join(", ")),
            Self::Payment {
                transaction_id,
                amount,
                listing_id,
                feature_duration,
            } => format!(
                "{amount} for listing #{listing_id}, featured for \
                 {feature_duration} ({transaction_id})",
            ),
            Self::VerificationRequired { steps, completion } => {
                format!("{completion} done, left: {}", steps.join(", "))
            }
            Self::NewMessage {
                chat_id,
                sender,
                listing,
            } => format!("{sender} about {listing} (chat #{chat_id})"),
            Self::NewProperty {
                property_id,
                location,
                price,
                property_type,
            } => format!("{property_type} in {location}, {price} (#{property_id})"),
        }
    }
}

/// [`DateTime`] when a [`Notification`] was issued.
///
/// [`DateTime`]: common::DateTime
pub type DeliveryDateTime = DateTimeOf<(Notification, unit::Delivery)>;

/// [`DateTime`] when a maintenance starts.
///
/// [`DateTime`]: common::DateTime
pub type MaintenanceStartDateTime = DateTimeOf<(Payload, unit::Start)>;

/// [`DateTime`] when a maintenance ends.
///
/// [`DateTime`]: common::DateTime
pub type MaintenanceEndDateTime = DateTimeOf<(Payload, unit::End)>;

#[cfg(test)]
mod spec {
    use common::{Money, Percent};

    use super::{Kind, Payload};

    #[test]
    fn kind_follows_payload() {
        assert_eq!(
            Payload::PerformanceUpdate {
                improvements: vec![],
            }
            .kind(),
            Kind::System,
        );
        assert_eq!(
            Payload::VerificationRequired {
                steps: vec!["Verify phone number".into()],
                completion: Percent::new(60).unwrap(),
            }
            .kind(),
            Kind::Important,
        );
        assert_eq!(
            Payload::NewProperty {
                property_id: 8.into(),
                location: "Dubai Marina".into(),
                price: Money::aed(2_500_000),
                property_type: "apartment".into(),
            }
            .kind(),
            Kind::Info,
        );
    }

    #[test]
    fn details_of_payment() {
        let payload = Payload::Payment {
            transaction_id: "txn_98765".into(),
            amount: Money::aed(500),
            listing_id: "12345".into(),
            feature_duration: "30 days".into(),
        };

        assert_eq!(
            payload.details(),
            "AED 500 for listing #12345, featured for 30 days (txn_98765)",
        );
    }

    #[test]
    fn labels() {
        let labels = Kind::all().map(Kind::label).collect::<Vec<_>>();

        assert_eq!(labels, ["System", "Important", "Info"]);
    }

    #[test]
    fn parses_snake_case() {
        assert_eq!("important".parse::<Kind>(), Ok(Kind::Important));
        assert_eq!(Kind::System.to_string(), "system");
        assert!("Important".parse::<Kind>().is_err());
    }
}
