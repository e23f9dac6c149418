//! [`Chat`] definitions.

use common::{unit, DateTimeOf};

use crate::domain::user;

/// Conversation between a property owner and a prospective buyer.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Chat {
    /// ID of this [`Chat`].
    pub id: Id,

    /// [`Title`] of this [`Chat`].
    pub title: Title,

    /// IDs of the users participating in this [`Chat`].
    ///
    /// The first one is the current user, the second one is the counterpart.
    pub participants: Vec<user::Id>,

    /// Last [`Message`] sent in this [`Chat`], if any.
    pub last_message: Option<Message>,

    /// Number of unread [`Message`]s in this [`Chat`].
    pub unread_count: u32,

    /// [`DateTime`] when this [`Chat`] was created.
    ///
    /// [`DateTime`]: common::DateTime
    pub created_at: CreationDateTime,
}

impl Chat {
    /// Returns the ID of the counterpart participant of this [`Chat`], if any.
    #[must_use]
    pub fn counterpart(&self) -> Option<&user::Id> {
        self.participants.get(1)
    }

    /// Indicates whether the provided [`Message`] belongs to this [`Chat`].
    ///
    /// A [`Message`] belongs to a [`Chat`] when it is sent by or addressed to
    /// its counterpart.
    #[must_use]
    pub fn contains(&self, msg: &Message) -> bool {
        self.counterpart()
            .is_some_and(|id| msg.sender_id == *id || msg.recipient_id == *id)
    }

    /// Returns avatar initials of this [`Chat`]: the first letters of the
    /// first two words of its [`Title`].
    #[must_use]
    pub fn initials(&self) -> String {
        self.title
            .as_str()
            .split_whitespace()
            .filter_map(|w| w.chars().next())
            .take(2)
            .collect()
    }
}

define_id! {
    #[doc = "ID of a [`Chat`]."]
    Id
}

define_text! {
    #[doc = "Title of a [`Chat`]."]
    Title(256)
}

/// [`DateTime`] when a [`Chat`] was created.
///
/// [`DateTime`]: common::DateTime
pub type CreationDateTime = DateTimeOf<(Chat, unit::Creation)>;

/// Single message of a [`Chat`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Message {
    /// ID of this [`Message`].
    pub id: MessageId,

    /// ID of the user who sent this [`Message`].
    pub sender_id: user::Id,

    /// ID of the user this [`Message`] is addressed to.
    pub recipient_id: user::Id,

    /// [`Text`] of this [`Message`].
    pub text: Text,

    /// [`DateTime`] when this [`Message`] was sent.
    ///
    /// [`DateTime`]: common::DateTime
    pub sent_at: DeliveryDateTime,

    /// Indicator whether this [`Message`] was read by its recipient.
    pub is_read: bool,
}

define_id! {
    #[doc = "ID of a [`Message`]."]
    MessageId
}

impl MessageId {
    /// Creates a new random [`MessageId`].
    #[must_use]
    pub fn random() -> Self {
        uuid::Uuid::new_v4().to_string().into()
    }
}

define_text! {
    #[doc = "Text of a [`Message`]."]
    Text(4096)
}

/// [`DateTime`] when a [`Message`] was sent.
///
/// [`DateTime`]: common::DateTime
pub type DeliveryDateTime = DateTimeOf<(Message, unit::Delivery)>;
