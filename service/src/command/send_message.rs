//! [`Command`] for sending a new [`Message`] to a [`Chat`].

use common::DateTime;
use derive_more::{Display, Error};
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::{
        chat::{self, MessageId, Text},
        Chat, Message,
    },
    Service,
};

use super::Command;

/// [`Command`] for sending a new [`Message`] to a [`Chat`].
#[derive(Clone, Debug)]
pub struct SendMessage {
    /// [`Chat`] to send the [`Message`] to.
    pub chat: Chat,

    /// Text of the [`Message`], as typed by the user.
    pub text: String,
}

impl<Db> Command<SendMessage> for Service<Db> {
    type Ok = Message;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        SendMessage { chat, text }: SendMessage,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let text = text.trim();
        if text.is_empty() {
            return Err(tracerr::new!(E::EmptyText));
        }
        let text = Text::new(text)
            .ok_or(E::TextTooLong)
            .map_err(tracerr::wrap!())?;

        let (Some(sender_id), Some(recipient_id)) =
            (chat.participants.first(), chat.counterpart())
        else {
            return Err(tracerr::new!(E::NoCounterpart(chat.id)));
        };

        let message = Message {
            id: MessageId::random(),
            sender_id: sender_id.clone(),
            recipient_id: recipient_id.clone(),
            text,
            sent_at: DateTime::now().coerce(),
            is_read: false,
        };

        log::info!(
            chat = %chat.id,
            id = %message.id,
            to = %message.recipient_id,
            "message sent: {}",
            message.text,
        );

        Ok(message)
    }
}

/// Error of [`SendMessage`] [`Command`] execution.
#[derive(Clone, Debug, Display, Error)]
pub enum ExecutionError {
    /// Text of the [`Message`] is blank.
    #[display("message text is empty")]
    EmptyText,

    /// Text of the [`Message`] is too long.
    #[display("message text is too long")]
    TextTooLong,

    /// [`Chat`] has no counterpart to address the [`Message`] to.
    #[display("`Chat(id: {_0})` has no counterpart")]
    NoCounterpart(#[error(not(source))] chat::Id),
}

#[cfg(test)]
mod spec {
    use std::time::Duration;

    use crate::{
        domain::Chat,
        infra::{
            database::mock::{self, fixtures},
            Mock,
        },
        Command as _, Config, Service,
    };

    use super::{ExecutionError, SendMessage};

    fn service() -> Service<Mock> {
        Service::new(
            Config::default(),
            Mock::new(mock::Config {
                latency: Duration::ZERO,
                ..mock::Config::default()
            }),
        )
    }

    fn chat() -> Chat {
        fixtures::chats().remove(0)
    }

    #[tokio::test]
    async fn addresses_counterpart() {
        let msg = service()
            .execute(SendMessage {
                chat: chat(),
                text: "  Sure, tomorrow at 5 PM?  ".into(),
            })
            .await
            .unwrap();

        assert_eq!(msg.sender_id.as_str(), "user1");
        assert_eq!(msg.recipient_id.as_str(), "user2");
        assert_eq!(msg.text.as_str(), "Sure, tomorrow at 5 PM?");
        assert!(!msg.is_read);
        assert!(chat().contains(&msg));
    }

    #[tokio::test]
    async fn ids_are_unique() {
        let svc = service();
        let send = || {
            svc.execute(SendMessage {
                chat: chat(),
                text: "Hello".into(),
            })
        };

        let first = send().await.unwrap();
        let second = send().await.unwrap();

        assert_ne!(first.id, second.id);
    }

    #[tokio::test]
    async fn rejects_blank_text() {
        let err = service()
            .execute(SendMessage {
                chat: chat(),
                text: " \n\t ".into(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err.as_ref(), ExecutionError::EmptyText));
    }

    #[tokio::test]
    async fn rejects_chat_without_counterpart() {
        let mut chat = chat();
        chat.participants.truncate(1);

        let err = service()
            .execute(SendMessage {
                chat,
                text: "Hello".into(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err.as_ref(), ExecutionError::NoCounterpart(_)));
    }
}
