//! Chat page state.

use common::Reduce;

use crate::{
    command::SendMessage,
    domain::{Chat, Message},
};

/// State of an opened [`Chat`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct State {
    /// Opened [`Chat`].
    pub chat: Chat,

    /// Loaded [`Message`]s of the [`Chat`].
    pub messages: Vec<Message>,

    /// Text typed in the input, not sent yet.
    pub draft: String,
}

impl State {
    /// Creates a new [`State`] of the provided [`Chat`] with its [`Message`]s.
    #[must_use]
    pub fn new(chat: Chat, messages: Vec<Message>) -> Self {
        Self {
            chat,
            messages,
            draft: String::new(),
        }
    }

    /// Returns the [`SendMessage`] command sending the current draft.
    ///
    /// [`None`] is returned for a blank draft, which is never sent.
    #[must_use]
    pub fn outgoing(&self) -> Option<SendMessage> {
        (!self.draft.trim().is_empty()).then(|| SendMessage {
            chat: self.chat.clone(),
            text: self.draft.clone(),
        })
    }

    /// Indicates whether the provided [`Message`] is sent by the counterpart
    /// of the [`Chat`].
    #[must_use]
    pub fn is_incoming(&self, msg: &Message) -> bool {
        self.chat.counterpart() == Some(&msg.sender_id)
    }
}

/// Action upon a [`State`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Action {
    /// Replaces the draft with the provided text.
    Type(String),

    /// Appends a sent [`Message`], clearing the draft.
    Sent(Message),
}

impl Reduce<Action> for State {
    fn reduce(mut self, action: Action) -> Self {
        match action {
            Action::Type(text) => self.draft = text,
            Action::Sent(msg) => {
                self.messages.push(msg);
                self.draft.clear();
            }
        }
        self
    }
}

#[cfg(test)]
mod spec {
    use std::time::Duration;

    use common::Reduce as _;

    use super::{Action, State};
    use crate::{
        infra::{
            database::mock::{self, fixtures},
            Mock,
        },
        Command as _, Config, Service,
    };

    fn state() -> State {
        let chat = fixtures::chats().remove(0);
        let messages = fixtures::messages()
            .into_iter()
            .filter(|m| chat.contains(m))
            .collect();
        State::new(chat, messages)
    }

    #[test]
    fn blank_draft_is_not_sent() {
        let state = state().reduce(Action::Type("   ".into()));

        assert!(state.outgoing().is_none());
    }

    #[test]
    fn incoming_messages_are_from_counterpart() {
        let state = state();

        let incoming = state
            .messages
            .iter()
            .map(|m| state.is_incoming(m))
            .collect::<Vec<_>>();
        assert_eq!(incoming, [true, false]);
    }

    #[tokio::test]
    async fn sending_appends_and_clears_draft() {
        let service = Service::new(
            Config::default(),
            Mock::new(mock::Config {
                latency: Duration::ZERO,
                ..mock::Config::default()
            }),
        );
        let state = state().reduce(Action::Type("See you there".into()));

        let cmd = state.outgoing().unwrap();
        let sent = service.execute(cmd).await.unwrap();
        let state = state.reduce(Action::Sent(sent));

        assert!(state.draft.is_empty());
        assert_eq!(state.messages.len(), 3);
        assert_eq!(state.messages[2].text.as_str(), "See you there");
    }
}
