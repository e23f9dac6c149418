//! [`Query`] collection related to a single [`Chat`].

use common::operations::{By, Select};
use tracerr::Traced;

use crate::{
    domain::{chat, user, Chat, Message},
    infra::{database, Database},
    Query, Service,
};

use super::DatabaseQuery;

/// Queries a [`Chat`] by its [`chat::Id`].
pub type ById = DatabaseQuery<By<Option<Chat>, chat::Id>>;

/// Queries [`Message`]s of a [`Chat`].
pub type Messages = DatabaseQuery<By<Vec<Message>, Chat>>;

/// [`Query`] of a [`Chat`] opened along with its [`Message`]s.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Conversation {
    /// ID of the [`Chat`] to open.
    pub chat_id: chat::Id,
}

/// Output of the [`Conversation`] [`Query`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Output {
    /// Opened [`Chat`].
    pub chat: Chat,

    /// [`Message`]s of the opened [`Chat`], in their original order.
    pub messages: Vec<Message>,

    /// Counterpart [`user::Participant`] of the [`Chat`], if known.
    pub counterpart: Option<user::Participant>,
}

impl<Db> Query<Conversation> for Service<Db>
where
    Db: Database<
            Select<By<Option<Chat>, chat::Id>>,
            Ok = Option<Chat>,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<Vec<Message>, Chat>>,
            Ok = Vec<Message>,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<Vec<user::Participant>, ()>>,
            Ok = Vec<user::Participant>,
            Err = Traced<database::Error>,
        >,
{
    type Ok = Option<Output>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Conversation { chat_id }: Conversation,
    ) -> Result<Self::Ok, Self::Err> {
        let Some(chat) = self
            .database()
            .execute(Select(By::<Option<Chat>, _>::new(chat_id)))
            .await
            .map_err(tracerr::wrap!())?
        else {
            return Ok(None);
        };

        let messages = self
            .database()
            .execute(Select(By::<Vec<Message>, _>::new(chat.clone())))
            .await
            .map_err(tracerr::wrap!())?;
        let counterpart = self
            .database()
            .execute(Select(By::<Vec<user::Participant>, _>::new(())))
            .await
            .map_err(tracerr::wrap!())?
            .into_iter()
            .find(|p| Some(&p.id) == chat.counterpart());

        Ok(Some(Output {
            chat,
            messages,
            counterpart,
        }))
    }
}

#[cfg(test)]
mod spec {
    use std::time::Duration;

    use crate::{
        infra::{database::mock, Mock},
        Config, Query as _, Service,
    };

    use super::Conversation;

    fn service() -> Service<Mock> {
        Service::new(
            Config::default(),
            Mock::new(mock::Config {
                latency: Duration::ZERO,
                ..mock::Config::default()
            }),
        )
    }

    #[tokio::test]
    async fn opens_chat_with_counterpart_messages() {
        let out = service()
            .execute(Conversation {
                chat_id: "2".into(),
            })
            .await
            .unwrap()
            .unwrap();

        assert_eq!(
            out.messages.iter().map(|m| m.id.as_str()).collect::<Vec<_>>(),
            ["3", "4"],
        );
        assert_eq!(
            out.counterpart.map(|p| p.name.to_string()).as_deref(),
            Some("Sarah Johnson"),
        );
    }

    #[tokio::test]
    async fn unknown_chat_is_none() {
        let out = service()
            .execute(Conversation {
                chat_id: "42".into(),
            })
            .await
            .unwrap();

        assert!(out.is_none());
    }
}
