//! Chats page.

use std::fmt;

use common::Reduce as _;
use service::{
    command::send_message,
    domain::{user, Chat},
    query,
    state::page::chat::{Action, State},
    Command as _,
};
use tracing as log;

use crate::{define_error, AsError, Error, Service};

/// Options of the chats page.
#[derive(Clone, Debug, clap::Args)]
pub struct Args {
    /// ID of the chat to open.
    #[arg(long)]
    pub open: Option<String>,

    /// Text of a message to send to the opened chat.
    ///
    /// Blank text is not sent.
    #[arg(long, requires = "open")]
    pub send: Option<String>,
}

/// Shows the chats page.
///
/// # Errors
///
/// - If the chats cannot be loaded.
/// - If the chat to open doesn't exist.
/// - If the message cannot be sent.
pub async fn show(service: &Service, args: Args) -> Result<String, Error> {
    let Args { open, send } = args;

    let chats = service
        .execute(query::chats::List::by(()))
        .await
        .map_err(|e| e.as_error())?;
    let mut out = List(&chats).to_string();

    let Some(chat_id) = open else {
        return Ok(out);
    };
    let conversation = service
        .execute(query::chat::Conversation {
            chat_id: chat_id.clone().into(),
        })
        .await
        .map_err(|e| e.as_error())?
        .ok_or_else(|| unknown_chat(&chat_id))?;

    let mut state = State::new(conversation.chat, conversation.messages)
        .reduce(Action::Type(send.unwrap_or_default()));
    if let Some(cmd) = state.outgoing() {
        let msg = service.execute(cmd).await.map_err(|e| e.as_error())?;
        log::debug!("appending sent message `{}`", msg.id);
        state = state.reduce(Action::Sent(msg));
    }

    out.push_str(
        &Conversation {
            state: &state,
            counterpart: conversation.counterpart.as_ref(),
        }
        .to_string(),
    );
    Ok(out)
}

/// Creates an [`Error`] of the [`Chat`] with the provided ID not existing.
fn unknown_chat(id: &str) -> Error {
    define_error! {
        enum Error {
            #[code = "UNKNOWN_CHAT"]
            #[exit = 4]
            #[message = "`Chat` with the provided ID doesn't exist"]
            UnknownChat,
        }
    }

    log::warn!("`Chat(id: {id})` doesn't exist");
    Error::UnknownChat.into()
}

impl AsError for send_message::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        define_error! {
            enum Error {
                #[code = "EMPTY_TEXT"]
                #[exit = 2]
                #[message = "`Message` text must not be blank"]
                EmptyText,

                #[code = "TEXT_TOO_LONG"]
                #[exit = 2]
                #[message = "`Message` text is too long"]
                TextTooLong,

                #[code = "NO_COUNTERPART"]
                #[exit = 4]
                #[message = "`Chat` has no counterpart to send `Message` to"]
                NoCounterpart,
            }
        }

        Some(
            match self {
                Self::EmptyText => Error::EmptyText,
                Self::TextTooLong => Error::TextTooLong,
                Self::NoCounterpart(_) => Error::NoCounterpart,
            }
            .into(),
        )
    }
}

/// Text rendering of a [`Chat`] list.
struct List<'c>(&'c [Chat]);

impl fmt::Display for List<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No chats yet.");
        }
        for chat in self.0 {
            let unread = match chat.unread_count {
                0 => String::new(),
                n => format!(" ({n} unread)"),
            };
            writeln!(f, "[{}] {} {}{unread}", chat.id, chat.initials(), chat.title)?;
            if let Some(last) = &chat.last_message {
                writeln!(
                    f,
                    "    {} {}",
                    last.sent_at.to_time_string(),
                    last.text,
                )?;
            }
        }
        Ok(())
    }
}

/// Text rendering of an opened [`Chat`].
struct Conversation<'s> {
    /// [`State`] of the opened [`Chat`].
    state: &'s State,

    /// Counterpart of the opened [`Chat`], if known.
    counterpart: Option<&'s user::Participant>,
}

impl fmt::Display for Conversation<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { state, counterpart } = self;

        writeln!(f, "\n{}", state.chat.title)?;
        if let Some(p) = counterpart {
            writeln!(f, "with {} ({})", p.name, p.role)?;
        }
        for msg in &state.messages {
            let from = if state.is_incoming(msg) {
                counterpart.map_or("Them", |p| p.name.as_str())
            } else {
                "You"
            };
            writeln!(
                f,
                "  {} {} {from}: {}",
                msg.sent_at.to_date_string(),
                msg.sent_at.to_time_string(),
                msg.text,
            )?;
        }
        Ok(())
    }
}
