//! [`Command`] definition.

pub mod send_message;
pub mod submit_listing;

/// [`Command`] of the [`Service`].
///
/// [`Service`]: crate::Service
pub use common::Handler as Command;

pub use self::{send_message::SendMessage, submit_listing::SubmitListing};
