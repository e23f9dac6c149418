//! [`Database`]-related implementations.

pub mod mock;

use derive_more::{Display, Error as StdError, From};

pub use self::mock::Mock;

/// Database operation.
pub use common::Handler as Database;

/// [`Database`] error.
#[derive(Debug, Display, From, StdError)]
pub enum Error {
    /// [`Mock`] error.
    Mock(mock::Error),
}
