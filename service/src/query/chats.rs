//! [`Query`] collection related to the multiple [`Chat`]s.

use common::operations::By;

use crate::domain::{user, Chat};
#[cfg(doc)]
use crate::Query;

use super::DatabaseQuery;

/// Queries a list of [`Chat`]s of the current user.
pub type List = DatabaseQuery<By<Vec<Chat>, ()>>;

/// Queries a list of [`user::Participant`]s of all the [`Chat`]s.
pub type Participants = DatabaseQuery<By<Vec<user::Participant>, ()>>;
