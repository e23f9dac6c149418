//! Page-level states.
//!
//! Each page keeps its own local copy of the data it shows.

pub mod chat;
pub mod notifications;
pub mod units;
