//! Read models derived from domain entities.

pub mod notification;
pub mod unit;

pub use self::unit::{Facets, Selection};
