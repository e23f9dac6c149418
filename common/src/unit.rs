//! Marker types.

/// Marker type describing an entity creation.
#[derive(Clone, Copy, Debug)]
pub struct Creation;

/// Marker type describing a message or notification delivery.
#[derive(Clone, Copy, Debug)]
pub struct Delivery;

/// Marker type describing the start of a time window.
#[derive(Clone, Copy, Debug)]
pub struct Start;

/// Marker type describing the end of a time window.
#[derive(Clone, Copy, Debug)]
pub struct End;
