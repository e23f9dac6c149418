//! [`Reduce`] abstractions.

/// State transitioned by applying actions to it.
///
/// Implementations must be pure: the resulting state depends only on the
/// previous state and the applied action.
pub trait Reduce<Action> {
    /// Applies the provided `action`, returning the next state.
    #[must_use]
    fn reduce(self, action: Action) -> Self;
}

/// Applies every action of the provided sequence to the `state` in order.
pub fn reduce_all<S, A>(state: S, actions: impl IntoIterator<Item = A>) -> S
where
    S: Reduce<A>,
{
    actions.into_iter().fold(state, Reduce::reduce)
}
