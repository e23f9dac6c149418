//! Units page state.

use common::Reduce;

use crate::{
    domain::{unit, Unit},
    read::{unit::list::Criteria, Selection},
};

/// State of the units page.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct State {
    /// Applied [`Criteria`].
    pub criteria: Criteria,

    /// Current [`Selection`].
    pub selection: Selection,
}

impl State {
    /// Creates a new [`State`] for the provided [`Unit`] collection, with no
    /// filters applied and the first [`Unit`] selected.
    #[must_use]
    pub fn new(units: &[Unit]) -> Self {
        Self {
            criteria: Criteria::default(),
            selection: Selection::first_of(units),
        }
    }

    /// Returns the [`Unit`]s of the provided collection shown in the list.
    #[must_use]
    pub fn visible<'u>(&self, units: &'u [Unit]) -> Vec<&'u Unit> {
        self.criteria.apply(units)
    }

    /// Returns the [`Unit`] shown in the details panel, if any.
    #[must_use]
    pub fn selected<'u>(&self, units: &'u [Unit]) -> Option<&'u Unit> {
        self.selection.resolve(units)
    }
}

/// Action upon a [`State`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Action {
    /// Replaces the [`Criteria`].
    Filter(Criteria),

    /// Selects the [`Unit`] with the provided ID.
    Select(unit::Id),

    /// Resets the [`Criteria`], leaving the [`Selection`] as is.
    ClearFilters,
}

impl Reduce<Action> for State {
    fn reduce(mut self, action: Action) -> Self {
        match action {
            Action::Filter(criteria) => self.criteria = criteria,
            Action::Select(id) => self.selection = Selection::of(id),
            Action::ClearFilters => self.criteria = Criteria::default(),
        }
        self
    }
}
