//! Notifications page state.

use common::Reduce;

use crate::{
    domain::{notification, Notification},
    read::notification::{self as read, Counts, Filter},
};

/// State of the notifications page.
///
/// Keeps a local copy of the [`Notification`]s, so marking them as read
/// doesn't touch their source.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct State {
    /// Local copy of all the [`Notification`]s.
    pub notifications: Vec<Notification>,

    /// Applied [`Filter`].
    pub filter: Filter,
}

impl State {
    /// Creates a new [`State`] showing all the provided [`Notification`]s.
    #[must_use]
    pub fn new(notifications: Vec<Notification>) -> Self {
        Self {
            notifications,
            filter: Filter::All,
        }
    }

    /// Returns the [`Notification`]s passing the [`Filter`].
    #[must_use]
    pub fn visible(&self) -> Vec<&Notification> {
        read::apply(&self.filter, &self.notifications)
    }

    /// Returns the number of unread [`Notification`]s, regardless the
    /// [`Filter`].
    #[must_use]
    pub fn unread_count(&self) -> usize {
        self.notifications.iter().filter(|n| !n.is_read).count()
    }

    /// Returns [`Counts`] of all the [`Notification`]s.
    #[must_use]
    pub fn counts(&self) -> Counts {
        Counts::of(&self.notifications)
    }
}

/// Action upon a [`State`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Action {
    /// Replaces the [`Filter`].
    Filter(Filter),

    /// Marks the [`Notification`] with the provided ID as read.
    ///
    /// Unknown IDs are ignored.
    MarkAsRead(notification::Id),

    /// Marks every [`Notification`] as read.
    MarkAllAsRead,
}

impl Reduce<Action> for State {
    fn reduce(mut self, action: Action) -> Self {
        match action {
            Action::Filter(filter) => self.filter = filter,
            Action::MarkAsRead(id) => {
                if let Some(n) =
                    self.notifications.iter_mut().find(|n| n.id == id)
                {
                    n.is_read = true;
                }
            }
            Action::MarkAllAsRead => {
                for n in &mut self.notifications {
                    n.is_read = true;
                }
            }
        }
        self
    }
}

#[cfg(test)]
mod spec {
    use common::Reduce as _;

    use super::{Action, State};
    use crate::{
        domain::notification::Kind, infra::database::mock::fixtures,
        read::notification::Filter,
    };

    #[test]
    fn mark_as_read() {
        let state = State::new(fixtures::notifications());
        assert_eq!(state.unread_count(), 4);

        let state = state
            .reduce(Action::MarkAsRead("3".into()))
            .reduce(Action::MarkAsRead("3".into()))
            .reduce(Action::MarkAsRead("42".into()));
        assert_eq!(state.unread_count(), 3);

        let state = state.reduce(Action::MarkAllAsRead);
        assert_eq!(state.unread_count(), 0);
        assert_eq!(state.notifications.len(), 8);
    }

    #[test]
    fn filter_keeps_unread_count_global() {
        let state = State::new(fixtures::notifications())
            .reduce(Action::Filter(Filter::Only(Kind::Important)));

        assert_eq!(
            state.visible().iter().map(|n| n.id.as_str()).collect::<Vec<_>>(),
            ["2", "5", "7"],
        );
        assert_eq!(state.unread_count(), 4);
        assert_eq!(state.counts().of_kind(Kind::Important), 3);
    }
}
