//! [`Notification`]-related read definitions.

use std::collections::HashMap;

use crate::{
    domain::{notification::Kind, Notification},
    read::unit::list::Facet,
};

/// Filter of a [`Notification`] list by [`Kind`].
pub type Filter = Facet<Kind>;

/// Filters the provided [`Notification`]s, preserving their order.
#[must_use]
pub fn apply<'n>(
    filter: &Filter,
    notifications: &'n [Notification],
) -> Vec<&'n Notification> {
    notifications
        .iter()
        .filter(|n| filter.admits(Some(&n.kind())))
        .collect()
}

/// Counters of a [`Notification`] list.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Counts {
    /// Total number of [`Notification`]s.
    pub total: usize,

    /// Number of unread [`Notification`]s.
    pub unread: usize,

    /// Number of [`Notification`]s of each [`Kind`].
    by_kind: HashMap<Kind, usize>,
}

impl Counts {
    /// Counts the provided [`Notification`]s.
    #[must_use]
    pub fn of(notifications: &[Notification]) -> Self {
        notifications.iter().fold(Self::default(), |mut counts, n| {
            counts.total += 1;
            if !n.is_read {
                counts.unread += 1;
            }
            *counts.by_kind.entry(n.kind()).or_default() += 1;
            counts
        })
    }

    /// Returns the number of [`Notification`]s of the provided [`Kind`].
    #[must_use]
    pub fn of_kind(&self, kind: Kind) -> usize {
        self.by_kind.get(&kind).copied().unwrap_or_default()
    }
}

#[cfg(test)]
mod spec {
    use super::{apply, Counts, Filter};
    use crate::{domain::notification::Kind, infra::database::mock::fixtures};

    #[test]
    fn counts_fixtures() {
        let counts = Counts::of(&fixtures::notifications());

        assert_eq!(counts.total, 8);
        assert_eq!(counts.unread, 4);
        assert_eq!(counts.of_kind(Kind::System), 3);
        assert_eq!(counts.of_kind(Kind::Important), 3);
        assert_eq!(counts.of_kind(Kind::Info), 2);
    }

    #[test]
    fn filters_by_kind() {
        let notifications = fixtures::notifications();

        let info = apply(&Filter::Only(Kind::Info), &notifications);
        assert_eq!(
            info.iter().map(|n| n.id.as_str()).collect::<Vec<_>>(),
            ["3", "6"],
        );
        assert_eq!(apply(&Filter::All, &notifications).len(), 8);
    }

    #[test]
    fn empty_list() {
        let counts = Counts::of(&[]);

        assert_eq!(counts, Counts::default());
        assert_eq!(counts.of_kind(Kind::Info), 0);
    }
}
