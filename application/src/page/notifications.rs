//! Notifications page.

use std::fmt;

use common::reduce::reduce_all;
use service::{
    domain::notification::Kind,
    query,
    read::notification::Filter,
    state::page::notifications::{Action, State},
    Query as _,
};

use crate::{AsError as _, Error, Service};

/// Options of the notifications page.
#[derive(Clone, Debug, clap::Args)]
pub struct Args {
    /// Kind of notifications to show (`all`, `system`, `important` or
    /// `info`).
    #[arg(long, default_value = "all")]
    pub kind: Filter,

    /// ID of a notification to mark as read.
    ///
    /// Unknown IDs are ignored.
    #[arg(long)]
    pub mark_read: Vec<String>,

    /// Marks every notification as read.
    #[arg(long)]
    pub mark_all_read: bool,
}

impl Args {
    /// Returns the [`Action`]s these [`Args`] apply to the page [`State`].
    fn actions(self) -> impl Iterator<Item = Action> {
        let Self {
            kind,
            mark_read,
            mark_all_read,
        } = self;

        [Action::Filter(kind)]
            .into_iter()
            .chain(
                mark_read
                    .into_iter()
                    .map(|id| Action::MarkAsRead(id.into())),
            )
            .chain(mark_all_read.then_some(Action::MarkAllAsRead))
    }
}

/// Shows the notifications page.
///
/// # Errors
///
/// If the notifications cannot be loaded.
pub async fn show(service: &Service, args: Args) -> Result<String, Error> {
    let all = service
        .execute(query::notifications::List::by(Filter::All))
        .await
        .map_err(|e| e.as_error())?;

    let state = reduce_all(State::new(all), args.actions());
    Ok(View(&state).to_string())
}

/// Text rendering of the notifications page [`State`].
struct View<'s>(&'s State);

impl fmt::Display for View<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.0;
        let counts = state.counts();

        writeln!(f, "Notifications ({} unread)", state.unread_count())?;
        write!(f, "All ({})", counts.total)?;
        for kind in Kind::all() {
            write!(f, " | {} ({})", kind.label(), counts.of_kind(kind))?;
        }
        writeln!(f)?;

        let visible = state.visible();
        if visible.is_empty() {
            return writeln!(f, "\nNo notifications.");
        }
        for n in visible {
            let marker = if n.is_read { ' ' } else { '*' };
            writeln!(
                f,
                "\n{marker} [{}] {} | {} | {} {}",
                n.id,
                n.kind().label(),
                n.title,
                n.issued_at.to_date_string(),
                n.issued_at.to_time_string(),
            )?;
            writeln!(f, "    {}", n.message)?;
            writeln!(f, "    {}", n.payload.details())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod spec {
    use service::read::notification::Filter;

    use super::{show, Args};
    use crate::page::spec::service;

    fn args(kind: Filter, mark_read: &[&str], mark_all_read: bool) -> Args {
        Args {
            kind,
            mark_read: mark_read.iter().map(|&id| id.to_owned()).collect(),
            mark_all_read,
        }
    }

    #[tokio::test]
    async fn shows_all_with_counts() {
        let out = show(&service(), args(Filter::All, &[], false))
            .await
            .unwrap();

        assert!(out.starts_with(
            "Notifications (4 unread)\n\
             All (8) | System (3) | Important (3) | Info (2)\n",
        ));
        assert!(out.contains("\n* [1] System | System Update | 2024-02-04 10:00\n"));
        assert!(out.contains("\n  [2] Important | Document Processing Complete"));
    }

    #[tokio::test]
    async fn filters_by_kind_keeping_counts() {
        let out = show(&service(), args("info".parse().unwrap(), &[], false))
            .await
            .unwrap();

        assert!(out.contains("All (8) | System (3) | Important (3) | Info (2)"));
        assert!(out.contains("[3] Info"));
        assert!(out.contains("[6] Info"));
        assert!(!out.contains("[1] System"));
    }

    #[tokio::test]
    async fn marks_as_read() {
        let out = show(&service(), args(Filter::All, &["1", "42"], false))
            .await
            .unwrap();
        assert!(out.starts_with("Notifications (3 unread)\n"));
        assert!(out.contains("\n  [1] System"));

        let out = show(&service(), args(Filter::All, &[], true))
            .await
            .unwrap();
        assert!(out.starts_with("Notifications (0 unread)\n"));
        assert!(!out.contains("\n* ["));
    }
}
