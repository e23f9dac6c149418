//! [`Query`] collection related to the multiple [`Notification`]s.

use common::operations::{By, Select};
use tracerr::Traced;

use crate::{
    domain::Notification,
    infra::{database, Database},
    read::notification::{Counts, Filter},
    Query, Service,
};

use super::DatabaseQuery;

/// Queries a list of [`Notification`]s passing the provided [`Filter`].
pub type List = DatabaseQuery<By<Vec<Notification>, Filter>>;

/// [`Query`] of the [`Notification`]s passing a [`Filter`] along with the
/// [`Counts`] of all of them.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Overview {
    /// [`Filter`] to apply.
    pub filter: Filter,
}

/// Output of the [`Overview`] [`Query`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Output {
    /// [`Notification`]s passing the [`Filter`].
    pub notifications: Vec<Notification>,

    /// [`Counts`] of all the [`Notification`]s, regardless the [`Filter`].
    pub counts: Counts,
}

impl<Db> Query<Overview> for Service<Db>
where
    Db: Database<
        Select<By<Vec<Notification>, Filter>>,
        Ok = Vec<Notification>,
        Err = Traced<database::Error>,
    >,
{
    type Ok = Output;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Overview { filter }: Overview,
    ) -> Result<Self::Ok, Self::Err> {
        let all = self
            .database()
            .execute(Select(By::<Vec<Notification>, _>::new(Filter::All)))
            .await
            .map_err(tracerr::wrap!())?;
        let counts = Counts::of(&all);

        let notifications = match filter {
            Filter::All => all,
            Filter::Only(_) => self
                .database()
                .execute(Select(By::<Vec<Notification>, _>::new(filter)))
                .await
                .map_err(tracerr::wrap!())?,
        };

        Ok(Output {
            notifications,
            counts,
        })
    }
}

#[cfg(test)]
mod spec {
    use std::time::Duration;

    use crate::{
        domain::notification::Kind,
        infra::{database::mock, Mock},
        read::notification::Filter,
        Config, Query as _, Service,
    };

    use super::Overview;

    #[tokio::test]
    async fn counts_ignore_filter() {
        let service = Service::new(
            Config::default(),
            Mock::new(mock::Config {
                latency: Duration::ZERO,
                ..mock::Config::default()
            }),
        );

        let out = service
            .execute(Overview {
                filter: Filter::Only(Kind::System),
            })
            .await
            .unwrap();

        assert_eq!(
            out.notifications
                .iter()
                .map(|n| n.id.as_str())
                .collect::<Vec<_>>(),
            ["1", "4", "8"],
        );
        assert_eq!(out.counts.total, 8);
        assert_eq!(out.counts.unread, 4);
    }
}
