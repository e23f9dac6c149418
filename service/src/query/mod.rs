//! [`Query`] definition.

pub mod chat;
pub mod chats;
pub mod listing;
pub mod notifications;
pub mod unit;
pub mod units;

use common::operations::{By, Select};
use tracerr::Traced;

use crate::{
    infra::{database, Database},
    Service,
};

/// [`Query`] of the [`Service`].
pub use common::Handler as Query;

/// [`Query`] [`Select`]ing a `T`ype from a [`Database`].
#[derive(Clone, Copy, Debug)]
#[expect(clippy::module_name_repetitions, reason = "more readable")]
pub struct DatabaseQuery<T>(T);

impl<W, B> DatabaseQuery<By<W, B>> {
    /// Creates a new [`DatabaseQuery`] selecting a `W` by the provided `B`.
    #[must_use]
    pub fn by(by: B) -> Self {
        Self(By::new(by))
    }
}

impl<Db, W, B> Query<DatabaseQuery<By<W, B>>> for Service<Db>
where
    Db: Database<Select<By<W, B>>, Ok = W, Err = Traced<database::Error>>,
{
    type Ok = W;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        DatabaseQuery(by): DatabaseQuery<By<W, B>>,
    ) -> Result<Self::Ok, Self::Err> {
        self.database()
            .execute(Select(by))
            .await
            .map_err(tracerr::wrap!())
    }
}

#[cfg(test)]
mod spec {
    use std::time::Duration;

    use crate::{
        infra::{database::mock, Mock},
        read::unit::list::{Criteria, Range},
        Config, Query as _, Service,
    };

    use super::{chats, listing, units};

    fn service() -> Service<Mock> {
        Service::new(
            Config::default(),
            Mock::new(mock::Config {
                latency: Duration::ZERO,
                ..mock::Config::default()
            }),
        )
    }

    #[tokio::test]
    async fn selects_from_database() {
        let svc = service();

        let units = svc
            .execute(units::List::by(Criteria {
                rooms: Range::parse("3", ""),
                ..Criteria::default()
            }))
            .await
            .unwrap();
        assert_eq!(units.len(), 2);

        let chats = svc.execute(chats::List::by(())).await.unwrap();
        assert_eq!(chats.len(), 3);

        let catalog = svc.execute(listing::Catalog::by(())).await.unwrap();
        assert_eq!(catalog.land_types.len(), 4);
    }
}
