//! In-memory [`Database`] serving mock data.

#[cfg(feature = "fixtures-file")]
mod file;
pub mod fixtures;

#[cfg(feature = "fixtures-file")]
use std::path::PathBuf;
use std::{sync::Arc, time::Duration};

use common::operations::{By, Select};
use derive_more::{Display, Error as StdError};
use smart_default::SmartDefault;
use tokio::sync::OnceCell;
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::{chat, listing, unit, user, Chat, Message, Notification, Unit},
    infra::{database, Database},
    read::{self, unit::list::Criteria, Facets, Selection},
};

/// [`Mock`] configuration.
#[derive(Clone, Debug, SmartDefault)]
pub struct Config {
    /// Artificial latency before the mock data becomes available.
    #[default(Duration::from_millis(500))]
    pub latency: Duration,

    /// Path to a file with [`Unit`] fixtures replacing the built-in ones.
    #[cfg(feature = "fixtures-file")]
    pub units: Option<PathBuf>,
}

/// In-memory [`Database`] serving mock data.
///
/// The data becomes available only once the configured latency elapses after
/// the first access. Dropping the pending access cancels the wait, and the
/// next access starts it anew.
#[derive(Clone, Debug)]
pub struct Mock(Arc<Inner>);

/// Shared state of a [`Mock`].
#[derive(Debug)]
struct Inner {
    /// [`Config`] of the [`Mock`].
    config: Config,

    /// Lazily loaded [`Data`].
    data: OnceCell<Data>,
}

/// Mock data served by a [`Mock`].
#[derive(Clone, Debug)]
struct Data {
    /// Listed [`Unit`]s.
    units: Vec<Unit>,

    /// [`Chat`]s of the current user.
    chats: Vec<Chat>,

    /// [`Message`]s of all the [`Chat`]s.
    messages: Vec<Message>,

    /// Participants of all the [`Chat`]s.
    participants: Vec<user::Participant>,

    /// [`Notification`]s of the current user.
    notifications: Vec<Notification>,

    /// Options selectable in a listing form.
    catalog: listing::Catalog,
}

impl Mock {
    /// Creates a new [`Mock`] with the provided [`Config`].
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self(Arc::new(Inner {
            config,
            data: OnceCell::new(),
        }))
    }

    /// Returns the [`Data`] of this [`Mock`], waiting for the artificial
    /// latency on the first access.
    async fn data(&self) -> Result<&Data, Traced<database::Error>> {
        let Inner { config, data } = &*self.0;
        data.get_or_try_init(|| async {
            log::debug!("loading mock data in {:?}", config.latency);
            tokio::time::sleep(config.latency).await;
            Data::load(config)
        })
        .await
        .map_err(tracerr::map_from_and_wrap!())
    }
}

impl Data {
    /// Loads the [`Data`] according to the provided [`Config`].
    fn load(config: &Config) -> Result<Self, Traced<Error>> {
        #[cfg(feature = "fixtures-file")]
        let units = match &config.units {
            Some(path) => {
                let units = file::load(path).map_err(tracerr::wrap!())?;
                log::info!(
                    "loaded {} `Unit`s from `{}`",
                    units.len(),
                    path.display(),
                );
                units
            }
            None => fixtures::units(),
        };
        #[cfg(not(feature = "fixtures-file"))]
        let units = {
            let Config { latency: _ } = config;
            fixtures::units()
        };

        Ok(Self {
            units,
            chats: fixtures::chats(),
            messages: fixtures::messages(),
            participants: fixtures::participants(),
            notifications: fixtures::notifications(),
            catalog: fixtures::catalog(),
        })
    }
}

/// [`Mock`] error.
#[derive(Debug, Display, StdError)]
pub enum Error {
    /// Failed to read or parse a fixtures file.
    #[cfg(feature = "fixtures-file")]
    #[display("failed to load fixtures: {_0}")]
    Load(config::ConfigError),

    /// Fixtures file contains an invalid [`Unit`].
    #[display("invalid `Unit` #{index} in fixtures: {reason}")]
    InvalidUnit {
        /// Index of the invalid [`Unit`] in the file.
        #[error(not(source))]
        index: usize,

        /// Reason of the [`Unit`] being invalid.
        #[error(not(source))]
        reason: &'static str,
    },
}

impl Database<Select<By<Vec<Unit>, Criteria>>> for Mock {
    type Ok = Vec<Unit>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Vec<Unit>, Criteria>>,
    ) -> Result<Self::Ok, Self::Err> {
        let criteria = by.into_inner();
        let data = self.data().await.map_err(tracerr::wrap!())?;
        Ok(criteria.apply(&data.units).into_iter().cloned().collect())
    }
}

impl Database<Select<By<Option<Unit>, unit::Id>>> for Mock {
    type Ok = Option<Unit>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<Unit>, unit::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let selection = Selection::of(by.into_inner());
        let data = self.data().await.map_err(tracerr::wrap!())?;
        Ok(selection.resolve(&data.units).cloned())
    }
}

impl Database<Select<By<Facets, ()>>> for Mock {
    type Ok = Facets;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        _: Select<By<Facets, ()>>,
    ) -> Result<Self::Ok, Self::Err> {
        let data = self.data().await.map_err(tracerr::wrap!())?;
        Ok(Facets::extract(&data.units))
    }
}

impl Database<Select<By<Vec<Chat>, ()>>> for Mock {
    type Ok = Vec<Chat>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        _: Select<By<Vec<Chat>, ()>>,
    ) -> Result<Self::Ok, Self::Err> {
        let data = self.data().await.map_err(tracerr::wrap!())?;
        Ok(data.chats.clone())
    }
}

impl Database<Select<By<Option<Chat>, chat::Id>>> for Mock {
    type Ok = Option<Chat>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<Chat>, chat::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let id = by.into_inner();
        let data = self.data().await.map_err(tracerr::wrap!())?;
        Ok(data.chats.iter().find(|c| c.id == id).cloned())
    }
}

impl Database<Select<By<Vec<Message>, Chat>>> for Mock {
    type Ok = Vec<Message>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Vec<Message>, Chat>>,
    ) -> Result<Self::Ok, Self::Err> {
        let chat = by.into_inner();
        let data = self.data().await.map_err(tracerr::wrap!())?;
        Ok(data
            .messages
            .iter()
            .filter(|m| chat.contains(m))
            .cloned()
            .collect())
    }
}

impl Database<Select<By<Vec<user::Participant>, ()>>> for Mock {
    type Ok = Vec<user::Participant>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        _: Select<By<Vec<user::Participant>, ()>>,
    ) -> Result<Self::Ok, Self::Err> {
        let data = self.data().await.map_err(tracerr::wrap!())?;
        Ok(data.participants.clone())
    }
}

impl Database<Select<By<Vec<Notification>, read::notification::Filter>>>
    for Mock
{
    type Ok = Vec<Notification>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Vec<Notification>, read::notification::Filter>>,
    ) -> Result<Self::Ok, Self::Err> {
        let filter = by.into_inner();
        let data = self.data().await.map_err(tracerr::wrap!())?;
        Ok(read::notification::apply(&filter, &data.notifications)
            .into_iter()
            .cloned()
            .collect())
    }
}

impl Database<Select<By<listing::Catalog, ()>>> for Mock {
    type Ok = listing::Catalog;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        _: Select<By<listing::Catalog, ()>>,
    ) -> Result<Self::Ok, Self::Err> {
        let data = self.data().await.map_err(tracerr::wrap!())?;
        Ok(data.catalog.clone())
    }
}

#[cfg(test)]
mod spec {
    use std::time::Duration;

    use common::{
        operations::{By, Select},
        Handler as _,
    };
    use tokio::time::{self, Instant};

    use super::{Config, Mock};
    use crate::{
        domain::{chat, unit, Chat, Unit},
        read::unit::list::Criteria,
    };

    fn mock(latency: Duration) -> Mock {
        Mock::new(Config {
            latency,
            ..Config::default()
        })
    }

    #[tokio::test(start_paused = true)]
    async fn waits_for_latency_once() {
        let db = mock(Duration::from_millis(500));

        let started = Instant::now();
        let units = db
            .execute(Select(By::<Vec<Unit>, _>::new(Criteria::default())))
            .await
            .unwrap();
        assert_eq!(units.len(), 5);
        assert!(started.elapsed() >= Duration::from_millis(500));

        let again = Instant::now();
        let chats = db
            .execute(Select(By::<Vec<Chat>, ()>::new(())))
            .await
            .unwrap();
        assert_eq!(chats.len(), 3);
        assert_eq!(again.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn cancelled_wait_restarts() {
        let db = mock(Duration::from_millis(500));

        let pending = db.execute(Select(By::<Vec<Chat>, ()>::new(())));
        assert!(time::timeout(Duration::from_millis(100), pending)
            .await
            .is_err());

        let chats = db
            .execute(Select(By::<Vec<Chat>, ()>::new(())))
            .await
            .unwrap();
        assert_eq!(chats.len(), 3);
    }

    #[tokio::test]
    async fn selects_by_id() {
        let db = mock(Duration::ZERO);

        let unit: Option<Unit> = db
            .execute(Select(By::new(unit::Id::from(101_004))))
            .await
            .unwrap();
        assert_eq!(unit.unwrap().area_name.as_str(), "Dubai Marina");

        let missing: Option<Unit> = db
            .execute(Select(By::new(unit::Id::from(1))))
            .await
            .unwrap();
        assert!(missing.is_none());

        let chat: Option<Chat> = db
            .execute(Select(By::new(chat::Id::from("2"))))
            .await
            .unwrap();
        assert_eq!(chat.unwrap().title.as_str(), "Sarah Johnson - Villa Inquiry");
    }
}
