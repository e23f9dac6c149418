//! [`Query`] collection related to the multiple [`Unit`]s.

use common::operations::{By, Select};
use tracerr::Traced;

use crate::{
    domain::{unit, Unit},
    infra::{database, Database},
    read::{self, unit::list::Criteria, Selection},
    Query, Service,
};

use super::DatabaseQuery;

/// Queries a list of [`Unit`]s satisfying the provided [`Criteria`].
pub type List = DatabaseQuery<By<Vec<Unit>, Criteria>>;

/// Queries [`read::Facets`] of the whole [`Unit`] collection.
pub type Facets = DatabaseQuery<By<read::Facets, ()>>;

/// [`Query`] of everything the units page shows at once.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Overview {
    /// [`Criteria`] to filter the [`Unit`] list with.
    pub criteria: Criteria,

    /// [`Selection`] to resolve.
    ///
    /// [`None`] means the first [`Unit`] of the whole collection.
    pub selection: Option<Selection>,
}

/// Output of the [`Overview`] [`Query`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Output {
    /// [`Unit`]s satisfying the [`Criteria`].
    pub units: Vec<Unit>,

    /// [`read::Facets`] of the whole [`Unit`] collection.
    pub facets: read::Facets,

    /// Applied [`Selection`].
    pub selection: Selection,

    /// Selected [`Unit`], if it exists.
    ///
    /// May be absent from the filtered [`Output::units`].
    pub selected: Option<Unit>,
}

impl<Db> Query<Overview> for Service<Db>
where
    Db: Database<
            Select<By<Vec<Unit>, Criteria>>,
            Ok = Vec<Unit>,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<read::Facets, ()>>,
            Ok = read::Facets,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<Option<Unit>, unit::Id>>,
            Ok = Option<Unit>,
            Err = Traced<database::Error>,
        >,
{
    type Ok = Output;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Overview {
            criteria,
            selection,
        }: Overview,
    ) -> Result<Self::Ok, Self::Err> {
        let selection = match selection {
            Some(s) => s,
            None => {
                let all = self
                    .database()
                    .execute(Select(By::<Vec<Unit>, _>::new(
                        Criteria::default(),
                    )))
                    .await
                    .map_err(tracerr::wrap!())?;
                Selection::first_of(&all)
            }
        };

        let units = self
            .database()
            .execute(Select(By::<Vec<Unit>, _>::new(criteria)))
            .await
            .map_err(tracerr::wrap!())?;
        let facets = self
            .database()
            .execute(Select(By::<read::Facets, _>::new(())))
            .await
            .map_err(tracerr::wrap!())?;
        let selected = match selection.id() {
            Some(id) => self
                .database()
                .execute(Select(By::<Option<Unit>, _>::new(id)))
                .await
                .map_err(tracerr::wrap!())?,
            None => None,
        };

        Ok(Output {
            units,
            facets,
            selection,
            selected,
        })
    }
}

#[cfg(test)]
mod spec {
    use std::time::Duration;

    use crate::{
        infra::{database::mock, Mock},
        read::{
            unit::list::{Criteria, Ownership},
            Selection,
        },
        Config, Query as _, Service,
    };

    use super::Overview;

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
    async fn selects_first_unit_by_default() {
        let out = service()
            .execute(Overview {
                criteria: Criteria {
                    ownership: Ownership::Leasehold,
                    ..Criteria::default()
                },
                selection: None,
            })
            .await
            .unwrap();

        assert_eq!(out.units.len(), 1);
        assert_eq!(out.facets.areas.len(), 5);
        assert_eq!(out.selection, Selection::of(101_001.into()));
        assert_eq!(
            out.selected.map(|u| u.area_name.to_string()).as_deref(),
            Some("Downtown Dubai"),
        );
    }

    #[tokio::test]
    async fn unknown_selection_resolves_to_nothing() {
        let out = service()
            .execute(Overview {
                criteria: Criteria::default(),
                selection: Some(Selection::of(7.into())),
            })
            .await
            .unwrap();

        assert_eq!(out.units.len(), 5);
        assert_eq!(out.selected, None);
    }
}
