//! [`Query`] collection related to listings.

use common::operations::{By, Select};
use tracerr::Traced;

use crate::{
    domain::listing,
    infra::{database, Database},
    Query, Service,
};

use super::DatabaseQuery;

/// Queries the [`listing::Catalog`] of options selectable in a
/// [`listing::Form`].
pub type Catalog = DatabaseQuery<By<listing::Catalog, ()>>;

/// [`Query`] of a new draft [`listing::Form`] with the first option of every
/// mandatory catalogue preselected.
///
/// Resolves to [`None`] if any mandatory catalogue is empty.
#[derive(Clone, Copy, Debug, Default)]
pub struct Draft;

impl<Db> Query<Draft> for Service<Db>
where
    Db: Database<
        Select<By<listing::Catalog, ()>>,
        Ok = listing::Catalog,
        Err = Traced<database::Error>,
    >,
{
    type Ok = Option<(listing::Form, listing::Catalog)>;
    type Err = Traced<database::Error>;

    async fn execute(&self, _: Draft) -> Result<Self::Ok, Self::Err> {
        let catalog = self
            .database()
            .execute(Select(By::<listing::Catalog, _>::new(())))
            .await
            .map_err(tracerr::wrap!())?;

        Ok(catalog
            .draft(self.config().listing_max_images)
            .map(|form| (form, catalog)))
    }
}
