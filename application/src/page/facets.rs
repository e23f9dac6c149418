//! Facets page listing the options available for filtering units.

use std::fmt;

use itertools::Itertools as _;
use service::{query, read, Query as _};

use crate::{AsError as _, Error, Service};

/// Shows the facets page.
///
/// # Errors
///
/// If the units cannot be loaded.
pub async fn show(service: &Service) -> Result<String, Error> {
    let facets = service
        .execute(query::units::Facets::by(()))
        .await
        .map_err(|e| e.as_error())?;

    Ok(View(&facets).to_string())
}

/// Text rendering of [`read::Facets`].
struct View<'f>(&'f read::Facets);

impl fmt::Display for View<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let read::Facets {
            areas,
            developers,
            property_types,
            projects,
        } = self.0;

        writeln!(f, "Areas:          {}", options(areas))?;
        writeln!(f, "Developers:     {}", options(developers))?;
        writeln!(f, "Property types: {}", options(property_types))?;
        write!(f, "Projects:       {}", options(projects))
    }
}

/// Renders the provided facet options, always starting with `all`.
fn options(values: &[impl fmt::Display]) -> String {
    ["all".to_owned()]
        .into_iter()
        .chain(values.iter().map(ToString::to_string))
        .join(", ")
}
