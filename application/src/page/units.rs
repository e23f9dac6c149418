//! Units page.

use std::fmt;

use service::{
    domain::{unit, Unit},
    query,
    read::{
        unit::list::{Criteria, Facet, Ownership, Range},
        Selection,
    },
    Query as _,
};

use super::or_absent;
use crate::{AsError as _, Error, Service};

/// Filters of the units page.
#[derive(Clone, Debug, clap::Args)]
pub struct Args {
    /// Area to show units of (`all` for any).
    #[arg(long, default_value = "all")]
    pub area: Facet<unit::AreaName>,

    /// Developer to show units of (`all` for any).
    #[arg(long, default_value = "all")]
    pub developer: Facet<unit::DeveloperName>,

    /// Property type to show units of (`all` for any).
    #[arg(long, default_value = "all")]
    pub property_type: Facet<unit::PropertyType>,

    /// Project to show units of (`all` for any).
    #[arg(long, default_value = "all")]
    pub project: Facet<unit::ProjectName>,

    /// Minimum price in AED.
    #[arg(long, default_value_t)]
    pub min_price: String,

    /// Maximum price in AED.
    #[arg(long, default_value_t)]
    pub max_price: String,

    /// Minimum actual area in square meters.
    #[arg(long, default_value_t)]
    pub min_area: String,

    /// Maximum actual area in square meters.
    #[arg(long, default_value_t)]
    pub max_area: String,

    /// Minimum number of bedrooms.
    #[arg(long, default_value_t)]
    pub min_rooms: String,

    /// Maximum number of bedrooms.
    #[arg(long, default_value_t)]
    pub max_rooms: String,

    /// Ownership type (`all`, `freehold` or `leasehold`).
    #[arg(long, default_value = "all")]
    pub ownership: Ownership,

    /// ID of the unit to show the details of.
    ///
    /// The first unit is shown if omitted.
    #[arg(long)]
    pub select: Option<u64>,
}

impl From<Args> for query::units::Overview {
    fn from(args: Args) -> Self {
        let Args {
            area,
            developer,
            property_type,
            project,
            min_price,
            max_price,
            min_area,
            max_area,
            min_rooms,
            max_rooms,
            ownership,
            select,
        } = args;

        Self {
            criteria: Criteria {
                area,
                developer,
                property_type,
                project,
                price: Range::parse(&min_price, &max_price),
                actual_area: Range::parse(&min_area, &max_area),
                rooms: Range::parse(&min_rooms, &max_rooms),
                ownership,
            },
            selection: select.map(|id| Selection::of(id.into())),
        }
    }
}

/// Shows the units page.
///
/// # Errors
///
/// If the units cannot be loaded.
pub async fn show(service: &Service, args: Args) -> Result<String, Error> {
    let overview = service
        .execute(query::units::Overview::from(args))
        .await
        .map_err(|e| e.as_error())?;

    Ok(View(&overview).to_string())
}

/// Text rendering of a [`query::units::Overview`] output.
struct View<'o>(&'o query::units::Output);

impl fmt::Display for View<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let query::units::Output {
            units,
            facets: _,
            selection,
            selected,
        } = self.0;

        match units.len() {
            0 => writeln!(f, "No units match the filters.")?,
            1 => writeln!(f, "1 unit found:")?,
            n => writeln!(f, "{n} units found:")?,
        }
        for unit in units {
            let marker = if selection.is(unit) { '>' } else { ' ' };
            writeln!(
                f,
                "{marker} [{}] {} | {} | {} | {} | {}",
                unit.id,
                unit.title(),
                unit.location(),
                or_absent(unit.price.as_ref()),
                or_absent(unit.rooms),
                or_absent(unit.actual_area),
            )?;
        }

        match selected {
            Some(unit) => Details(unit).fmt(f),
            None => writeln!(f, "\nNo unit selected."),
        }
    }
}

/// Text rendering of the details of a selected [`Unit`].
struct Details<'u>(&'u Unit);

impl fmt::Display for Details<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let u = self.0;

        writeln!(f, "\n{} ({})", u.title(), u.location())?;
        writeln!(f, "  Price:         {}", or_absent(u.price.as_ref()))?;
        writeln!(f, "  Bedrooms:      {}", or_absent(u.rooms))?;
        writeln!(f, "  Actual area:   {}", or_absent(u.actual_area))?;
        writeln!(f, "  Balcony area:  {}", or_absent(u.balcony_area))?;
        writeln!(f, "  Floor:         {}", or_absent(u.floor.as_ref()))?;
        writeln!(
            f,
            "  Building:      {}",
            or_absent(u.building_number.as_ref()),
        )?;
        writeln!(
            f,
            "  Property type: {}",
            or_absent(u.property_type.as_ref()),
        )?;
        writeln!(
            f,
            "  Master:        {}",
            or_absent(u.master_project_name.as_ref()),
        )?;
        writeln!(
            f,
            "  Developer:     {}",
            or_absent(u.developer_name.as_ref()),
        )?;
        writeln!(f, "  Ownership:     {}", ownership(u))?;
        write!(f, "  Photo:         {}", or_absent(u.cover_image_url.as_ref()))
    }
}

/// Renders the ownership types of the provided [`Unit`].
fn ownership(unit: &Unit) -> &'static str {
    match (unit.is_free_hold, unit.is_lease_hold) {
        (true, true) => "Freehold, Leasehold",
        (true, false) => "Freehold",
        (false, true) => "Leasehold",
        (false, false) => super::ABSENT,
    }
}

#[cfg(test)]
mod spec {
    use clap::Parser;

    use super::{show, Args};
    use crate::page::spec::service;

    #[derive(Parser)]
    struct Cli {
        #[command(flatten)]
        args: Args,
    }

    fn args(flags: &[&str]) -> Args {
        Cli::try_parse_from(["units"].iter().chain(flags)).unwrap().args
    }

    #[tokio::test]
    async fn shows_every_unit_with_first_selected() {
        let out = show(&service(), args(&[])).await.unwrap();

        assert!(out.starts_with("5 units found:\n"));
        assert!(out.contains("> [101001] Unit 1208 | Downtown Dubai · Burj Views"));
        assert!(out.contains("  [101002] Unit 2203"));
        assert!(out.contains("Studio"));
        assert!(out.contains("\nUnit 1208 (Downtown Dubai · Burj Views)"));
        assert!(out.contains("  Property type: —"));
    }

    #[tokio::test]
    async fn filters_by_price_and_ownership() {
        let out = show(
            &service(),
            args(&["--min-price", "3e6", "--ownership", "leasehold"]),
        )
        .await
        .unwrap();

        assert!(out.starts_with("1 unit found:\n"));
        assert!(out.contains("  [101005] Unit V-07 | Al Satwa · Satwa Villas"));
        assert!(out.contains("\nUnit 1208 (Downtown Dubai · Burj Views)"));
        assert!(out.contains("  Ownership:     Freehold"));
    }

    #[tokio::test]
    async fn keeps_selection_outside_filter() {
        let out = show(
            &service(),
            args(&["--area", "Dubai Marina", "--select", "101002"]),
        )
        .await
        .unwrap();

        assert!(out.starts_with("1 unit found:\n"));
        assert!(out.contains("  [101004] Unit 5401"));
        assert!(out.contains("\nUnit 2203 (Business Bay · The Bay Gate)"));
    }

    #[tokio::test]
    async fn reports_empty_result() {
        let out = show(&service(), args(&["--min-rooms", "5"])).await.unwrap();

        assert!(out.starts_with("No units match the filters.\n"));
        assert!(out.contains("\nUnit 1208"));
    }

    #[tokio::test]
    async fn reports_unknown_selection() {
        let out = show(&service(), args(&["--select", "1"])).await.unwrap();

        assert!(out.ends_with("\nNo unit selected.\n"));
    }
}
