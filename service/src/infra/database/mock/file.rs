//! [`Unit`] fixtures loaded from a file.

use std::{collections::HashSet, path::Path};

use common::{Money, SquareMeters};
use rust_decimal::Decimal;
use serde::Deserialize;
use tracerr::Traced;

use super::Error;
use crate::domain::{unit, Unit};

/// Contents of a fixtures file.
#[derive(Debug, Deserialize)]
struct Fixtures {
    /// [`Record`]s of the listed [`Unit`]s.
    units: Vec<Record>,
}

/// [`Unit`] record as exported by the land registry.
#[derive(Debug, Deserialize)]
struct Record {
    property_id: u64,
    area_id: u32,
    area_name_en: String,
    #[serde(default)]
    unit_number: Option<String>,
    #[serde(default)]
    building_number: Option<String>,
    #[serde(default)]
    floor: Option<String>,
    #[serde(default)]
    rooms: Option<u8>,
    #[serde(default)]
    actual_area: Option<Decimal>,
    #[serde(default)]
    unit_balcony_area: Option<Decimal>,
    #[serde(default)]
    property_type_en: Option<String>,
    #[serde(default)]
    project_id: Option<u32>,
    #[serde(default)]
    project_name_en: Option<String>,
    #[serde(default)]
    master_project_en: Option<String>,
    #[serde(default)]
    developer_name: Option<String>,
    #[serde(default)]
    price_aed: Option<Decimal>,

    /// `1` for freehold [`Unit`]s.
    #[serde(default)]
    is_free_hold: u8,

    /// `1` for leasehold [`Unit`]s.
    #[serde(default)]
    is_lease_hold: u8,

    #[serde(default)]
    cover_image_url: Option<String>,
}

/// Loads [`Unit`]s from the TOML/JSON/YAML file at the provided `path`.
///
/// # Errors
///
/// - [`Error::Load`] if the file cannot be read or parsed;
/// - [`Error::InvalidUnit`] if any of its [`Record`]s is invalid or repeats
///   a `property_id` of a preceding one.
pub(super) fn load(path: &Path) -> Result<Vec<Unit>, Traced<Error>> {
    let fixtures: Fixtures = config::Config::builder()
        .add_source(config::File::from(path).required(true))
        .build()
        .and_then(|c| c.try_deserialize())
        .map_err(Error::Load)
        .map_err(tracerr::wrap!())?;

    let mut ids = HashSet::with_capacity(fixtures.units.len());
    fixtures
        .units
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            Unit::try_from(record)
                .and_then(|unit| {
                    ids.insert(unit.id)
                        .then_some(unit)
                        .ok_or("duplicate `property_id`")
                })
                .map_err(|reason| Error::InvalidUnit { index, reason })
                .map_err(tracerr::wrap!())
        })
        .collect()
}

/// Parses an optional text attribute of a [`Record`].
///
/// Blank values are treated as absent.
fn text<T>(
    value: Option<String>,
    reason: &'static str,
) -> Result<Option<T>, &'static str>
where
    T: std::str::FromStr,
{
    match value.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(v) => v.parse().map(Some).map_err(|_| reason),
    }
}

/// Parses an optional area attribute of a [`Record`].
fn area(
    value: Option<Decimal>,
    reason: &'static str,
) -> Result<Option<SquareMeters>, &'static str> {
    value.map(|v| SquareMeters::new(v).ok_or(reason)).transpose()
}

impl TryFrom<Record> for Unit {
    type Error = &'static str;

    fn try_from(r: Record) -> Result<Self, Self::Error> {
        Ok(Self {
            id: r.property_id.into(),
            area_id: r.area_id.into(),
            area_name: text(Some(r.area_name_en), "invalid `area_name_en`")?
                .ok_or("missing `area_name_en`")?,
            unit_number: text(r.unit_number, "invalid `unit_number`")?,
            building_number: text(
                r.building_number,
                "invalid `building_number`",
            )?,
            floor: text(r.floor, "invalid `floor`")?,
            rooms: r.rooms.map(unit::Rooms::from),
            actual_area: area(r.actual_area, "negative `actual_area`")?,
            balcony_area: area(
                r.unit_balcony_area,
                "negative `unit_balcony_area`",
            )?,
            property_type: text(r.property_type_en, "invalid `property_type_en`")?,
            project_id: r.project_id.map(unit::ProjectId::from),
            project_name: text(r.project_name_en, "invalid `project_name_en`")?,
            master_project_name: text(
                r.master_project_en,
                "invalid `master_project_en`",
            )?,
            developer_name: text(r.developer_name, "invalid `developer_name`")?,
            price: r.price_aed.map(Money::aed),
            is_free_hold: r.is_free_hold == 1,
            is_lease_hold: r.is_lease_hold == 1,
            cover_image_url: text(r.cover_image_url, "invalid `cover_image_url`")?,
        })
    }
}
