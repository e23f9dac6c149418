//! Listing submission page.

use std::fmt;

use common::{Money, SquareMeters};
use itertools::Itertools as _;
use service::{
    command::{submit_listing, SubmitListing},
    domain::{
        listing::{self, Form, Image, TooManyImages},
        unit,
    },
    query, Command as _,
};

use super::or_absent;
use crate::{define_error, AsError, Error, Service};

/// Fields of a new listing.
#[derive(Clone, Debug, clap::Args)]
pub struct Args {
    /// ID of the area the property is located in.
    #[arg(long)]
    pub area_id: u32,

    /// Actual area of the property in square meters.
    #[arg(long)]
    pub actual_area: Option<SquareMeters>,

    /// Balcony area of the property in square meters.
    #[arg(long)]
    pub balcony_area: Option<SquareMeters>,

    /// Number of bedrooms (`0` for a studio).
    #[arg(long, default_value_t = 0)]
    pub rooms: u8,

    /// ID of the property type.
    #[arg(long)]
    pub property_type_id: Option<u32>,

    /// ID of the property sub-type.
    #[arg(long)]
    pub sub_type_id: Option<u32>,

    /// ID of the land type.
    #[arg(long)]
    pub land_type_id: Option<u32>,

    /// ID of the project the property belongs to.
    #[arg(long)]
    pub project_id: Option<u32>,

    /// Number of the building.
    #[arg(long)]
    pub building_number: Option<unit::BuildingNumber>,

    /// Number of the unit inside its building.
    #[arg(long)]
    pub unit_number: Option<unit::UnitNumber>,

    /// Floor of the unit.
    #[arg(long)]
    pub floor: Option<unit::Floor>,

    /// Name of the developer.
    #[arg(long)]
    pub developer: Option<unit::DeveloperName>,

    /// Asking price in AED.
    #[arg(long)]
    pub asking_price: Option<u64>,

    /// Owns the property as leasehold instead of freehold.
    #[arg(long)]
    pub leasehold: bool,

    /// Free-form description.
    #[arg(long, default_value_t)]
    pub description: String,

    /// Name of the contact person.
    #[arg(long)]
    pub contact_person: Option<String>,

    /// Contact phone number.
    #[arg(long)]
    pub contact_phone: Option<String>,

    /// Contact email.
    #[arg(long)]
    pub contact_email: Option<String>,

    /// Photo to attach, as `NAME:SIZE:MIME`.
    #[arg(long = "image", value_parser = parse_image)]
    pub images: Vec<Image>,
}

impl Args {
    /// Fills the provided draft [`Form`] with these [`Args`], selecting the
    /// referenced options of the [`listing::Catalog`].
    ///
    /// Unknown option IDs leave the preselected options untouched.
    ///
    /// # Errors
    ///
    /// With [`TooManyImages`] if more images are provided than the [`Form`]
    /// accepts.
    fn fill(
        self,
        form: &mut Form,
        catalog: &listing::Catalog,
    ) -> Result<(), TooManyImages> {
        let Self {
            area_id,
            actual_area,
            balcony_area,
            rooms,
            property_type_id,
            sub_type_id,
            land_type_id,
            project_id,
            building_number,
            unit_number,
            floor,
            developer,
            asking_price,
            leasehold,
            description,
            contact_person,
            contact_phone,
            contact_email,
            images,
        } = self;

        catalog.select_area(form, area_id.into());
        if let Some(id) = property_type_id {
            catalog.select_property_type(form, id);
        }
        if let Some(id) = sub_type_id {
            catalog.select_property_sub_type(form, id);
        }
        if let Some(id) = land_type_id {
            catalog.select_land_type(form, id);
        }
        if let Some(id) = project_id {
            catalog.select_project(form, id.into());
        }

        form.actual_area = actual_area;
        form.balcony_area = balcony_area;
        form.rooms = rooms.into();
        form.building_number = building_number;
        form.unit_number = unit_number;
        form.floor = floor;
        form.developer_name = developer;
        form.asking_price = asking_price.map(Money::aed);
        form.is_free_hold = !leasehold;
        form.is_lease_hold = leasehold;
        form.description = description;
        form.contact = listing::Contact {
            person: contact_person,
            phone: contact_phone,
            email: contact_email,
        };

        form.images.add(images)
    }
}

/// Parses an [`Image`] out of its `NAME:SIZE:MIME` representation.
fn parse_image(s: &str) -> Result<Image, String> {
    let mut parts = s.rsplitn(3, ':');
    let (Some(mime), Some(size), Some(name)) =
        (parts.next(), parts.next(), parts.next())
    else {
        return Err(format!("expected `NAME:SIZE:MIME`, got `{s}`"));
    };
    if name.is_empty() || mime.is_empty() {
        return Err(format!("image name and MIME type must be set: `{s}`"));
    }
    let size = size
        .parse()
        .map_err(|e| format!("invalid image size `{size}`: {e}"))?;

    Ok(Image {
        name: name.to_owned(),
        size,
        mime: mime.to_owned(),
    })
}

/// Shows the listing submission page.
///
/// # Errors
///
/// - If the listing options cannot be loaded or are empty.
/// - If too many images are attached.
/// - If the listing is not filled enough to be submitted.
pub async fn show(service: &Service, args: Args) -> Result<String, Error> {
    let (mut form, catalog) = service
        .execute(query::listing::Draft)
        .await
        .map_err(|e| e.as_error())?
        .ok_or_else(no_catalog)?;

    args.fill(&mut form, &catalog)
        .map_err(|e| e.as_error())?;
    let submitted = service
        .execute(SubmitListing::from(form))
        .await
        .map_err(|e| e.as_error())?;

    Ok(View(&submitted).to_string())
}

/// Creates an [`Error`] of the [`listing::Catalog`] missing mandatory options.
fn no_catalog() -> Error {
    define_error! {
        enum Error {
            #[code = "NO_CATALOG"]
            #[exit = 3]
            #[message = "Listing options are not available"]
            NoCatalog,
        }
    }

    Error::NoCatalog.into()
}

impl AsError for TooManyImages {
    fn try_as_error(&self) -> Option<Error> {
        Some(Error::new(
            "TOO_MANY_IMAGES",
            2,
            format!("At most {} photos may be attached", self.max),
        ))
    }
}

impl AsError for submit_listing::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        define_error! {
            enum Error {
                #[code = "MISSING_AREA"]
                #[exit = 2]
                #[message = "Actual area of the property must be specified"]
                MissingArea,

                #[code = "NO_IMAGES"]
                #[exit = 2]
                #[message = "At least one photo must be attached"]
                NoImages,
            }
        }

        match self {
            Self::Invalid(listing::ValidationError::MissingArea) => {
                Some(Error::MissingArea.into())
            }
            Self::Invalid(listing::ValidationError::NoImages) => {
                Some(Error::NoImages.into())
            }
        }
    }
}

/// Text rendering of a submitted listing [`Form`].
struct View<'f>(&'f Form);

impl fmt::Display for View<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let form = self.0;

        writeln!(f, "Listing submitted ({})", form.status)?;
        writeln!(f, "  Area:          {}", form.area.name)?;
        writeln!(
            f,
            "  Property type: {} ({})",
            form.property_type.name, form.property_sub_type.name,
        )?;
        writeln!(f, "  Land type:     {}", form.land_type.name)?;
        writeln!(
            f,
            "  Project:       {}",
            or_absent(form.project.as_ref().map(|p| &p.name)),
        )?;
        writeln!(f, "  Actual area:   {}", or_absent(form.actual_area))?;
        writeln!(f, "  Bedrooms:      {}", form.rooms)?;
        writeln!(
            f,
            "  Ownership:     {}",
            if form.is_lease_hold { "Leasehold" } else { "Freehold" },
        )?;
        writeln!(
            f,
            "  Asking price:  {}",
            or_absent(form.asking_price.as_ref()),
        )?;
        write!(
            f,
            "  Photos:        {}",
            form.images.as_slice().iter().map(|i| &i.name).join(", "),
        )
    }
}
