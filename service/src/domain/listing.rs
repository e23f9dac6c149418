//! Listing submission definitions.

use common::{define_kind, Money, SquareMeters};
use derive_more::{Display, Error};

use crate::domain::unit;

/// Form of a new listing submitted by a property owner.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Form {
    /// Selected [`PropertyTypeOption`].
    pub property_type: PropertyTypeOption,

    /// Selected [`PropertySubTypeOption`].
    pub property_sub_type: PropertySubTypeOption,

    /// Selected [`AreaOption`].
    pub area: AreaOption,

    /// Land number in the land registry, if known.
    pub land_number: Option<String>,

    /// Land sub-number in the land registry, if known.
    pub land_sub_number: Option<u32>,

    /// Number of the building, if known.
    pub building_number: Option<unit::BuildingNumber>,

    /// Number of the unit inside its building, if known.
    pub unit_number: Option<unit::UnitNumber>,

    /// Actual area of the unit.
    ///
    /// Must be positive for the [`Form`] to be submitted.
    pub actual_area: Option<SquareMeters>,

    /// Balcony area of the unit, if any.
    pub balcony_area: Option<SquareMeters>,

    /// Number of rooms in the unit.
    pub rooms: unit::Rooms,

    /// Floor of the unit, if known.
    pub floor: Option<unit::Floor>,

    /// Selected [`ProjectOption`], if any.
    pub project: Option<ProjectOption>,

    /// Indicator whether the unit is owned as freehold.
    pub is_free_hold: bool,

    /// Indicator whether the unit is owned as leasehold.
    pub is_lease_hold: bool,

    /// Indicator whether the unit is registered in the land registry.
    pub is_registered: bool,

    /// Selected [`LandTypeOption`].
    pub land_type: LandTypeOption,

    /// Name of the developer, if known.
    pub developer_name: Option<unit::DeveloperName>,

    /// [`Contact`] details of the owner.
    pub contact: Contact,

    /// Free-form description of the listing.
    pub description: String,

    /// Asking price, if disclosed.
    pub asking_price: Option<Money>,

    /// Price per square meter, if disclosed.
    pub price_per_sqm: Option<Money>,

    /// Parking allocation, if any.
    pub parking: Option<Parking>,

    /// Attached [`Images`].
    pub images: Images,

    /// [`Status`] of the listing.
    pub status: Status,
}

impl Form {
    /// Creates a new draft [`Form`] with the provided catalogue selections
    /// and everything else left empty.
    #[must_use]
    pub fn draft(
        property_type: PropertyTypeOption,
        property_sub_type: PropertySubTypeOption,
        area: AreaOption,
        land_type: LandTypeOption,
        max_images: usize,
    ) -> Self {
        Self {
            property_type,
            property_sub_type,
            area,
            land_number: None,
            land_sub_number: None,
            building_number: None,
            unit_number: None,
            actual_area: None,
            balcony_area: None,
            rooms: unit::Rooms::from(0),
            floor: None,
            project: None,
            is_free_hold: true,
            is_lease_hold: false,
            is_registered: true,
            land_type,
            developer_name: None,
            contact: Contact::default(),
            description: String::new(),
            asking_price: None,
            price_per_sqm: None,
            parking: None,
            images: Images::with_max(max_images),
            status: Status::Draft,
        }
    }

    /// Checks whether this [`Form`] may be submitted.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::MissingArea`] if the actual area is absent or
    ///   zero;
    /// - [`ValidationError::NoImages`] if no image is attached.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.actual_area.is_some_and(|a| !a.value().is_zero()) {
            return Err(ValidationError::MissingArea);
        }
        if self.images.is_empty() {
            return Err(ValidationError::NoImages);
        }
        Ok(())
    }
}

/// Error of [`Form::validate()`].
#[derive(Clone, Copy, Debug, Display, Eq, Error, PartialEq)]
pub enum ValidationError {
    /// Actual area of the unit is not specified.
    #[display("actual area of the property must be specified")]
    MissingArea,

    /// No image is attached.
    #[display("at least one photo must be attached")]
    NoImages,
}

/// Contact details of a property owner.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Contact {
    /// Name of the contact person, if provided.
    pub person: Option<String>,

    /// Phone number, if provided.
    pub phone: Option<String>,

    /// Email, if provided.
    pub email: Option<String>,
}

/// Parking allocated to a unit.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Parking {
    /// ID of the allocation type in the land registry.
    pub allocation_type_id: u32,

    /// Name of the allocation type.
    pub allocation_type: String,

    /// Number of the parking lot, if any.
    pub number: Option<String>,
}

/// Metadata of an image attached to a [`Form`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Image {
    /// File name of this [`Image`].
    pub name: String,

    /// Size of this [`Image`] in bytes.
    pub size: u64,

    /// MIME type of this [`Image`].
    pub mime: String,
}

/// Bounded list of [`Image`]s.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Images {
    /// Attached [`Image`]s.
    items: Vec<Image>,

    /// Maximum number of [`Image`]s allowed.
    max: usize,
}

impl Images {
    /// Default maximum number of [`Image`]s attached to a [`Form`].
    pub const DEFAULT_MAX: usize = 3;

    /// Creates new empty [`Images`] allowing at most `max` of them.
    #[must_use]
    pub fn with_max(max: usize) -> Self {
        Self {
            items: Vec::new(),
            max,
        }
    }

    /// Attaches all the provided [`Image`]s.
    ///
    /// # Errors
    ///
    /// With [`TooManyImages`] if the total number of [`Image`]s would exceed
    /// the maximum. Nothing is attached in such case.
    pub fn add(
        &mut self,
        images: impl IntoIterator<Item = Image>,
    ) -> Result<(), TooManyImages> {
        let images = images.into_iter().collect::<Vec<_>>();
        if self.items.len() + images.len() > self.max {
            return Err(TooManyImages { max: self.max });
        }
        self.items.extend(images);
        Ok(())
    }

    /// Removes the [`Image`] at the provided `index`, if any.
    pub fn remove(&mut self, index: usize) -> Option<Image> {
        (index < self.items.len()).then(|| self.items.remove(index))
    }

    /// Returns the attached [`Image`]s.
    #[must_use]
    pub fn as_slice(&self) -> &[Image] {
        &self.items
    }

    /// Returns the number of attached [`Image`]s.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Indicates whether no [`Image`] is attached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the maximum number of [`Image`]s allowed.
    #[must_use]
    pub fn max(&self) -> usize {
        self.max
    }
}

impl Default for Images {
    fn default() -> Self {
        Self::with_max(Self::DEFAULT_MAX)
    }
}

/// Error of attaching too many [`Images`].
#[derive(Clone, Copy, Debug, Display, Eq, Error, PartialEq)]
#[display("at most {max} photos may be attached")]
pub struct TooManyImages {
    /// Maximum number of [`Image`]s allowed.
    pub max: usize,
}

define_kind! {
    #[doc = "Status of a listing."]
    enum Status {
        #[doc = "Not submitted yet."]
        Draft = 1,

        #[doc = "Published."]
        Active = 2,

        #[doc = "Submitted and awaiting moderation."]
        Pending = 3,

        #[doc = "Rejected by moderation."]
        Rejected = 4,
    }
}

/// Area selectable in a [`Form`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AreaOption {
    /// ID of the area.
    pub id: unit::AreaId,

    /// Name of the area.
    pub name: unit::AreaName,
}

/// Property type selectable in a [`Form`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PropertyTypeOption {
    /// ID of the property type.
    pub id: u32,

    /// Name of the property type.
    pub name: unit::PropertyType,
}

/// Property sub-type selectable in a [`Form`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PropertySubTypeOption {
    /// ID of the property sub-type.
    pub id: u32,

    /// Name of the property sub-type.
    pub name: String,
}

/// Land type selectable in a [`Form`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LandTypeOption {
    /// ID of the land type.
    pub id: u32,

    /// Name of the land type.
    pub name: String,
}

/// Project selectable in a [`Form`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProjectOption {
    /// ID of the project.
    pub id: unit::ProjectId,

    /// Name of the project.
    pub name: unit::ProjectName,

    /// ID of the master project, if any.
    pub master_project_id: Option<u32>,

    /// Name of the master project, if any.
    pub master_project: Option<unit::ProjectName>,
}

/// Catalogues of options selectable in a [`Form`].
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Catalog {
    /// Selectable [`AreaOption`]s.
    pub areas: Vec<AreaOption>,

    /// Selectable [`PropertyTypeOption`]s.
    pub property_types: Vec<PropertyTypeOption>,

    /// Selectable [`PropertySubTypeOption`]s.
    pub property_sub_types: Vec<PropertySubTypeOption>,

    /// Selectable [`LandTypeOption`]s.
    pub land_types: Vec<LandTypeOption>,

    /// Selectable [`ProjectOption`]s.
    pub projects: Vec<ProjectOption>,
}

impl Catalog {
    /// Selects the [`AreaOption`] with the provided `id` in the `form`.
    ///
    /// Unknown `id`s are ignored, leaving the `form` untouched.
    pub fn select_area(&self, form: &mut Form, id: unit::AreaId) {
        if let Some(area) = self.areas.iter().find(|a| a.id == id) {
            form.area = area.clone();
        }
    }

    /// Selects the [`PropertyTypeOption`] with the provided `id` in the
    /// `form`.
    ///
    /// Unknown `id`s are ignored, leaving the `form` untouched.
    pub fn select_property_type(&self, form: &mut Form, id: u32) {
        if let Some(ty) = self.property_types.iter().find(|t| t.id == id) {
            form.property_type = ty.clone();
        }
    }

    /// Selects the [`PropertySubTypeOption`] with the provided `id` in the
    /// `form`.
    ///
    /// Unknown `id`s are ignored, leaving the `form` untouched.
    pub fn select_property_sub_type(&self, form: &mut Form, id: u32) {
        if let Some(ty) = self.property_sub_types.iter().find(|t| t.id == id) {
            form.property_sub_type = ty.clone();
        }
    }

    /// Selects the [`LandTypeOption`] with the provided `id` in the `form`.
    ///
    /// Unknown `id`s are ignored, leaving the `form` untouched.
    pub fn select_land_type(&self, form: &mut Form, id: u32) {
        if let Some(ty) = self.land_types.iter().find(|t| t.id == id) {
            form.land_type = ty.clone();
        }
    }

    /// Selects the [`ProjectOption`] with the provided `id` in the `form`,
    /// along with its master project.
    ///
    /// Unknown `id`s are ignored, leaving the `form` untouched.
    pub fn select_project(&self, form: &mut Form, id: unit::ProjectId) {
        if let Some(project) = self.projects.iter().find(|p| p.id == id) {
            form.project = Some(project.clone());
        }
    }

    /// Creates a new draft [`Form`] preselecting the first option of every
    /// mandatory catalogue.
    ///
    /// [`None`] is returned if any of the mandatory catalogues is empty.
    #[must_use]
    pub fn draft(&self, max_images: usize) -> Option<Form> {
        Some(Form::draft(
            self.property_types.first()?.clone(),
            self.property_sub_types.first()?.clone(),
            self.areas.first()?.clone(),
            self.land_types.first()?.clone(),
            max_images,
        ))
    }
}
