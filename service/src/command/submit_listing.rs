//! [`Command`] for submitting a new listing.

use derive_more::{Display, Error, From};
use itertools::Itertools as _;
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::listing::{self, Form, Status},
    Service,
};

use super::Command;

/// [`Command`] for submitting a new listing.
#[derive(Clone, Debug, From)]
pub struct SubmitListing {
    /// Filled listing [`Form`].
    pub form: Form,
}

impl<Db> Command<SubmitListing> for Service<Db> {
    type Ok = Form;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        SubmitListing { mut form }: SubmitListing,
    ) -> Result<Self::Ok, Self::Err> {
        form.validate()
            .map_err(ExecutionError::from)
            .map_err(tracerr::wrap!())?;

        form.status = Status::Pending;

        log::info!(
            area = %form.area.name,
            property_type = %form.property_type.name,
            actual_area = ?form.actual_area.map(|a| a.to_string()),
            rooms = %form.rooms,
            asking_price = ?form.asking_price.map(|p| p.to_string()),
            images = %form
                .images
                .as_slice()
                .iter()
                .map(|i| format!("{} ({} bytes, {})", i.name, i.size, i.mime))
                .join(", "),
            "listing submitted",
        );

        Ok(form)
    }
}

/// Error of [`SubmitListing`] [`Command`] execution.
#[derive(Clone, Copy, Debug, Display, Error, From)]
pub enum ExecutionError {
    /// Listing [`Form`] is not filled enough.
    #[display("listing is invalid: {_0}")]
    Invalid(listing::ValidationError),
}

#[cfg(test)]
mod spec {
    use std::time::Duration;

    use common::SquareMeters;

    use crate::{
        domain::listing::{Image, Status, ValidationError},
        infra::{
            database::mock::{self, fixtures},
            Mock,
        },
        Command as _, Config, Service,
    };

    use super::{ExecutionError, SubmitListing};

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
    async fn rejects_missing_area_first() {
        let form = fixtures::catalog().draft(3).unwrap();

        let err = service()
            .execute(SubmitListing { form })
            .await
            .unwrap_err();

        assert!(matches!(
            err.as_ref(),
            ExecutionError::Invalid(ValidationError::MissingArea),
        ));
    }

    #[tokio::test]
    async fn rejects_no_images() {
        let mut form = fixtures::catalog().draft(3).unwrap();
        form.actual_area = SquareMeters::new(118);

        let err = service()
            .execute(SubmitListing { form })
            .await
            .unwrap_err();

        assert!(matches!(
            err.as_ref(),
            ExecutionError::Invalid(ValidationError::NoImages),
        ));
    }

    #[tokio::test]
    async fn submits_as_pending() {
        let mut form = fixtures::catalog().draft(3).unwrap();
        form.actual_area = SquareMeters::new(118);
        form.images
            .add([Image {
                name: "living-room.jpg".into(),
                size: 204_800,
                mime: "image/jpeg".into(),
            }])
            .unwrap();

        let submitted = service()
            .execute(SubmitListing { form: form.clone() })
            .await
            .unwrap();

        assert_eq!(submitted.status, Status::Pending);
        assert_eq!(submitted.images, form.images);
        assert_eq!(submitted.area, form.area);
    }
}
