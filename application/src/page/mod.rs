//! Pages of the application, each rendered as plain text.

pub mod chats;
pub mod facets;
pub mod listing;
pub mod notifications;
pub mod units;

use std::fmt;

use crate::{args::Page, Error, Service};

/// Shows the provided [`Page`], returning its rendered text.
///
/// # Errors
///
/// If the [`Page`] cannot be shown.
pub async fn show(service: &Service, page: Page) -> Result<String, Error> {
    match page {
        Page::Units(args) => units::show(service, args).await,
        Page::Facets => facets::show(service).await,
        Page::Chats(args) => chats::show(service, args).await,
        Page::Notifications(args) => notifications::show(service, args).await,
        Page::Listing(args) => listing::show(service, args).await,
    }
}

/// Placeholder rendered instead of an absent value.
const ABSENT: &str = "—";

/// Renders the provided optional value, or [`ABSENT`] if there is none.
fn or_absent<T: fmt::Display>(value: Option<T>) -> String {
    value.map_or_else(|| ABSENT.to_owned(), |v| v.to_string())
}

#[cfg(test)]
mod spec {
    use std::time::Duration;

    use service::infra::{database::mock, Mock};

    use super::or_absent;
    use crate::Service;

    /// Creates a new [`Service`] serving mock data without any latency.
    pub(crate) fn service() -> Service {
        Service::new(
            service::Config::default(),
            Mock::new(mock::Config {
                latency: Duration::ZERO,
                ..mock::Config::default()
            }),
        )
    }

    #[test]
    fn renders_absent_values() {
        assert_eq!(or_absent(Some(3)), "3");
        assert_eq!(or_absent(None::<u8>), "—");
    }
}
