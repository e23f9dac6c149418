//! [`Args`] definitions.

use clap::{Parser, Subcommand};

use crate::page;

/// Browser of owner-listed real-estate units, buyer chats and notifications.
#[derive(Debug, Parser)]
#[command(name = "anti-stress", version, about, long_about = None)]
pub struct Args {
    /// Path to the configuration file.
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,

    /// [`Page`] to show.
    #[command(subcommand)]
    pub page: Page,
}

impl Args {
    /// Parses command line arguments.
    ///
    /// # Errors
    ///
    /// Errors if failed to parse command line arguments.
    pub fn parse() -> Result<Self, clap::Error> {
        <Self as Parser>::try_parse()
    }
}

/// Page of the application to show.
#[derive(Debug, Subcommand)]
pub enum Page {
    /// Lists units, optionally filtered, along with the selected one.
    Units(page::units::Args),

    /// Lists the options available for filtering units.
    Facets,

    /// Lists chats, optionally opening one and sending a message to it.
    Chats(page::chats::Args),

    /// Lists notifications, optionally filtered by kind.
    Notifications(page::notifications::Args),

    /// Submits a new listing.
    Listing(page::listing::Args),
}
