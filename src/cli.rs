// CLI module for handling command-line interface

use clap::{Parser, Subcommand};
use native_market::Platform;

#[derive(Parser)]
#[command(name = "market")]
#[command(about = "Open app store pages in the native store app")]
pub struct Cli {
    /// Store to target: ios or android (defaults to MARKET_PLATFORM, then the build platform)
    #[arg(long, global = true)]
    pub platform: Option<Platform>,

    /// Print the URL that would be opened instead of launching it
    #[arg(long, global = true)]
    pub dry_run: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open an app's store listing
    Listing {
        app_id: String,
        /// Storefront country code (iOS only), e.g. IT
        #[arg(long)]
        country: Option<String>,
    },
    /// Open a developer's page (Android only)
    DevPage { dev_id: String },
    /// Open a collection or top chart (Android only)
    Collection { name: String },
    /// Open an Editor's Choice page (Android only)
    EditorChoice { editor_choice: String },
    /// Search the store (Android only)
    Search {
        #[arg(required = true, num_args = 1..)]
        terms: Vec<String>,
    },
    /// Print the plugin version
    Version {
        #[arg(long)]
        json: bool,
    },
}
