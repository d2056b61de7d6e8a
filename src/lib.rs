//! Open app store listings, developer pages, collections, Editor's Choice
//! pages and searches in the native store app.
//!
//! On iOS a listing is resolved through the iTunes lookup endpoint to its
//! numeric App Store id; on Android the application id is used directly.
//! Every launch is issued from a single UI context and falls back to the
//! web store when no store app can handle the native URL.

pub mod config;
pub mod constants;
pub mod error;
pub mod http;
pub mod launcher;
pub mod market;
pub mod platform;
pub mod store;

pub use config::Config;
pub use error::{MarketError, Result};
pub use launcher::{SystemOpener, UiContext, UrlOpener};
pub use market::{
    CollectionOptions, DevPageOptions, EditorChoiceOptions, NativeMarket, PluginVersion,
    SearchOptions, StoreListingOptions, plugin_version,
};
pub use platform::{Operation, Platform};
pub use store::{LookupQuery, LookupResponse, MatchedApp, StoreLaunchRequest, StoreLinkResolver};
