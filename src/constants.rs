// Constants module for shared string constants

/// Version reported by `getPluginVersion`, embedded at build time.
pub const PLUGIN_VERSION: &str = env!("CARGO_PKG_VERSION");

/// User-Agent string for all HTTP requests
pub const USER_AGENT: &str = concat!("native-market/", env!("CARGO_PKG_VERSION"));

pub const LOOKUP_ENDPOINT: &str = "https://itunes.apple.com/lookup";

pub const PLATFORM_ENV: &str = "MARKET_PLATFORM";
pub const LOOKUP_URL_ENV: &str = "MARKET_LOOKUP_URL";
pub const LOG_ENV: &str = "MARKET_LOG";

/// Pending launches the UI context will queue before callers wait on send.
pub const UI_QUEUE_DEPTH: usize = 16;
