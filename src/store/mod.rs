// Store module: turns caller input into a launchable store URL

pub mod links;
pub mod lookup;

pub use links::StoreLaunchRequest;
pub use lookup::{LookupQuery, LookupResponse, MatchedApp};

use crate::config::Config;
use crate::error::Result;
use crate::http;
use crate::platform::Platform;
use log::{debug, info};

/// Resolves an application id to the store URL for the configured platform.
///
/// On iOS this costs one request to the lookup endpoint to learn the numeric
/// track id; on Android the application id is already the store handle.
#[derive(Debug, Clone)]
pub struct StoreLinkResolver {
    platform: Platform,
    lookup_endpoint: String,
}

impl StoreLinkResolver {
    pub fn new(config: &Config) -> Self {
        Self {
            platform: config.platform,
            lookup_endpoint: config.lookup_endpoint.clone(),
        }
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    pub async fn resolve(&self, query: &LookupQuery) -> Result<StoreLaunchRequest> {
        match self.platform {
            Platform::Android => links::play_listing(&query.application_id),
            Platform::Ios => {
                let app = self.lookup(query).await?;
                links::app_store_listing(app.store_identifier)
            }
        }
    }

    /// Single lookup request, no retries. The first match wins.
    pub async fn lookup(&self, query: &LookupQuery) -> Result<MatchedApp> {
        let url = query.url(&self.lookup_endpoint)?;
        let response: LookupResponse = http::fetch_json(&url).await?;
        debug!(
            "Lookup for '{}' returned {} result(s)",
            query.application_id, response.result_count
        );

        let app = response.first_match(query)?;
        info!(
            "Resolved '{}' to App Store id {}",
            query.application_id, app.store_identifier
        );
        Ok(app)
    }
}
