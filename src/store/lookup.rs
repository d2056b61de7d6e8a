// App Store lookup: query construction and response decoding

use crate::error::{MarketError, Result};
use reqwest::Url;
use serde::Deserialize;

/// Input of a store-listing lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupQuery {
    pub application_id: String,
    /// Empty when the caller did not ask for a specific storefront.
    pub country_code: String,
}

impl LookupQuery {
    /// Rejects an absent or empty application id before anything touches the network.
    pub fn new(application_id: Option<&str>, country_code: Option<&str>) -> Result<Self> {
        let application_id = application_id
            .filter(|id| !id.is_empty())
            .ok_or(MarketError::MissingParameter("appId"))?;

        Ok(Self {
            application_id: application_id.to_string(),
            country_code: country_code.unwrap_or_default().to_string(),
        })
    }

    /// `<endpoint>?bundleId=<appId>&country=<country>`, both values percent-encoded.
    pub fn url(&self, endpoint: &str) -> Result<Url> {
        let url = format!(
            "{}?bundleId={}&country={}",
            endpoint,
            urlencoding::encode(&self.application_id),
            urlencoding::encode(&self.country_code)
        );
        Url::parse(&url).map_err(|e| MarketError::InvalidRequest(format!("{}: {}", url, e)))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LookupResponse {
    #[serde(rename = "resultCount")]
    pub result_count: u64,
    #[serde(rename = "results")]
    pub matches: Vec<MatchedApp>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct MatchedApp {
    #[serde(rename = "trackId")]
    pub store_identifier: u64,
}

impl LookupResponse {
    pub fn from_json(payload: &str) -> Result<Self> {
        Ok(serde_json::from_str(payload)?)
    }

    /// The first match is the listing; the rest are ignored.
    pub fn first_match(&self, query: &LookupQuery) -> Result<MatchedApp> {
        self.matches
            .first()
            .copied()
            .ok_or_else(|| MarketError::NotFound(query.application_id.clone()))
    }
}
