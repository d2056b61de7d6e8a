// Shared HTTP client utilities

use crate::constants::USER_AGENT;
use crate::error::Result;
use log::debug;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;

lazy_static::lazy_static! {
    /// Shared HTTP client with proper User-Agent
    static ref CLIENT: Client = Client::builder()
        .user_agent(USER_AGENT)
        .build()
        .expect("Failed to create HTTP client");
}

/// Fetch JSON from a URL and deserialize it.
///
/// Transport failures and non-success statuses surface as
/// `MarketError::Network`; a body that does not match `T` surfaces as
/// `MarketError::Decode`.
pub async fn fetch_json<T: DeserializeOwned>(url: &Url) -> Result<T> {
    debug!("GET {}", url);
    let response = CLIENT.get(url.clone()).send().await?.error_for_status()?;

    // Decode ourselves so shape mismatches are told apart from transport errors
    let body = response.text().await?;
    Ok(serde_json::from_str(&body)?)
}
