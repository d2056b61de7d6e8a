// Launch URL templates for each store page

use crate::error::{MarketError, Result};
use reqwest::Url;

const APP_STORE_NATIVE: &str = "itms-apps://itunes.apple.com/app/id";
const APP_STORE_WEB: &str = "https://apps.apple.com/app/id";

const PLAY_NATIVE: &str = "market://";
const PLAY_WEB: &str = "https://play.google.com/store/";

/// A URL to hand to the OS, plus the web page to try when no store app
/// can handle it.
///
/// Caller values are embedded as given; `Url::parse` only escapes what is
/// not legal in a URL (a space becomes `%20`, `+` and `&` stay).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreLaunchRequest {
    pub target_url: Url,
    pub fallback_url: Url,
}

impl StoreLaunchRequest {
    fn new(target: String, fallback: String) -> Result<Self> {
        Ok(Self {
            target_url: parse(&target)?,
            fallback_url: parse(&fallback)?,
        })
    }
}

fn parse(url: &str) -> Result<Url> {
    Url::parse(url).map_err(|e| MarketError::InvalidRequest(format!("{}: {}", url, e)))
}

/// Play Store page under both the `market://` scheme and the web store.
fn play(path: &str) -> Result<StoreLaunchRequest> {
    StoreLaunchRequest::new(
        format!("{}{}", PLAY_NATIVE, path),
        format!("{}{}", PLAY_WEB, path),
    )
}

/// App Store listing for a looked-up track id.
pub fn app_store_listing(store_identifier: u64) -> Result<StoreLaunchRequest> {
    StoreLaunchRequest::new(
        format!("{}{}", APP_STORE_NATIVE, store_identifier),
        format!("{}{}", APP_STORE_WEB, store_identifier),
    )
}

pub fn play_listing(app_id: &str) -> Result<StoreLaunchRequest> {
    let path = format!("details?id={}", app_id);
    StoreLaunchRequest::new(
        format!("{}{}", PLAY_NATIVE, path),
        format!("{}apps/{}", PLAY_WEB, path),
    )
}

pub fn play_dev_page(dev_id: &str) -> Result<StoreLaunchRequest> {
    play(&format!("apps/dev?id={}", dev_id))
}

pub fn play_collection(name: &str) -> Result<StoreLaunchRequest> {
    play(&format!("apps/collection/{}", name))
}

pub fn play_editor_choice(editor_choice: &str) -> Result<StoreLaunchRequest> {
    play(&format!("apps/topic?id={}", editor_choice))
}

pub fn play_search(terms: &str) -> Result<StoreLaunchRequest> {
    play(&format!("search?q={}", terms))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fallback(request: &StoreLaunchRequest) -> &str {
        request.fallback_url.as_str()
    }

    #[test]
    fn test_app_store_listing_embeds_track_id() {
        let request = app_store_listing(42).unwrap();
        assert_eq!(
            request.target_url.as_str(),
            "itms-apps://itunes.apple.com/app/id42"
        );
        assert!(request.target_url.as_str().contains("id42"));
        assert_eq!(fallback(&request), "https://apps.apple.com/app/id42");
    }

    #[test]
    fn test_play_listing() {
        let request = play_listing("com.example.app").unwrap();
        assert_eq!(
            request.target_url.as_str(),
            "market://details?id=com.example.app"
        );
        assert_eq!(
            fallback(&request),
            "https://play.google.com/store/apps/details?id=com.example.app"
        );
    }

    #[test]
    fn test_play_dev_page() {
        let request = play_dev_page("Google+LLC").unwrap();
        assert_eq!(request.target_url.as_str(), "market://apps/dev?id=Google+LLC");
        assert_eq!(
            fallback(&request),
            "https://play.google.com/store/apps/dev?id=Google+LLC"
        );
    }

    #[test]
    fn test_play_collection() {
        let request = play_collection("featured").unwrap();
        assert_eq!(
            fallback(&request),
            "https://play.google.com/store/apps/collection/featured"
        );
    }

    #[test]
    fn test_play_editor_choice() {
        let request = play_editor_choice("editorial_fitness_apps_us").unwrap();
        assert_eq!(
            request.target_url.as_str(),
            "market://apps/topic?id=editorial_fitness_apps_us"
        );
    }

    #[test]
    fn test_play_search_encodes_terms() {
        let request = play_search("fitness apps").unwrap();
        assert_eq!(request.target_url.as_str(), "market://search?q=fitness%20apps");
        assert_eq!(
            fallback(&request),
            "https://play.google.com/store/search?q=fitness%20apps"
        );
    }

    #[test]
    fn test_caller_values_embedded_as_given() {
        let request = play_search("c++ & tools").unwrap();
        assert_eq!(
            request.target_url.as_str(),
            "market://search?q=c++%20&%20tools"
        );
        assert_eq!(
            fallback(&request),
            "https://play.google.com/store/search?q=c++%20&%20tools"
        );

        let request = play_editor_choice("editorial&games+apps").unwrap();
        assert_eq!(
            request.target_url.as_str(),
            "market://apps/topic?id=editorial&games+apps"
        );

        let request = play_listing("com.example+beta").unwrap();
        assert_eq!(
            request.target_url.as_str(),
            "market://details?id=com.example+beta"
        );
    }
}
