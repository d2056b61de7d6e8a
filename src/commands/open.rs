// Open command for launching a store page

use crate::ui;
use async_trait::async_trait;
use log::debug;
use native_market::{
    CollectionOptions, Config, DevPageOptions, EditorChoiceOptions, NativeMarket, SearchOptions,
    StoreListingOptions, SystemOpener, UrlOpener,
};
use reqwest::Url;
use std::sync::{Arc, Mutex};

/// Store page requested on the command line.
pub enum Page {
    Listing {
        app_id: String,
        country: Option<String>,
    },
    DevPage(String),
    Collection(String),
    EditorChoice(String),
    Search(String),
}

impl Page {
    fn describe(&self) -> String {
        match self {
            Page::Listing { app_id, .. } => format!("store listing for {}", app_id),
            Page::DevPage(dev_id) => format!("developer page {}", dev_id),
            Page::Collection(name) => format!("collection {}", name),
            Page::EditorChoice(id) => format!("Editor's Choice page {}", id),
            Page::Search(terms) => format!("search for '{}'", terms),
        }
    }
}

/// Collects URLs instead of launching them (for --dry-run).
#[derive(Default)]
struct DryRunOpener {
    urls: Mutex<Vec<String>>,
}

#[async_trait]
impl UrlOpener for DryRunOpener {
    async fn open(&self, url: &Url) -> native_market::Result<()> {
        if let Ok(mut urls) = self.urls.lock() {
            urls.push(url.to_string());
        }
        Ok(())
    }
}

pub async fn open(config: &Config, page: Page, dry_run: bool) -> anyhow::Result<()> {
    let dry_run_opener = Arc::new(DryRunOpener::default());
    let opener: Arc<dyn UrlOpener> = if dry_run {
        dry_run_opener.clone()
    } else {
        Arc::new(SystemOpener)
    };

    let market = NativeMarket::new(config, opener)?;
    debug!("Targeting {}", market.platform());

    let description = page.describe();
    let pb = ui::spinner(&format!("Opening {}...", description));

    let result = match page {
        Page::Listing { app_id, country } => {
            market
                .open_store_listing(StoreListingOptions {
                    app_id: Some(app_id),
                    country,
                })
                .await
        }
        Page::DevPage(dev_id) => {
            market
                .open_dev_page(DevPageOptions {
                    dev_id: Some(dev_id),
                })
                .await
        }
        Page::Collection(name) => {
            market
                .open_collection(CollectionOptions { name: Some(name) })
                .await
        }
        Page::EditorChoice(editor_choice) => {
            market
                .open_editor_choice_page(EditorChoiceOptions {
                    editor_choice: Some(editor_choice),
                })
                .await
        }
        Page::Search(terms) => market.search(SearchOptions { terms: Some(terms) }).await,
    };

    if let Err(e) = result {
        ui::clear_bar(&pb);
        return Err(e.into());
    }

    if dry_run {
        ui::clear_bar(&pb);
        let urls = dry_run_opener
            .urls
            .lock()
            .map(|urls| urls.clone())
            .unwrap_or_default();
        for url in urls {
            ui::status("[DRY RUN]", &format!("Would open {}", url));
        }
    } else {
        ui::finish_spinner_success(&pb, &format!("Opened {}", description));
    }

    Ok(())
}
