// Market module: the operations exposed to calling applications

use crate::config::Config;
use crate::constants::PLUGIN_VERSION;
use crate::error::{MarketError, Result};
use crate::launcher::{UiContext, UrlOpener};
use crate::platform::{Operation, Platform};
use crate::store::{LookupQuery, StoreLaunchRequest, StoreLinkResolver, links};
use log::info;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreListingOptions {
    pub app_id: Option<String>,
    /// Storefront country code (iOS only), e.g. `IT`.
    pub country: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DevPageOptions {
    pub dev_id: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionOptions {
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorChoiceOptions {
    pub editor_choice: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchOptions {
    pub terms: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PluginVersion {
    pub version: String,
}

/// Entry point for every store operation.
///
/// Each call is independent: it validates its options, builds the target
/// URL (looking it up first for iOS listings) and hands it to the UI
/// context. Nothing is cached between calls.
pub struct NativeMarket {
    resolver: StoreLinkResolver,
    ui: UiContext,
}

impl NativeMarket {
    pub fn new(config: &Config, opener: Arc<dyn UrlOpener>) -> Result<Self> {
        Ok(Self {
            resolver: StoreLinkResolver::new(config),
            ui: UiContext::spawn(opener)?,
        })
    }

    pub fn platform(&self) -> Platform {
        self.resolver.platform()
    }

    /// Launch the app's listing page in the App Store or Play Store.
    pub async fn open_store_listing(&self, options: StoreListingOptions) -> Result<()> {
        self.ensure_supported(Operation::StoreListing)?;
        let query = LookupQuery::new(options.app_id.as_deref(), options.country.as_deref())?;
        let request = self.resolver.resolve(&query).await?;
        self.launch(Operation::StoreListing, request).await
    }

    /// Deep-link to a developer's page. Android only.
    pub async fn open_dev_page(&self, options: DevPageOptions) -> Result<()> {
        self.open_page(
            Operation::DevPage,
            options.dev_id.as_deref(),
            "devId",
            links::play_dev_page,
        )
        .await
    }

    /// Open a collection or top chart, e.g. `featured`. Android only.
    pub async fn open_collection(&self, options: CollectionOptions) -> Result<()> {
        self.open_page(
            Operation::Collection,
            options.name.as_deref(),
            "name",
            links::play_collection,
        )
        .await
    }

    /// Open an Editor's Choice page. Android only.
    pub async fn open_editor_choice_page(&self, options: EditorChoiceOptions) -> Result<()> {
        self.open_page(
            Operation::EditorChoicePage,
            options.editor_choice.as_deref(),
            "editorChoice",
            links::play_editor_choice,
        )
        .await
    }

    /// Search the store. Android only.
    pub async fn search(&self, options: SearchOptions) -> Result<()> {
        self.open_page(
            Operation::Search,
            options.terms.as_deref(),
            "terms",
            links::play_search,
        )
        .await
    }

    pub fn get_plugin_version(&self) -> PluginVersion {
        plugin_version()
    }

    fn ensure_supported(&self, operation: Operation) -> Result<()> {
        let platform = self.platform();
        if platform.supports(operation) {
            Ok(())
        } else {
            Err(MarketError::Unsupported {
                operation,
                platform,
            })
        }
    }

    async fn open_page(
        &self,
        operation: Operation,
        value: Option<&str>,
        parameter: &'static str,
        template: fn(&str) -> Result<StoreLaunchRequest>,
    ) -> Result<()> {
        self.ensure_supported(operation)?;
        let value = required(value, parameter)?;
        let request = template(value)?;
        self.launch(operation, request).await
    }

    async fn launch(&self, operation: Operation, request: StoreLaunchRequest) -> Result<()> {
        info!("{}: opening {}", operation.name(), request.target_url);
        self.ui.open(request).await
    }
}

/// Version string embedded at build time.
pub fn plugin_version() -> PluginVersion {
    PluginVersion {
        version: PLUGIN_VERSION.to_string(),
    }
}

fn required<'a>(value: Option<&'a str>, parameter: &'static str) -> Result<&'a str> {
    value
        .filter(|v| !v.is_empty())
        .ok_or(MarketError::MissingParameter(parameter))
}
