// Launcher module: handing URLs to the operating system

pub mod ui_context;

pub use ui_context::UiContext;

use crate::error::{MarketError, Result};
use async_trait::async_trait;
use log::debug;
use reqwest::Url;
use std::io::ErrorKind;
use tokio::process::Command;

/// Something that can ask the OS to open a URL.
///
/// Implementations report a URL nobody can handle as
/// `MarketError::NotOpenable` so the caller can fall back to the web page.
#[async_trait]
pub trait UrlOpener: Send + Sync {
    async fn open(&self, url: &Url) -> Result<()>;
}

/// Opens URLs through the host's URL handler (`am start`, `open`,
/// `xdg-open` or `start`, depending on the target).
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemOpener;

impl SystemOpener {
    fn command(url: &str) -> Command {
        if cfg!(target_os = "android") {
            let mut command = Command::new("am");
            command.args(["start", "-a", "android.intent.action.VIEW", "-d", url]);
            command
        } else if cfg!(any(target_os = "macos", target_os = "ios")) {
            let mut command = Command::new("open");
            command.arg(url);
            command
        } else if cfg!(target_os = "windows") {
            let mut command = Command::new("cmd");
            command.args(["/C", "start", "", url]);
            command
        } else {
            let mut command = Command::new("xdg-open");
            command.arg(url);
            command
        }
    }
}

#[async_trait]
impl UrlOpener for SystemOpener {
    async fn open(&self, url: &Url) -> Result<()> {
        let mut command = Self::command(url.as_str());
        debug!("Launching {:?}", command.as_std());

        let output = command.output().await.map_err(|e| match e.kind() {
            // No URL handler installed at all
            ErrorKind::NotFound => MarketError::NotOpenable(url.to_string()),
            _ => MarketError::Launch {
                url: url.to_string(),
                reason: e.to_string(),
            },
        })?;

        if !output.status.success() {
            debug!(
                "URL handler exited with {}: {}",
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            );
            return Err(MarketError::NotOpenable(url.to_string()));
        }

        Ok(())
    }
}
