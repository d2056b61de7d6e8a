// UI context: the single execution context OS launches are issued from

use crate::error::{MarketError, Result};
use crate::launcher::UrlOpener;
use crate::store::StoreLaunchRequest;
use log::{debug, error, warn};
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot};

const THREAD_NAME: &str = "market-ui";

struct LaunchJob {
    request: StoreLaunchRequest,
    reply: oneshot::Sender<Result<()>>,
}

/// Handle to the UI context.
///
/// Every launch is marshalled onto one dedicated thread, runs there to
/// completion, and its outcome is sent back to the awaiting caller. The
/// thread exits once the last handle is dropped.
#[derive(Clone)]
pub struct UiContext {
    jobs: mpsc::Sender<LaunchJob>,
}

impl UiContext {
    pub fn spawn(opener: Arc<dyn UrlOpener>) -> Result<Self> {
        let (jobs, mut queue) = mpsc::channel::<LaunchJob>(crate::constants::UI_QUEUE_DEPTH);

        std::thread::Builder::new()
            .name(THREAD_NAME.to_string())
            .spawn(move || {
                let runtime = match tokio::runtime::Builder::new_current_thread()
                    .enable_all()
                    .build()
                {
                    Ok(runtime) => runtime,
                    Err(e) => {
                        // Dropping the queue fails every pending caller with UiContextClosed
                        error!("Failed to start UI context runtime: {}", e);
                        return;
                    }
                };

                runtime.block_on(async move {
                    while let Some(job) = queue.recv().await {
                        let outcome = launch(opener.as_ref(), job.request).await;
                        if job.reply.send(outcome).is_err() {
                            debug!("Launch caller went away before the outcome was delivered");
                        }
                    }
                });
            })
            .map_err(MarketError::UiContextStart)?;

        Ok(Self { jobs })
    }

    /// Open `request` on the UI context and wait for the outcome.
    pub async fn open(&self, request: StoreLaunchRequest) -> Result<()> {
        let (reply, outcome) = oneshot::channel();
        self.jobs
            .send(LaunchJob { request, reply })
            .await
            .map_err(|_| MarketError::UiContextClosed)?;
        outcome.await.map_err(|_| MarketError::UiContextClosed)?
    }
}

/// Try the native URL, then the web fallback if no app handles it.
async fn launch(opener: &dyn UrlOpener, request: StoreLaunchRequest) -> Result<()> {
    match opener.open(&request.target_url).await {
        Err(MarketError::NotOpenable(url)) => {
            warn!(
                "No handler for {}, falling back to {}",
                url, request.fallback_url
            );
            opener.open(&request.fallback_url).await
        }
        outcome => outcome,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::links;
    use async_trait::async_trait;
    use reqwest::Url;
    use std::sync::Mutex;

    /// Records every URL it is asked to open and the thread it ran on.
    #[derive(Default)]
    struct RecordingOpener {
        opened: Mutex<Vec<(String, Option<String>)>>,
        unopenable: Vec<String>,
    }

    impl RecordingOpener {
        fn refusing(urls: &[&str]) -> Self {
            Self {
                opened: Mutex::new(Vec::new()),
                unopenable: urls.iter().map(|u| u.to_string()).collect(),
            }
        }

        fn urls(&self) -> Vec<String> {
            self.opened.lock().unwrap().iter().map(|(u, _)| u.clone()).collect()
        }
    }

    #[async_trait]
    impl UrlOpener for RecordingOpener {
        async fn open(&self, url: &Url) -> Result<()> {
            let thread = std::thread::current().name().map(String::from);
            self.opened.lock().unwrap().push((url.to_string(), thread));
            if self.unopenable.iter().any(|u| u == url.as_str()) {
                return Err(MarketError::NotOpenable(url.to_string()));
            }
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_launch_runs_on_ui_thread() {
        let opener = Arc::new(RecordingOpener::default());
        let ui = UiContext::spawn(opener.clone()).unwrap();

        ui.open(links::app_store_listing(42).unwrap()).await.unwrap();

        let opened = opener.opened.lock().unwrap().clone();
        assert_eq!(
            opened,
            vec![(
                "itms-apps://itunes.apple.com/app/id42".to_string(),
                Some(THREAD_NAME.to_string())
            )]
        );
    }

    #[tokio::test]
    async fn test_falls_back_to_web_url() {
        let opener = Arc::new(RecordingOpener::refusing(&["market://search?q=chess"]));
        let ui = UiContext::spawn(opener.clone()).unwrap();

        ui.open(links::play_search("chess").unwrap()).await.unwrap();

        assert_eq!(
            opener.urls(),
            vec![
                "market://search?q=chess".to_string(),
                "https://play.google.com/store/search?q=chess".to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn test_not_openable_when_fallback_also_fails() {
        let opener = Arc::new(RecordingOpener::refusing(&[
            "market://search?q=chess",
            "https://play.google.com/store/search?q=chess",
        ]));
        let ui = UiContext::spawn(opener.clone()).unwrap();

        let err = ui.open(links::play_search("chess").unwrap()).await.unwrap_err();
        assert!(matches!(err, MarketError::NotOpenable(_)));
        assert_eq!(opener.urls().len(), 2);
    }

    /// Fails every launch for a reason other than a missing handler.
    #[derive(Default)]
    struct BrokenOpener {
        attempts: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl UrlOpener for BrokenOpener {
        async fn open(&self, url: &Url) -> Result<()> {
            self.attempts.lock().unwrap().push(url.to_string());
            Err(MarketError::Launch {
                url: url.to_string(),
                reason: "permission denied".to_string(),
            })
        }
    }

    #[tokio::test]
    async fn test_launch_failure_skips_fallback() {
        let opener = Arc::new(BrokenOpener::default());
        let ui = UiContext::spawn(opener.clone()).unwrap();

        let err = ui.open(links::play_listing("a").unwrap()).await.unwrap_err();
        assert!(matches!(err, MarketError::Launch { ref url, .. } if url == "market://details?id=a"));
        assert_eq!(
            *opener.attempts.lock().unwrap(),
            vec!["market://details?id=a".to_string()]
        );
    }

    #[tokio::test]
    async fn test_launches_are_serialized_in_order() {
        let opener = Arc::new(RecordingOpener::default());
        let ui = UiContext::spawn(opener.clone()).unwrap();

        for name in ["a", "b", "c"] {
            ui.open(links::play_collection(name).unwrap()).await.unwrap();
        }

        assert_eq!(
            opener.urls(),
            vec![
                "market://apps/collection/a".to_string(),
                "market://apps/collection/b".to_string(),
                "market://apps/collection/c".to_string(),
            ]
        );
    }
}
