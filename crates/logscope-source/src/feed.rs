use std::time::Duration;

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use logscope_types::LogRecord;

use crate::generate::Generator;

/// Drives the synthetic feed on a timer
///
/// The cadence belongs to this collaborator; the engine just reacts to
/// whatever arrives on the channel.
pub struct FeedManager {
    cancel: CancellationToken,
    task: Option<tokio::task::JoinHandle<()>>,
}

impl FeedManager {
    pub fn new() -> Self {
        Self {
            cancel: CancellationToken::new(),
            task: None,
        }
    }

    /// Start producing one record per interval on the given channel
    pub fn start(
        &mut self,
        generator: Generator,
        tx: mpsc::UnboundedSender<LogRecord>,
        interval: Duration,
    ) {
        let cancel = self.cancel.clone();

        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            // The first tick fires immediately; skip it so the seed batch
            // stays the newest content until a full interval has passed.
            ticker.tick().await;

            loop {
                tokio::select! {
                    _ = cancel.cancelled() => break,

                    _ = ticker.tick() => {
                        if tx.send(generator.next_record()).is_err() {
                            // Channel closed, stop producing
                            break;
                        }
                    }
                }
            }
        });

        self.task = Some(task);
    }

    /// Stop the feed
    pub fn stop(&mut self) {
        self.cancel.cancel();
        if let Some(task) = self.task.take() {
            task.abort();
        }
        // Fresh token in case the feed is started again
        self.cancel = CancellationToken::new();
    }

    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|t| !t.is_finished())
    }
}

impl Default for FeedManager {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for FeedManager {
    fn drop(&mut self) {
        self.stop();
    }
}
