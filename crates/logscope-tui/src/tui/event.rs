use std::time::Duration;

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind};
use futures::{FutureExt, StreamExt};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

/// Terminal events
#[derive(Clone, Debug)]
pub enum Event {
    /// Periodic redraw tick
    Tick,
    /// Key press
    Key(KeyEvent),
    /// Terminal resize
    Resize(u16, u16),
}

/// Reads crossterm input and ticks on a background task
pub struct EventHandler {
    receiver: mpsc::UnboundedReceiver<Event>,
    cancel: CancellationToken,
}

impl EventHandler {
    /// Spawn the input reader with the given tick rate
    pub fn new(tick_rate: Duration) -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        let cancel = CancellationToken::new();

        let task_cancel = cancel.clone();
        tokio::spawn(async move {
            read_loop(sender, task_cancel, tick_rate).await;
        });

        Self { receiver, cancel }
    }

    /// Receive the next event
    pub async fn next(&mut self) -> Option<Event> {
        self.receiver.recv().await
    }

    /// Stop the reader task
    pub fn shutdown(&self) {
        self.cancel.cancel();
    }
}

async fn read_loop(
    sender: mpsc::UnboundedSender<Event>,
    cancel: CancellationToken,
    tick_rate: Duration,
) {
    let mut reader = event::EventStream::new();
    let mut ticker = tokio::time::interval(tick_rate);

    loop {
        let input = reader.next().fuse();

        tokio::select! {
            _ = cancel.cancelled() => break,

            _ = ticker.tick() => {
                if sender.send(Event::Tick).is_err() {
                    break;
                }
            }

            maybe_event = input => {
                let Some(Ok(evt)) = maybe_event else {
                    // Stream error or end of input; nothing left to read
                    break;
                };
                match evt {
                    // Release/repeat events are filtered (matters on Windows)
                    CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                        if sender.send(Event::Key(key)).is_err() {
                            break;
                        }
                    }
                    CrosstermEvent::Resize(w, h) => {
                        let _ = sender.send(Event::Resize(w, h));
                    }
                    _ => {}
                }
            }
        }
    }
}
