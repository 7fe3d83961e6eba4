use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use tokio::sync::mpsc;

use logscope_logs::Console;
use logscope_source::{FeedManager, Generator, LogRecord};
use logscope_tui::{
    Action, AppState, ConsoleScreen, Event, EventHandler, HelpOverlay, KeyBindings, KeyContext,
    Tui,
};

mod config;

use config::{FileConfig, Settings};

/// Logscope - a terminal UI for watching a live, bounded log feed
#[derive(Parser, Debug)]
#[command(name = "logscope")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Retention window size (how many records to keep)
    #[arg(long)]
    capacity: Option<usize>,

    /// Feed cadence in milliseconds
    #[arg(long)]
    interval_ms: Option<u64>,

    /// Startup backfill record count (0 disables seeding)
    #[arg(long)]
    seed: Option<usize>,

    /// Path to the config file
    #[arg(long, default_value = "logscope.toml")]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize tracing for debugging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let result = run_app(args).await;

    if let Err(e) = &result {
        eprintln!("Error: {:#}", e);
    }

    result
}

async fn run_app(args: Args) -> Result<()> {
    let file = FileConfig::load(&args.config)?;
    let settings = Settings::resolve(&file, args.capacity, args.interval_ms, args.seed);

    // Record channel from the feed to the event loop
    let (log_tx, mut log_rx) = mpsc::unbounded_channel::<LogRecord>();
    let (action_tx, mut action_rx) = mpsc::unbounded_channel::<Action>();

    // Engine state
    let mut console = Console::new(settings.capacity);

    // Synthetic source: backfill, then periodic production
    let generator = Generator::new();
    if settings.seed > 0 {
        // seed_batch is newest-first; insert oldest-first so the first
        // snapshot reads newest-first
        let mut batch = generator.seed_batch(settings.seed);
        batch.reverse();
        console.seed(batch);
    }
    let mut feed = FeedManager::new();
    feed.start(generator, log_tx, settings.interval);

    // Terminal and input
    let mut tui = Tui::new()?;
    let mut events = EventHandler::new(Duration::from_millis(100));
    let keybindings = KeyBindings::new();
    let mut state = AppState::new();

    // Initial render
    render(&mut tui, &mut state, &console)?;

    // Main event loop: all mutations are serialized here
    loop {
        tokio::select! {
            Some(event) = events.next() => {
                match event {
                    Event::Key(key) => {
                        let action = if state.search_active {
                            keybindings.get_search_input_action(&key)
                        } else {
                            keybindings.get_action(KeyContext::Console, &key)
                        };
                        if let Some(action) = action {
                            let _ = action_tx.send(action);
                        }
                    }
                    Event::Tick | Event::Resize(_, _) => {
                        // Re-render below to show new records
                    }
                }
            }

            Some(record) = log_rx.recv() => {
                console.on_record_arrived(record);
            }

            Some(action) = action_rx.recv() => {
                handle_action(&mut state, &mut console, action);
            }
        }

        if state.should_quit {
            break;
        }

        render(&mut tui, &mut state, &console)?;
    }

    feed.stop();
    events.shutdown();
    tui.restore()?;

    Ok(())
}

fn handle_action(state: &mut AppState, console: &mut Console, action: Action) {
    match action {
        Action::Quit => {
            state.should_quit = true;
        }

        Action::TogglePause => {
            console.toggle_pause();
        }
        Action::ClearLogs => {
            console.clear();
            state.scroll = 0;
        }

        Action::CycleLevelFilter => {
            console.set_level_filter(console.level_filter().next());
            state.scroll = 0;
        }
        Action::CycleLevelFilterBack => {
            console.set_level_filter(console.level_filter().prev());
            state.scroll = 0;
        }

        // Search edits apply live; the controller re-derives on next read
        Action::OpenSearch => {
            state.start_search();
        }
        Action::CloseSearch => {
            state.cancel_search();
            console.set_search("");
        }
        Action::SearchInput(c) => {
            state.search_input_char(c);
            console.set_search(state.search_input.clone());
            state.scroll = 0;
        }
        Action::SearchBackspace => {
            state.search_input_backspace();
            console.set_search(state.search_input.clone());
        }
        Action::SearchClear => {
            state.search_input.clear();
            console.set_search("");
        }
        Action::ApplySearch => {
            state.finish_search();
        }
        Action::ClearFilter => {
            state.cancel_search();
            console.set_search("");
        }

        Action::ScrollUp(n) => {
            state.scroll_by(-(n as isize));
        }
        Action::ScrollDown(n) => {
            state.scroll_by(n as isize);
        }
        Action::PageUp => {
            state.scroll_by(-20);
        }
        Action::PageDown => {
            state.scroll_by(20);
        }
        Action::ScrollToTop => {
            state.scroll_to_top();
        }
        Action::ScrollToBottom => {
            state.scroll_to_bottom();
        }
        Action::ToggleFollow => {
            state.follow = !state.follow;
            if state.follow {
                state.scroll = 0;
            }
        }

        Action::ToggleTimestamps => {
            state.show_timestamps = !state.show_timestamps;
        }
        Action::ToggleHelp => {
            state.help_visible = !state.help_visible;
        }

        Action::Tick | Action::Render => {
            // No-op; the loop re-renders after every event
        }
    }
}

fn render(tui: &mut Tui, state: &mut AppState, console: &Console) -> Result<()> {
    tui.terminal().draw(|frame| {
        ConsoleScreen::render(frame, state, console);

        if state.help_visible {
            HelpOverlay::render(frame);
        }
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use logscope_types::LevelFilter;

    #[test]
    fn pause_action_flips_the_gate() {
        let mut state = AppState::new();
        let mut console = Console::new(10);

        handle_action(&mut state, &mut console, Action::TogglePause);
        assert!(console.is_paused());
        handle_action(&mut state, &mut console, Action::TogglePause);
        assert!(!console.is_paused());
    }

    #[test]
    fn search_input_applies_live() {
        let mut state = AppState::new();
        let mut console = Console::new(10);
        state.start_search();

        handle_action(&mut state, &mut console, Action::SearchInput('a'));
        handle_action(&mut state, &mut console, Action::SearchInput('b'));
        assert_eq!(console.search(), "ab");

        handle_action(&mut state, &mut console, Action::SearchBackspace);
        assert_eq!(console.search(), "a");

        handle_action(&mut state, &mut console, Action::ClearFilter);
        assert_eq!(console.search(), "");
        assert!(!state.search_active);
    }

    #[test]
    fn level_cycle_round_trips() {
        let mut state = AppState::new();
        let mut console = Console::new(10);

        handle_action(&mut state, &mut console, Action::CycleLevelFilter);
        assert_ne!(console.level_filter(), LevelFilter::All);
        handle_action(&mut state, &mut console, Action::CycleLevelFilterBack);
        assert_eq!(console.level_filter(), LevelFilter::All);
    }

    #[test]
    fn clear_resets_scroll_and_buffer() {
        let mut state = AppState::new();
        let mut console = Console::new(10);
        state.scroll = 7;

        handle_action(&mut state, &mut console, Action::ClearLogs);
        assert_eq!(state.scroll, 0);
        assert_eq!(console.summary().count, 0);
    }
}
