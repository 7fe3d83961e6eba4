/// Transient UI state for the console screen
///
/// Everything here is presentation-only. The retained records, the pause
/// gate, and the filter settings live in the engine's `Console`; this state
/// never reaches past that API.
pub struct AppState {
    /// Is the search bar active (accepting input)?
    pub search_active: bool,

    /// Current search input text
    pub search_input: String,

    /// Is the help overlay visible?
    pub help_visible: bool,

    /// Scroll position in the console (0 = newest)
    pub scroll: usize,

    /// Follow mode: stay pinned to the newest record
    pub follow: bool,

    /// Show timestamps on log lines?
    pub show_timestamps: bool,

    /// Whether the app should quit
    pub should_quit: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            search_active: false,
            search_input: String::new(),
            help_visible: false,
            scroll: 0,
            follow: true,
            show_timestamps: true,
            should_quit: false,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the search bar, keeping any existing input for editing
    pub fn start_search(&mut self) {
        self.search_active = true;
    }

    /// Close the search bar without touching the applied filter
    pub fn finish_search(&mut self) {
        self.search_active = false;
    }

    /// Close the search bar and discard its input
    pub fn cancel_search(&mut self) {
        self.search_active = false;
        self.search_input.clear();
    }

    pub fn search_input_char(&mut self, c: char) {
        self.search_input.push(c);
    }

    pub fn search_input_backspace(&mut self) {
        self.search_input.pop();
    }

    /// Manual scroll disengages follow mode
    pub fn scroll_by(&mut self, delta: isize) {
        self.follow = false;
        if delta < 0 {
            self.scroll = self.scroll.saturating_sub(delta.unsigned_abs());
        } else {
            // Not capped here; the renderer clamps to the filtered count
            self.scroll = self.scroll.saturating_add(delta as usize);
        }
    }

    pub fn scroll_to_top(&mut self) {
        self.follow = false;
        self.scroll = 0;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.follow = false;
        self.scroll = usize::MAX;
    }
}
