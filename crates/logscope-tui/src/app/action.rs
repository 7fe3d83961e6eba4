/// All possible actions in the application (command pattern)
#[derive(Clone, Debug)]
pub enum Action {
    Quit,

    // Feed control
    TogglePause,
    ClearLogs,

    // Level filter
    CycleLevelFilter,
    CycleLevelFilterBack,

    // Search
    OpenSearch,
    CloseSearch,
    SearchInput(char),
    SearchBackspace,
    SearchClear,
    ApplySearch,
    ClearFilter,

    // Console scrolling
    ScrollUp(usize),
    ScrollDown(usize),
    PageUp,
    PageDown,
    ScrollToTop,
    ScrollToBottom,
    ToggleFollow,

    // Display toggles
    ToggleTimestamps,
    ToggleHelp,

    // Tick (for periodic updates)
    Tick,

    // Render request
    Render,
}
