use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

use crate::app::Action;

/// A key combination
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    pub fn new(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::NONE,
        }
    }

    pub fn ctrl(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::CONTROL,
        }
    }

    pub fn shift(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::SHIFT,
        }
    }

    pub fn from_event(event: &KeyEvent) -> Self {
        Self {
            code: event.code,
            modifiers: event.modifiers,
        }
    }
}

/// Context for keybindings
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum KeyContext {
    Global,
    Console,
    SearchInput,
}

/// Keybinding configuration
pub struct KeyBindings {
    bindings: HashMap<KeyContext, HashMap<KeyBinding, Action>>,
}

impl KeyBindings {
    pub fn new() -> Self {
        let mut bindings = HashMap::new();

        // Global bindings
        let mut global = HashMap::new();
        global.insert(KeyBinding::new(KeyCode::Char('?')), Action::ToggleHelp);
        global.insert(KeyBinding::ctrl(KeyCode::Char('c')), Action::Quit);
        global.insert(KeyBinding::new(KeyCode::Char('q')), Action::Quit);
        global.insert(KeyBinding::new(KeyCode::Esc), Action::Quit);
        bindings.insert(KeyContext::Global, global);

        // Console bindings - less-like navigation
        let mut console = HashMap::new();
        console.insert(KeyBinding::new(KeyCode::Char('j')), Action::ScrollDown(1));
        console.insert(KeyBinding::new(KeyCode::Down), Action::ScrollDown(1));
        console.insert(KeyBinding::new(KeyCode::Char('k')), Action::ScrollUp(1));
        console.insert(KeyBinding::new(KeyCode::Up), Action::ScrollUp(1));
        console.insert(KeyBinding::ctrl(KeyCode::Char('d')), Action::PageDown);
        console.insert(KeyBinding::ctrl(KeyCode::Char('u')), Action::PageUp);
        console.insert(KeyBinding::new(KeyCode::PageDown), Action::PageDown);
        console.insert(KeyBinding::new(KeyCode::PageUp), Action::PageUp);
        console.insert(KeyBinding::new(KeyCode::Char('g')), Action::ScrollToTop);
        console.insert(KeyBinding::shift(KeyCode::Char('G')), Action::ScrollToBottom);
        console.insert(KeyBinding::new(KeyCode::Home), Action::ScrollToTop);
        console.insert(KeyBinding::new(KeyCode::End), Action::ScrollToBottom);
        console.insert(KeyBinding::new(KeyCode::Char('f')), Action::ToggleFollow);
        console.insert(KeyBinding::new(KeyCode::Char('t')), Action::ToggleTimestamps);
        console.insert(KeyBinding::new(KeyCode::Char('p')), Action::TogglePause);
        console.insert(KeyBinding::new(KeyCode::Char(' ')), Action::TogglePause);
        console.insert(KeyBinding::new(KeyCode::Char('c')), Action::ClearLogs);
        console.insert(KeyBinding::new(KeyCode::Char('/')), Action::OpenSearch);
        console.insert(KeyBinding::new(KeyCode::Char('n')), Action::ClearFilter);
        console.insert(KeyBinding::new(KeyCode::Char('l')), Action::CycleLevelFilter);
        console.insert(
            KeyBinding::shift(KeyCode::Char('L')),
            Action::CycleLevelFilterBack,
        );
        bindings.insert(KeyContext::Console, console);

        // Search input bindings (when the search bar is active)
        let mut search_input = HashMap::new();
        search_input.insert(KeyBinding::new(KeyCode::Enter), Action::ApplySearch);
        search_input.insert(KeyBinding::new(KeyCode::Esc), Action::CloseSearch);
        search_input.insert(KeyBinding::new(KeyCode::Backspace), Action::SearchBackspace);
        search_input.insert(KeyBinding::ctrl(KeyCode::Char('u')), Action::SearchClear);
        search_input.insert(KeyBinding::ctrl(KeyCode::Char('c')), Action::CloseSearch);
        bindings.insert(KeyContext::SearchInput, search_input);

        Self { bindings }
    }

    /// Look up action for key event in given context
    pub fn get_action(&self, context: KeyContext, key: &KeyEvent) -> Option<Action> {
        let binding = KeyBinding::from_event(key);

        // First check context-specific bindings
        if let Some(context_bindings) = self.bindings.get(&context) {
            if let Some(action) = context_bindings.get(&binding) {
                return Some(action.clone());
            }
        }

        // Fall back to global bindings
        self.bindings
            .get(&KeyContext::Global)?
            .get(&binding)
            .cloned()
    }

    /// Handle key event in search input mode
    /// Returns Some(Action) for special keys, SearchInput for regular characters
    pub fn get_search_input_action(&self, key: &KeyEvent) -> Option<Action> {
        let binding = KeyBinding::from_event(key);

        if let Some(search_bindings) = self.bindings.get(&KeyContext::SearchInput) {
            if let Some(action) = search_bindings.get(&binding) {
                return Some(action.clone());
            }
        }

        if let KeyCode::Char(c) = key.code {
            if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT {
                return Some(Action::SearchInput(c));
            }
        }

        None
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn console_keys_resolve_to_actions() {
        let bindings = KeyBindings::new();
        let key = KeyEvent::new(KeyCode::Char('p'), KeyModifiers::NONE);
        assert!(matches!(
            bindings.get_action(KeyContext::Console, &key),
            Some(Action::TogglePause)
        ));
    }

    #[test]
    fn unknown_console_keys_fall_back_to_global() {
        let bindings = KeyBindings::new();
        let key = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        assert!(matches!(
            bindings.get_action(KeyContext::Console, &key),
            Some(Action::Quit)
        ));
    }

    #[test]
    fn search_mode_turns_characters_into_input() {
        let bindings = KeyBindings::new();
        let key = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE);
        assert!(matches!(
            bindings.get_search_input_action(&key),
            Some(Action::SearchInput('x'))
        ));

        let enter = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        assert!(matches!(
            bindings.get_search_input_action(&enter),
            Some(Action::ApplySearch)
        ));
    }
}
