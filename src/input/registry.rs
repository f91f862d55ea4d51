//! Maps key events to commands for the current context.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::command::Command;
use super::context::InputContext;
use super::keybindings::{KeyCombo, KeybindingConfig};
use crate::state::ViewMode;

/// Dispatches key events in priority order:
/// 1. Ctrl+C, always
/// 2. The active modal, which swallows everything else
/// 3. Search mode, which captures printable characters
/// 4. Global bindings
/// 5. Screen bindings, file-only commands gated to the files view
#[derive(Debug, Clone, Default)]
pub struct CommandRegistry {
    config: KeybindingConfig,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self {
            config: KeybindingConfig::new(),
        }
    }

    pub fn with_config(config: KeybindingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &KeybindingConfig {
        &self.config
    }

    /// `None` means the key is not bound here.
    pub fn dispatch(&self, key: KeyEvent, context: &InputContext) -> Option<Command> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Some(Command::Quit);
        }

        let combo = KeyCombo::new(key.code, key.modifiers).normalized();

        if context.is_modal_active() {
            return Some(
                self.config
                    .get_modal(context.modal, &combo)
                    .cloned()
                    .unwrap_or(Command::Noop),
            );
        }

        if context.is_searching() {
            return Some(self.dispatch_search(key, &combo));
        }

        if let Some(cmd) = self.config.get_global(&combo) {
            return Some(cmd.clone());
        }

        let cmd = self.config.get_screen(context.screen, &combo)?;
        if cmd.needs_file() && context.view != ViewMode::Files {
            return None;
        }
        Some(cmd.clone())
    }

    fn dispatch_search(&self, key: KeyEvent, combo: &KeyCombo) -> Command {
        if let Some(cmd) = self.config.get_search(combo) {
            return cmd.clone();
        }
        match key.code {
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                Command::SearchInput(c)
            }
            _ => Command::Noop,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{InputMode, Screen};
    use crate::input::ModalType;

    fn make_key_event(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    fn plain(code: KeyCode) -> KeyEvent {
        make_key_event(code, KeyModifiers::NONE)
    }

    fn files_context() -> InputContext {
        InputContext::new().with_view(ViewMode::Files)
    }

    #[test]
    fn test_dispatch_ctrl_c_quits_even_in_modal() {
        let registry = CommandRegistry::new();
        let context = files_context().with_modal(ModalType::Preview);
        let key = make_key_event(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(registry.dispatch(key, &context), Some(Command::Quit));
    }

    #[test]
    fn test_dispatch_navigation_keys() {
        let registry = CommandRegistry::new();
        let context = InputContext::new();
        assert_eq!(registry.dispatch(plain(KeyCode::Char('j')), &context), Some(Command::MoveDown));
        assert_eq!(registry.dispatch(plain(KeyCode::Up), &context), Some(Command::MoveUp));
        assert_eq!(registry.dispatch(plain(KeyCode::Right), &context), Some(Command::Activate));
        assert_eq!(registry.dispatch(plain(KeyCode::Backspace), &context), Some(Command::Back));
        assert_eq!(
            registry.dispatch(plain(KeyCode::Char('1')), &context),
            Some(Command::JumpToBreadcrumb(0))
        );
    }

    #[test]
    fn test_file_commands_only_in_files_view() {
        let registry = CommandRegistry::new();
        let folders = InputContext::new();
        assert_eq!(registry.dispatch(plain(KeyCode::Char('/')), &folders), None);
        assert_eq!(registry.dispatch(plain(KeyCode::Char('d')), &folders), None);

        let files = files_context();
        assert_eq!(
            registry.dispatch(plain(KeyCode::Char('/')), &files),
            Some(Command::StartSearch)
        );
        assert_eq!(
            registry.dispatch(plain(KeyCode::Char('d')), &files),
            Some(Command::RequestDelete)
        );
    }

    #[test]
    fn test_search_mode_captures_characters() {
        let registry = CommandRegistry::new();
        let context = files_context().with_mode(InputMode::Search);
        assert_eq!(
            registry.dispatch(plain(KeyCode::Char('q')), &context),
            Some(Command::SearchInput('q'))
        );
        assert_eq!(
            registry.dispatch(make_key_event(KeyCode::Char('V'), KeyModifiers::SHIFT), &context),
            Some(Command::SearchInput('V'))
        );
        assert_eq!(
            registry.dispatch(plain(KeyCode::Esc), &context),
            Some(Command::CancelSearch)
        );
        assert_eq!(
            registry.dispatch(plain(KeyCode::Enter), &context),
            Some(Command::FinishSearch)
        );
    }

    #[test]
    fn test_modal_swallows_unbound_keys() {
        let registry = CommandRegistry::new();
        let context = files_context().with_modal(ModalType::ConfirmDelete);
        assert_eq!(
            registry.dispatch(plain(KeyCode::Char('y')), &context),
            Some(Command::ConfirmDelete)
        );
        assert_eq!(
            registry.dispatch(plain(KeyCode::Char('j')), &context),
            Some(Command::Noop)
        );
    }

    #[test]
    fn test_dashboard_only_has_global_keys() {
        let registry = CommandRegistry::new();
        let context = InputContext::new().with_screen(Screen::Dashboard);
        assert_eq!(registry.dispatch(plain(KeyCode::Char('j')), &context), None);
        assert_eq!(
            registry.dispatch(plain(KeyCode::Tab), &context),
            Some(Command::SwitchScreen)
        );
        assert_eq!(registry.dispatch(plain(KeyCode::Char('r')), &context), Some(Command::Refresh));
    }
}
