//! Default keybindings.

use crossterm::event::{KeyCode, KeyModifiers};
use std::collections::HashMap;

use super::command::Command;
use super::context::ModalType;
use crate::app::Screen;

/// A key code plus modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyCombo {
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    pub const fn plain(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CONTROL)
    }

    /// Drop SHIFT from character keys; terminals disagree on reporting it.
    pub fn normalized(self) -> Self {
        match self.code {
            KeyCode::Char(_) => Self::new(self.code, self.modifiers.difference(KeyModifiers::SHIFT)),
            _ => self,
        }
    }
}

#[derive(Debug, Clone)]
pub struct KeybindingConfig {
    /// Active outside modals and search
    pub global: HashMap<KeyCombo, Command>,
    pub modal: HashMap<ModalType, HashMap<KeyCombo, Command>>,
    pub screen: HashMap<Screen, HashMap<KeyCombo, Command>>,
    /// Non-character keys while typing a search query
    pub search: HashMap<KeyCombo, Command>,
}

impl Default for KeybindingConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl KeybindingConfig {
    pub fn new() -> Self {
        let mut config = Self {
            global: HashMap::new(),
            modal: HashMap::new(),
            screen: HashMap::new(),
            search: HashMap::new(),
        };
        config.setup_global_bindings();
        config.setup_modal_bindings();
        config.setup_screen_bindings();
        config.setup_search_bindings();
        config
    }

    fn setup_global_bindings(&mut self) {
        self.global
            .insert(KeyCombo::ctrl(KeyCode::Char('c')), Command::Quit);
        self.global
            .insert(KeyCombo::plain(KeyCode::Char('q')), Command::Quit);
        self.global
            .insert(KeyCombo::plain(KeyCode::Tab), Command::SwitchScreen);
        self.global
            .insert(KeyCombo::plain(KeyCode::Char('r')), Command::Refresh);
    }

    fn setup_modal_bindings(&mut self) {
        let mut preview = HashMap::new();
        for code in [
            KeyCode::Esc,
            KeyCode::Char('p'),
            KeyCode::Char('q'),
            KeyCode::Backspace,
        ] {
            preview.insert(KeyCombo::plain(code), Command::ClosePreviewModal);
        }
        preview.insert(KeyCombo::plain(KeyCode::Char('o')), Command::OpenExternal);
        self.modal.insert(ModalType::Preview, preview);

        let mut confirm = HashMap::new();
        for code in [KeyCode::Char('y'), KeyCode::Enter] {
            confirm.insert(KeyCombo::plain(code), Command::ConfirmDelete);
        }
        for code in [KeyCode::Char('n'), KeyCode::Esc, KeyCode::Char('q')] {
            confirm.insert(KeyCombo::plain(code), Command::CancelDelete);
        }
        self.modal.insert(ModalType::ConfirmDelete, confirm);
    }

    fn setup_screen_bindings(&mut self) {
        let mut library = HashMap::new();
        for code in [KeyCode::Up, KeyCode::Char('k')] {
            library.insert(KeyCombo::plain(code), Command::MoveUp);
        }
        for code in [KeyCode::Down, KeyCode::Char('j')] {
            library.insert(KeyCombo::plain(code), Command::MoveDown);
        }
        for code in [KeyCode::Enter, KeyCode::Right, KeyCode::Char('l')] {
            library.insert(KeyCombo::plain(code), Command::Activate);
        }
        for code in [
            KeyCode::Esc,
            KeyCode::Left,
            KeyCode::Char('h'),
            KeyCode::Backspace,
        ] {
            library.insert(KeyCombo::plain(code), Command::Back);
        }
        for (digit, index) in [('1', 0), ('2', 1), ('3', 2)] {
            library.insert(
                KeyCombo::plain(KeyCode::Char(digit)),
                Command::JumpToBreadcrumb(index),
            );
        }
        library.insert(KeyCombo::plain(KeyCode::Char('/')), Command::StartSearch);
        library.insert(KeyCombo::plain(KeyCode::Char('p')), Command::OpenPreviewModal);
        library.insert(KeyCombo::plain(KeyCode::Char('o')), Command::OpenExternal);
        library.insert(KeyCombo::plain(KeyCode::Char('d')), Command::RequestDelete);
        self.screen.insert(Screen::Library, library);

        // Dashboard is read-only; only the global keys apply
        self.screen.insert(Screen::Dashboard, HashMap::new());
    }

    fn setup_search_bindings(&mut self) {
        self.search
            .insert(KeyCombo::plain(KeyCode::Esc), Command::CancelSearch);
        self.search
            .insert(KeyCombo::plain(KeyCode::Enter), Command::FinishSearch);
        self.search
            .insert(KeyCombo::plain(KeyCode::Backspace), Command::SearchBackspace);
        self.search
            .insert(KeyCombo::plain(KeyCode::Up), Command::MoveUp);
        self.search
            .insert(KeyCombo::plain(KeyCode::Down), Command::MoveDown);
    }

    pub fn get_global(&self, combo: &KeyCombo) -> Option<&Command> {
        self.global.get(combo)
    }

    pub fn get_modal(&self, modal: ModalType, combo: &KeyCombo) -> Option<&Command> {
        self.modal.get(&modal).and_then(|m| m.get(combo))
    }

    pub fn get_screen(&self, screen: Screen, combo: &KeyCombo) -> Option<&Command> {
        self.screen.get(&screen).and_then(|m| m.get(combo))
    }

    pub fn get_search(&self, combo: &KeyCombo) -> Option<&Command> {
        self.search.get(combo)
    }
}
