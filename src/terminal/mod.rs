//! Terminal ownership for the browser.
//!
//! [`TerminalManager`] puts the terminal into raw mode on the alternate screen
//! and puts it back when dropped. [`setup_panic_hook`] covers the paths where
//! drop never runs.
//!
//! ```no_run
//! use folio::terminal::{setup_panic_hook, TerminalManager};
//!
//! fn main() -> color_eyre::Result<()> {
//!     setup_panic_hook();
//!     let mut manager = TerminalManager::new()?;
//!     manager.terminal().draw(|_frame| {})?;
//!     Ok(())
//! }
//! ```

mod panic;
mod setup;

pub use panic::setup_panic_hook;
pub use setup::{emergency_restore, enter_tui_mode, leave_tui_mode};

use color_eyre::Result;
use crossterm::terminal::enable_raw_mode;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};

/// Restores the terminal exactly once, on drop or on request.
pub struct TerminalGuard {
    restored: bool,
}

impl TerminalGuard {
    fn new() -> Self {
        Self { restored: false }
    }

    pub fn restore(&mut self) {
        if self.restored {
            return;
        }
        self.restored = true;
        leave_tui_mode(&mut io::stdout());
    }

    pub fn is_restored(&self) -> bool {
        self.restored
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        self.restore();
    }
}

/// A ratatui terminal on stdout whose setup is undone on drop.
pub struct TerminalManager {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    guard: TerminalGuard,
}

impl TerminalManager {
    /// Enter raw mode and the alternate screen, then clear it.
    pub fn new() -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        // Guard first so a failure below still restores
        let guard = TerminalGuard::new();
        enter_tui_mode(&mut stdout)?;

        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        terminal.clear()?;

        Ok(Self { terminal, guard })
    }

    pub fn terminal(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }

    /// Restore the terminal before the manager is dropped.
    pub fn restore(&mut self) -> Result<()> {
        self.guard.restore();
        self.terminal.show_cursor()?;
        Ok(())
    }
}
