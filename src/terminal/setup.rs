//! Low-level terminal mode switches.

use crossterm::{
    cursor::{Hide, Show},
    execute,
    terminal::{disable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Write};

/// Switch to the alternate screen and hide the cursor.
pub fn enter_tui_mode<W: Write>(writer: &mut W) -> io::Result<()> {
    execute!(writer, EnterAlternateScreen, Hide)
}

/// Undo [`enter_tui_mode`] and raw mode. Ignores every error so it can run
/// from drop and panic paths.
pub fn leave_tui_mode<W: Write>(writer: &mut W) {
    let _ = disable_raw_mode();
    let _ = execute!(writer, LeaveAlternateScreen, Show);
    let _ = writer.flush();
}

/// Best-effort restore of stdout from anywhere.
pub fn emergency_restore() {
    leave_tui_mode(&mut io::stdout());
}
