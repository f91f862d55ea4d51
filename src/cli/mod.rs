//! Command-line handling.
//!
//! `main()` parses the arguments first and only starts the TUI when no
//! one-shot command applies:
//!
//! ```ignore
//! use folio::cli::{parse_args, run_cli_command};
//!
//! let command = parse_args(std::env::args());
//! if let Some(result) = run_cli_command(&command) {
//!     return result;
//! }
//! // Not a print-and-exit command; continue to dump or TUI
//! ```

pub mod args;
pub mod dump;
pub mod version;

pub use args::{parse_args, CliCommand};
pub use dump::{handle_dump_command, render_tree};
pub use version::{usage_text, version_text, VERSION};

use color_eyre::Result;

/// Run the commands that need neither config nor a runtime.
///
/// Returns `None` for `Dump` and `RunTui`, which the caller handles once the
/// configuration is loaded.
pub fn run_cli_command(command: &CliCommand) -> Option<Result<()>> {
    match command {
        CliCommand::Version => {
            println!("{}", version_text());
            Some(Ok(()))
        }
        CliCommand::Help => {
            println!("{}", usage_text());
            Some(Ok(()))
        }
        CliCommand::Dump { .. } | CliCommand::RunTui { .. } => None,
    }
}
