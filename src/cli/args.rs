//! Command-line argument parsing.

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Load once and print the library tree
    Dump { demo: bool },
    /// Run the TUI application (default)
    RunTui { demo: bool },
}

/// Parse command-line arguments and return the command to run.
///
/// `--version` and `--help` win over everything else; unknown flags are
/// ignored.
///
/// ```
/// use folio::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["folio".to_string(), "--demo".to_string()];
/// assert_eq!(parse_args(args.into_iter()), CliCommand::RunTui { demo: true });
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    let mut demo = false;
    let mut dump = false;

    // Skip the program name
    for arg in args.skip(1) {
        match arg.as_str() {
            "--version" | "-V" => return CliCommand::Version,
            "--help" | "-h" => return CliCommand::Help,
            "--demo" => demo = true,
            "--dump" => dump = true,
            _ => {}
        }
    }

    if dump {
        CliCommand::Dump { demo }
    } else {
        CliCommand::RunTui { demo }
    }
}
