//! Keyboard input handling.
//!
//! ```text
//! KeyEvent -> CommandRegistry::dispatch() -> Command -> App::execute_command()
//! ```
//!
//! - [`command`] - the [`Command`] enum
//! - [`context`] - [`InputContext`], the state that decides how keys are read
//! - [`keybindings`] - default key map
//! - [`registry`] - [`CommandRegistry`]

pub mod command;
pub mod context;
pub mod keybindings;
pub mod registry;

pub use command::Command;
pub use context::{InputContext, ModalType};
pub use keybindings::{KeyCombo, KeybindingConfig};
pub use registry::CommandRegistry;
