//! Application state
//!
//! - [`LibraryState`]: rows of the last completed load
//! - [`NavigationState`]: folders → subfolders → files position and breadcrumb
//! - [`visible_items`]: what the current view lists
//! - [`ListCursor`]: selection within that list

pub mod cursor;
pub mod filter;
pub mod library;
pub mod navigation;

pub use cursor::ListCursor;
pub use filter::{filter_files_by_query, visible_items, VisibleItems};
pub use library::LibraryState;
pub use navigation::{NavigationState, ViewMode, ROOT_LABEL};
