//! `--dump`: load the library once and print it as a tree.

use color_eyre::Result;
use std::fmt::Write as _;

use crate::backend::LibrarySnapshot;
use crate::format::{count_label, format_file_size};
use crate::traits::LibrarySource;

/// Render folders, their subfolders and their files as an indented tree.
///
/// Subfolders whose parent is not among the loaded folders are listed under
/// a trailing `(unfiled)` heading so nothing is silently dropped.
pub fn render_tree(snapshot: &LibrarySnapshot) -> String {
    let mut out = String::new();

    for folder in &snapshot.folders {
        let _ = writeln!(out, "{}/", folder.name);
        for subfolder in snapshot.subfolders.iter().filter(|s| s.folder_id == folder.id) {
            write_subfolder(&mut out, "  ", subfolder);
        }
    }

    let orphans: Vec<_> = snapshot
        .subfolders
        .iter()
        .filter(|s| !snapshot.folders.iter().any(|f| f.id == s.folder_id))
        .collect();
    if !orphans.is_empty() {
        let _ = writeln!(out, "(unfiled)/");
        for subfolder in orphans {
            write_subfolder(&mut out, "  ", subfolder);
        }
    }

    let _ = writeln!(
        out,
        "\n{}, {}, {}",
        count_label(snapshot.folders.len(), "folder"),
        count_label(snapshot.subfolders.len(), "subfolder"),
        count_label(snapshot.files.len(), "file"),
    );
    for failure in &snapshot.failures {
        let _ = writeln!(
            out,
            "! {} failed [{}]: {}",
            failure.collection, failure.code, failure.message
        );
    }
    out
}

fn write_subfolder(out: &mut String, indent: &str, subfolder: &crate::models::Subfolder) {
    let _ = writeln!(
        out,
        "{}{}/ ({})",
        indent,
        subfolder.name,
        format_file_size(subfolder.total_size())
    );
    for file in &subfolder.files {
        let _ = writeln!(
            out,
            "{}  {} {}  {}",
            indent,
            file.kind().icon(),
            file.name,
            format_file_size(file.size)
        );
    }
}

/// Load from `source`, print the tree to stdout, and fail if any collection
/// could not be loaded.
pub async fn handle_dump_command(source: &dyn LibrarySource) -> Result<()> {
    tracing::info!("Dumping library from {}", source.describe());
    let snapshot = source.load().await;
    print!("{}", render_tree(&snapshot));

    if snapshot.is_complete() {
        Ok(())
    } else {
        Err(color_eyre::eyre::eyre!(
            "{} of the library failed to load",
            count_label(snapshot.failures.len(), "collection")
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::LoadFailure;
    use crate::demo::{sample_library, DemoSource};

    #[test]
    fn test_render_tree_nests_files() {
        let tree = render_tree(&sample_library());
        let orchestra = tree.find("Symphony Orchestra/").unwrap();
        let beethoven = tree.find("  Beethoven").unwrap();
        let score = tree.find("Full Score.pdf").unwrap();
        assert!(orchestra < beethoven && beethoven < score);
        assert!(tree.contains("3 folders, 4 subfolders, 9 files"));
        assert!(!tree.contains("(unfiled)"));
    }

    #[test]
    fn test_render_tree_lists_orphans_and_failures() {
        let mut snapshot = sample_library();
        snapshot.folders.retain(|f| f.id != "jazz");
        snapshot.failures.push(LoadFailure {
            collection: "folders".to_string(),
            code: "SERVER_ERROR",
            message: "boom".to_string(),
        });

        let tree = render_tree(&snapshot);
        assert!(tree.contains("(unfiled)/"));
        assert!(tree.contains("! folders failed [SERVER_ERROR]: boom"));
    }

    #[tokio::test]
    async fn test_dump_demo_succeeds() {
        assert!(handle_dump_command(&DemoSource).await.is_ok());
    }
}
