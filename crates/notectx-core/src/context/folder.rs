//! Folder content aggregation

use std::time::Instant;

use crate::trace_time;
use crate::vault::{file_content, FileRef, FolderRef, Node, Vault};

/// Separator placed between note blocks
pub const BLOCK_SEPARATOR: &str = "\n\n";

/// A note rendered as a context block: `# <file name>`, a blank line, then
/// the note text.
pub fn note_block(file: &FileRef, content: &str) -> String {
    format!("# {}\n\n{}", file.name(), content)
}

/// Concatenate every readable markdown note under `folder`, depth-first.
///
/// Files contribute a [`note_block`]; subfolders contribute their own
/// aggregation. Non-markdown and unreadable files are skipped silently, as
/// are subfolders that yield nothing. Returns `None` when nothing at all is
/// readable. Order follows [`Vault::children`].
#[tracing::instrument(skip(vault), fields(folder = folder.path()))]
pub fn aggregate<V: Vault + ?Sized>(vault: &V, folder: &FolderRef) -> Option<String> {
    let start = Instant::now();
    let combined = aggregate_inner(vault, folder);
    trace_time!(start, "aggregate_folder");
    combined
}

fn aggregate_inner<V: Vault + ?Sized>(vault: &V, folder: &FolderRef) -> Option<String> {
    let blocks: Vec<String> = vault
        .children(folder)
        .into_iter()
        .filter_map(|child| match child {
            Node::File(file) => file_content(vault, &file).map(|c| note_block(&file, &c)),
            Node::Folder(sub) => aggregate_inner(vault, &sub),
        })
        .collect();

    if blocks.is_empty() {
        None
    } else {
        Some(blocks.join(BLOCK_SEPARATOR))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vault::MemoryVault;

    #[test]
    fn test_empty_folder_is_absent() {
        let mut vault = MemoryVault::new();
        vault.insert_folder("empty");
        assert!(aggregate(&vault, &FolderRef::new("empty")).is_none());
    }

    #[test]
    fn test_non_markdown_only_is_absent() {
        let mut vault = MemoryVault::new();
        vault
            .insert_file("assets/logo.png", "binary")
            .insert_file("assets/data.csv", "a,b")
            .insert_folder("assets/nested");
        assert!(aggregate(&vault, &FolderRef::new("assets")).is_none());
    }

    #[test]
    fn test_blocks_in_child_order() {
        let mut vault = MemoryVault::new();
        vault
            .insert_file("p/second.md", "two")
            .insert_file("p/first.md", "one");
        assert_eq!(
            aggregate(&vault, &FolderRef::new("p")).unwrap(),
            "# second.md\n\ntwo\n\n# first.md\n\none"
        );
    }

    #[test]
    fn test_recurses_depth_first() {
        let mut vault = MemoryVault::new();
        vault
            .insert_file("p/a.md", "A")
            .insert_file("p/sub/b.md", "B")
            .insert_folder("p/sub/empty")
            .insert_file("p/sub/deeper/c.md", "C")
            .insert_file("p/z.md", "Z");

        let combined = aggregate(&vault, &FolderRef::new("p")).unwrap();
        assert_eq!(
            combined,
            "# a.md\n\nA\n\n# b.md\n\nB\n\n# c.md\n\nC\n\n# z.md\n\nZ"
        );
    }

    #[test]
    fn test_one_heading_per_readable_note() {
        let mut vault = MemoryVault::new();
        vault
            .insert_file("p/a.md", "A")
            .insert_unreadable("p/locked.md")
            .insert_file("p/image.png", "x")
            .insert_file("p/sub/b.md", "B");

        let combined = aggregate(&vault, &FolderRef::new("p")).unwrap();
        let headings: Vec<&str> = combined.lines().filter(|l| l.starts_with("# ")).collect();
        assert_eq!(headings, vec!["# a.md", "# b.md"]);
    }

    #[test]
    fn test_empty_note_still_contributes_heading() {
        let mut vault = MemoryVault::new();
        vault.insert_file("p/blank.md", "");
        assert_eq!(
            aggregate(&vault, &FolderRef::new("p")).unwrap(),
            "# blank.md\n\n"
        );
    }
}
