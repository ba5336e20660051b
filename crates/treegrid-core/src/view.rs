//! The view projector: a pure function from (resolved node, path, filter)
//! to a render-agnostic view model.
//!
//! The projector never fails. A missing or non-directory node projects to
//! an explicit "nothing to show" value, which is how a stale navigation
//! path (the viewed folder vanished in a refresh) renders without error.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use crate::tree::{FileKind, Timestamp, TreeNode};

/// What the UI should display for the current navigation state.
#[derive(Clone, Debug, PartialEq)]
pub enum ViewModel {
    /// The current path resolves to nothing displayable.
    NothingToShow,
    /// A browsable directory listing.
    Grid(GridView),
}

/// A directory listing: an optional back affordance plus the children
/// that survived the filter, in server-provided order.
#[derive(Clone, Debug, PartialEq)]
pub struct GridView {
    /// Parent path to navigate to; present iff the current path is
    /// non-root. The parent of a top-level child is the root (`""`).
    pub back: Option<String>,
    pub entries: Vec<ViewEntry>,
}

/// One grid cell with its available actions.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewEntry {
    pub name: String,
    pub path: String,
    pub is_dir: bool,
    pub kind: FileKind,
    pub size: Option<u64>,
    pub modified: Option<Timestamp>,
    pub actions: Vec<EntryAction>,
}

/// Actions a grid entry offers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryAction {
    /// Navigate into the directory.
    OpenDirectory,
    /// Open the raw content in a new browser tab (server-hinted).
    OpenInTab,
    /// Download the raw content, suggesting the original filename.
    Download,
    /// Pick a local file and replace this file's content.
    Replace,
    /// Delete after an explicit user confirmation.
    Delete,
}

/// Fold text for search matching: compatibility-decompose, drop combining
/// marks, lowercase. Applied to both the filter and entry names, so
/// "cafe" matches "Café.txt".
pub fn normalize(text: &str) -> String {
    text.nfkd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}

/// Parent path, computed by stripping the last `/`-delimited segment.
/// Top-level children have the root (`""`) as parent.
pub fn parent_of(path: &str) -> String {
    path.rsplit_once('/')
        .map(|(parent, _)| parent.to_string())
        .unwrap_or_default()
}

/// Project the resolved node into a view model.
///
/// `filter` must already be normalized (see [`normalize`]); the store
/// keeps it that way. An empty filter matches every child, and a
/// directory without a children array projects as empty, not as an error.
pub fn project(node: Option<&TreeNode>, current_path: &str, filter: &str) -> ViewModel {
    let Some(node) = node else {
        return ViewModel::NothingToShow;
    };
    if !node.is_dir {
        return ViewModel::NothingToShow;
    }

    let back = (!current_path.is_empty()).then(|| parent_of(current_path));
    let entries = node
        .children
        .as_deref()
        .unwrap_or_default()
        .iter()
        .filter(|child| filter.is_empty() || normalize(&child.name).contains(filter))
        .map(entry_for)
        .collect();

    ViewModel::Grid(GridView { back, entries })
}

fn entry_for(node: &TreeNode) -> ViewEntry {
    let actions = if node.is_dir {
        vec![EntryAction::OpenDirectory]
    } else {
        let mut actions = Vec::with_capacity(4);
        if node.is_browser_supported {
            actions.push(EntryAction::OpenInTab);
        }
        actions.extend([
            EntryAction::Download,
            EntryAction::Replace,
            EntryAction::Delete,
        ]);
        actions
    };

    ViewEntry {
        name: node.name.clone(),
        path: node.path.clone(),
        is_dir: node.is_dir,
        kind: node.file_type,
        size: node.size,
        modified: node.modified.clone(),
        actions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dir(name: &str, path: &str, children: Option<Vec<TreeNode>>) -> TreeNode {
        TreeNode {
            name: name.to_string(),
            path: path.to_string(),
            is_dir: true,
            file_type: FileKind::Other,
            size: None,
            modified: None,
            children,
            is_browser_supported: false,
        }
    }

    fn file(name: &str, path: &str, renderable: bool) -> TreeNode {
        TreeNode {
            name: name.to_string(),
            path: path.to_string(),
            is_dir: false,
            file_type: FileKind::Other,
            size: Some(1),
            modified: None,
            children: None,
            is_browser_supported: renderable,
        }
    }

    fn grid(model: ViewModel) -> GridView {
        match model {
            ViewModel::Grid(grid) => grid,
            ViewModel::NothingToShow => panic!("expected a grid"),
        }
    }

    #[test]
    fn test_missing_or_file_node_shows_nothing() {
        assert_eq!(project(None, "gone", ""), ViewModel::NothingToShow);
        let f = file("a.txt", "a.txt", false);
        assert_eq!(project(Some(&f), "a.txt", ""), ViewModel::NothingToShow);
    }

    #[test]
    fn test_directory_without_children_is_empty_grid() {
        let d = dir("d", "d", None);
        let g = grid(project(Some(&d), "d", ""));
        assert!(g.entries.is_empty());
        assert_eq!(g.back, Some(String::new()));
    }

    #[test]
    fn test_back_targets() {
        let d = dir("c", "a/b/c", Some(vec![]));
        assert_eq!(grid(project(Some(&d), "a/b/c", "")).back, Some("a/b".into()));

        let d = dir("a", "a", Some(vec![]));
        assert_eq!(grid(project(Some(&d), "a", "")).back, Some("".into()));

        let d = dir("root", "", Some(vec![]));
        assert_eq!(grid(project(Some(&d), "", "")).back, None);
    }

    #[test]
    fn test_filter_is_case_and_diacritic_insensitive() {
        let d = dir(
            "",
            "",
            Some(vec![
                file("Café.txt", "Café.txt", false),
                file("notes.md", "notes.md", false),
            ]),
        );
        let g = grid(project(Some(&d), "", &normalize("cafe")));
        assert_eq!(g.entries.len(), 1);
        assert_eq!(g.entries[0].name, "Café.txt");
    }

    #[test]
    fn test_filter_is_substring_not_prefix() {
        let d = dir("", "", Some(vec![file("my notes.md", "my notes.md", false)]));
        let g = grid(project(Some(&d), "", &normalize("notes")));
        assert_eq!(g.entries.len(), 1);
    }

    #[test]
    fn test_empty_filter_keeps_server_order() {
        let d = dir(
            "",
            "",
            Some(vec![
                file("zz.txt", "zz.txt", false),
                file("aa.txt", "aa.txt", false),
            ]),
        );
        let g = grid(project(Some(&d), "", ""));
        let names: Vec<_> = g.entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["zz.txt", "aa.txt"]);
    }

    #[test]
    fn test_action_sets() {
        let d = dir(
            "",
            "",
            Some(vec![
                dir("sub", "sub", Some(vec![])),
                file("plain.bin", "plain.bin", false),
                file("page.html", "page.html", true),
            ]),
        );
        let g = grid(project(Some(&d), "", ""));

        assert_eq!(g.entries[0].actions, vec![EntryAction::OpenDirectory]);
        assert_eq!(
            g.entries[1].actions,
            vec![
                EntryAction::Download,
                EntryAction::Replace,
                EntryAction::Delete
            ]
        );
        assert_eq!(
            g.entries[2].actions,
            vec![
                EntryAction::OpenInTab,
                EntryAction::Download,
                EntryAction::Replace,
                EntryAction::Delete
            ]
        );
    }

    #[test]
    fn test_parent_of() {
        assert_eq!(parent_of("a/b/c"), "a/b");
        assert_eq!(parent_of("a"), "");
        assert_eq!(parent_of(""), "");
    }
}
