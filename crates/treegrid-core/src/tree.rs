//! The snapshot data model.
//!
//! A snapshot is one complete, point-in-time copy of the server's file
//! hierarchy. It is replaced wholesale on every refresh; there is no
//! partial merge because the server offers no diff protocol.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// Coarse file classification. Drives icon selection only.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FileKind {
    Video,
    Audio,
    Image,
    #[default]
    Other,
}

/// Modification time as the server reports it: either epoch milliseconds
/// or an ISO-8601 string. The client displays it and never compares it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Timestamp {
    Millis(u64),
    Text(String),
}

/// One file-system entry in a snapshot.
///
/// `path` is the slash-delimited identity key, unique snapshot-wide.
/// `children` is present only for directories; a directory may still
/// arrive without it, which callers treat as unknown/empty.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TreeNode {
    pub name: String,
    pub path: String,
    pub is_dir: bool,
    #[serde(default)]
    pub file_type: FileKind,
    #[serde(default)]
    pub size: Option<u64>,
    #[serde(default)]
    pub modified: Option<Timestamp>,
    #[serde(default)]
    pub children: Option<Vec<TreeNode>>,
    #[serde(default)]
    pub is_browser_supported: bool,
}

impl TreeNode {
    /// Parse a snapshot payload and validate the tree invariants.
    ///
    /// The server serves `null` until its first scan completes; that is a
    /// [`ParseError::NullSnapshot`], skipped like any failed refresh.
    pub fn from_json(payload: &str) -> Result<Self, ParseError> {
        let root: Option<TreeNode> =
            serde_json::from_str(payload).map_err(|e| ParseError::Json(e.to_string()))?;
        let root = root.ok_or(ParseError::NullSnapshot)?;
        root.validate()?;
        Ok(root)
    }

    /// Check the invariants a well-formed snapshot must satisfy: the root
    /// is a directory with an empty path, only directories carry children,
    /// and no path occurs twice.
    ///
    /// Duplicate-path detection doubles as cycle detection: the decoded
    /// tree is owned data and cannot be structurally cyclic, so a payload
    /// that encodes a cycle can only do so by re-using an ancestor's path.
    pub fn validate(&self) -> Result<(), ParseError> {
        if !self.path.is_empty() || !self.is_dir {
            return Err(ParseError::BadRoot {
                path: self.path.clone(),
                is_dir: self.is_dir,
            });
        }

        let mut seen = HashSet::new();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            if !seen.insert(node.path.as_str()) {
                return Err(ParseError::DuplicatePath(node.path.clone()));
            }
            if let Some(children) = &node.children {
                if !node.is_dir {
                    return Err(ParseError::ChildrenOnFile(node.path.clone()));
                }
                stack.extend(children.iter());
            }
        }
        Ok(())
    }

    /// Find the node with exactly this path, if any.
    ///
    /// Exact string match over a depth-first traversal; no trailing-slash
    /// or case normalization. Directories and files share the same lookup.
    pub fn resolve(&self, path: &str) -> Option<&TreeNode> {
        if self.path == path {
            return Some(self);
        }
        self.children
            .as_deref()
            .unwrap_or_default()
            .iter()
            .find_map(|child| child.resolve(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot() -> &'static str {
        r#"{
            "name": "library",
            "path": "",
            "is_dir": true,
            "file_type": "Other",
            "children": [
                {
                    "name": "docs",
                    "path": "docs",
                    "is_dir": true,
                    "children": [
                        {
                            "name": "a.txt",
                            "path": "docs/a.txt",
                            "is_dir": false,
                            "size": 42,
                            "modified": "2025-03-01T10:00:00+00:00",
                            "is_browser_supported": true
                        }
                    ]
                },
                {
                    "name": "song.mp3",
                    "path": "song.mp3",
                    "is_dir": false,
                    "file_type": "Audio",
                    "size": 1024,
                    "modified": 1740000000000
                }
            ]
        }"#
    }

    #[test]
    fn test_parse_valid_snapshot() {
        let root = TreeNode::from_json(snapshot()).unwrap();
        assert_eq!(root.path, "");
        assert!(root.is_dir);

        let song = root.resolve("song.mp3").unwrap();
        assert_eq!(song.file_type, FileKind::Audio);
        assert_eq!(song.modified, Some(Timestamp::Millis(1740000000000)));

        let doc = root.resolve("docs/a.txt").unwrap();
        assert!(doc.is_browser_supported);
        assert_eq!(
            doc.modified,
            Some(Timestamp::Text("2025-03-01T10:00:00+00:00".to_string()))
        );
        // Absent classification defaults to Other.
        assert_eq!(doc.file_type, FileKind::Other);
    }

    #[test]
    fn test_resolution_exactness() {
        let root = TreeNode::from_json(snapshot()).unwrap();
        let node = root.resolve("docs/a.txt").unwrap();
        assert_eq!(node.name, "a.txt");
        assert!(root.resolve("docs/x.txt").is_none());
        assert!(root.resolve("docs/").is_none());
        assert!(root.resolve("DOCS").is_none());
        assert_eq!(root.resolve("").unwrap().path, "");
    }

    #[test]
    fn test_null_snapshot_rejected() {
        assert_eq!(TreeNode::from_json("null"), Err(ParseError::NullSnapshot));
    }

    #[test]
    fn test_garbage_rejected() {
        assert!(matches!(
            TreeNode::from_json("not json"),
            Err(ParseError::Json(_))
        ));
        // Missing required fields is a parse error, not a default.
        assert!(matches!(
            TreeNode::from_json(r#"{"name": "x"}"#),
            Err(ParseError::Json(_))
        ));
    }

    #[test]
    fn test_bad_root_rejected() {
        let err = TreeNode::from_json(r#"{"name": "f", "path": "f", "is_dir": true}"#);
        assert!(matches!(err, Err(ParseError::BadRoot { .. })));

        let err = TreeNode::from_json(r#"{"name": "f", "path": "", "is_dir": false}"#);
        assert!(matches!(err, Err(ParseError::BadRoot { .. })));
    }

    #[test]
    fn test_duplicate_path_rejected() {
        let payload = r#"{
            "name": "r", "path": "", "is_dir": true,
            "children": [
                {"name": "a", "path": "a", "is_dir": false},
                {"name": "a", "path": "a", "is_dir": false}
            ]
        }"#;
        assert_eq!(
            TreeNode::from_json(payload),
            Err(ParseError::DuplicatePath("a".to_string()))
        );
    }

    #[test]
    fn test_path_cycle_rejected() {
        // A "cycle" in an owned tree: a child claiming its ancestor's path.
        let payload = r#"{
            "name": "r", "path": "", "is_dir": true,
            "children": [
                {"name": "a", "path": "a", "is_dir": true,
                 "children": [{"name": "a", "path": "a", "is_dir": true}]}
            ]
        }"#;
        assert_eq!(
            TreeNode::from_json(payload),
            Err(ParseError::DuplicatePath("a".to_string()))
        );
    }

    #[test]
    fn test_children_on_file_rejected() {
        let payload = r#"{
            "name": "r", "path": "", "is_dir": true,
            "children": [
                {"name": "f", "path": "f", "is_dir": false, "children": []}
            ]
        }"#;
        assert_eq!(
            TreeNode::from_json(payload),
            Err(ParseError::ChildrenOnFile("f".to_string()))
        );
    }

    #[test]
    fn test_directory_without_children_tolerated() {
        let payload = r#"{
            "name": "r", "path": "", "is_dir": true,
            "children": [{"name": "d", "path": "d", "is_dir": true}]
        }"#;
        let root = TreeNode::from_json(payload).unwrap();
        let dir = root.resolve("d").unwrap();
        assert!(dir.is_dir);
        assert!(dir.children.is_none());
    }
}
