// CLASSIFICATION: COMMUNITY
// Filename: mod.rs v0.2
// Author: Lukas Bower
// Date Modified: 2026-10-03

//! Read-only portfolio filesystem.
//!
//! The tree is a nested name to (subtree | leaf id) mapping loaded from
//! `filesystem.json`. Leaf ids key into the other content files
//! (`cert_aws_cloud`, `project_airbnb`, ...). Nothing here mutates the tree;
//! only [`FsPath`] moves.

use std::fmt;

use serde::Deserialize;

use crate::content::OrderedMap;

/// Name of the segment every session starts in.
pub const HOME: &str = "home";

/// A node of the tree.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum FsNode {
    /// Leaf carrying a content identifier.
    File(String),
    Dir(OrderedMap<FsNode>),
}

impl FsNode {
    pub fn is_dir(&self) -> bool {
        matches!(self, FsNode::Dir(_))
    }

    pub fn leaf_id(&self) -> Option<&str> {
        match self {
            FsNode::File(id) => Some(id),
            FsNode::Dir(_) => None,
        }
    }
}

/// The whole tree, rooted at an unnamed directory.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct FsTree {
    root: OrderedMap<FsNode>,
}

impl FsTree {
    pub fn new(root: OrderedMap<FsNode>) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &OrderedMap<FsNode> {
        &self.root
    }

    /// Directory listing at `path`, or `None` when a segment is missing or a file.
    pub fn dir(&self, path: &FsPath) -> Option<&OrderedMap<FsNode>> {
        let mut dir = &self.root;
        for segment in path.segments() {
            match dir.get(segment) {
                Some(FsNode::Dir(children)) => dir = children,
                _ => return None,
            }
        }
        Some(dir)
    }

    /// Entry `name` inside the directory at `path`.
    pub fn entry(&self, path: &FsPath, name: &str) -> Option<&FsNode> {
        self.dir(path).and_then(|d| d.get(name))
    }

    /// Child names at `path` in document order; empty when unresolved.
    pub fn list(&self, path: &FsPath) -> Vec<&str> {
        self.dir(path).map(|d| d.keys().collect()).unwrap_or_default()
    }
}

/// Outcome of [`FsPath::change_dir`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeDir {
    Moved,
    /// `..` at the root segment.
    AtRoot,
    NotADirectory,
    NotFound,
}

/// Current position in the tree as an ordered list of segments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FsPath {
    segments: Vec<String>,
}

impl Default for FsPath {
    fn default() -> Self {
        Self::home()
    }
}

impl FsPath {
    pub fn home() -> Self {
        Self {
            segments: vec![HOME.to_string()],
        }
    }

    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            segments: segments.into_iter().map(Into::into).collect(),
        }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// True if any segment equals `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.segments.iter().any(|s| s == name)
    }

    /// Apply `cd target` against `tree`. The first segment is never popped.
    pub fn change_dir(&mut self, tree: &FsTree, target: &str) -> ChangeDir {
        if target == ".." {
            if self.segments.len() > 1 {
                self.segments.pop();
                return ChangeDir::Moved;
            }
            return ChangeDir::AtRoot;
        }
        match tree.entry(self, target) {
            Some(FsNode::Dir(_)) => {
                self.segments.push(target.to_string());
                ChangeDir::Moved
            }
            Some(FsNode::File(_)) => ChangeDir::NotADirectory,
            None => ChangeDir::NotFound,
        }
    }
}

impl fmt::Display for FsPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            write!(f, "/{}", segment)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree() -> FsTree {
        serde_json::from_str(
            r#"{"home": {"b.txt": "leaf_b", "docs": {"cv.pdf": "cv"}, "empty": {}}}"#,
        )
        .unwrap()
    }

    #[test]
    fn lists_in_document_order() {
        let t = tree();
        assert_eq!(t.list(&FsPath::home()), ["b.txt", "docs", "empty"]);
        assert!(t.list(&FsPath::from_segments(["home", "empty"])).is_empty());
    }

    #[test]
    fn change_dir_rules() {
        let t = tree();
        let mut p = FsPath::home();
        assert_eq!(p.change_dir(&t, ".."), ChangeDir::AtRoot);
        assert_eq!(p.change_dir(&t, "b.txt"), ChangeDir::NotADirectory);
        assert_eq!(p.change_dir(&t, "nope"), ChangeDir::NotFound);
        assert_eq!(p.change_dir(&t, "docs"), ChangeDir::Moved);
        assert_eq!(p.to_string(), "/home/docs");
        assert_eq!(t.entry(&p, "cv.pdf").and_then(FsNode::leaf_id), Some("cv"));
        assert_eq!(p.change_dir(&t, ".."), ChangeDir::Moved);
        assert_eq!(p, FsPath::home());
    }
}
