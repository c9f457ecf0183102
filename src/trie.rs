use std::collections::BTreeMap;
use std::path::{Component, Path};
use tracing::trace;

/// A directory or file in the stats tree. Children stay sorted by name.
#[derive(Debug, Default)]
pub struct PathNode {
    children: BTreeMap<String, PathNode>,
    tokens: Option<usize>,
}

impl PathNode {
    pub fn children(&self) -> impl Iterator<Item = (&str, &PathNode)> {
        self.children.iter().map(|(name, node)| (name.as_str(), node))
    }

    /// Token count recorded for this exact path, if it is a selected file.
    pub fn tokens(&self) -> Option<usize> {
        self.tokens
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    pub fn total_tokens(&self) -> usize {
        self.tokens.unwrap_or(0) + self.children.values().map(PathNode::total_tokens).sum::<usize>()
    }

    /// Number of selected files at or below this node.
    pub fn file_count(&self) -> usize {
        usize::from(self.tokens.is_some())
            + self.children.values().map(PathNode::file_count).sum::<usize>()
    }
}

/// Per-file token counts arranged by directory.
#[derive(Debug, Default)]
pub struct PathTrie {
    root: PathNode,
}

impl PathTrie {
    pub fn new() -> Self {
        PathTrie::default()
    }

    /// Records `tokens` for `path`. `.` and root components are skipped, and a
    /// repeated path keeps the latest count.
    pub fn insert(&mut self, path: &Path, tokens: usize) {
        trace!("Recording {} tokens for {}", tokens, path.display());
        let node = path
            .components()
            .filter_map(|component| match component {
                Component::Normal(name) => Some(name.to_string_lossy().into_owned()),
                Component::ParentDir => Some("..".to_owned()),
                _ => None,
            })
            .fold(&mut self.root, |node, name| {
                node.children.entry(name).or_default()
            });
        node.tokens = Some(tokens);
    }

    pub fn root(&self) -> &PathNode {
        &self.root
    }
}
