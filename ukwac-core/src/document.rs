//! Parsed sentence documents

use crate::tree::DependencyTree;
use std::fmt;
use std::io::Cursor;

/// One dependency-parsed sentence pulled from the corpus
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParsedDocument {
    block: usize,
    tree: DependencyTree,
}

impl ParsedDocument {
    /// Wrap the tree parsed from block `block`
    pub fn new(block: usize, tree: DependencyTree) -> Self {
        Self { block, tree }
    }

    /// 0-based index of the source block
    pub fn block(&self) -> usize {
        self.block
    }

    /// The parsed dependency tree
    pub fn tree(&self) -> &DependencyTree {
        &self.tree
    }

    /// Sentence text: words joined by single spaces
    pub fn text(&self) -> String {
        self.tree.words().collect::<Vec<_>>().join(" ")
    }

    /// Reader over [`text`](Self::text)
    pub fn reader(&self) -> Cursor<String> {
        Cursor::new(self.text())
    }

    /// Consume the document and return its tree
    pub fn into_tree(self) -> DependencyTree {
        self.tree
    }
}

/// Pretty-printed tree, one token per line
impl fmt::Display for ParsedDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.tree, f)
    }
}
