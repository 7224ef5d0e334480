//! Dependency tree model

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One token of a dependency-parsed sentence
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DependencyNode {
    /// 1-based position in the sentence
    pub id: usize,
    /// Surface form
    pub word: String,
    /// Lemma, if the corpus provides one
    pub lemma: Option<String>,
    /// Part-of-speech tag
    pub pos: String,
    /// 0-based index of the head node, `None` for a root
    pub head: Option<usize>,
    /// Dependency relation to the head
    pub relation: String,
}

/// A parsed sentence as an ordered list of nodes linked by head indices
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DependencyTree {
    nodes: Vec<DependencyNode>,
}

impl DependencyTree {
    /// Build a tree from nodes in sentence order
    pub fn new(nodes: Vec<DependencyNode>) -> Self {
        Self { nodes }
    }

    /// Number of tokens
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the sentence has no tokens
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All nodes in sentence order
    pub fn nodes(&self) -> &[DependencyNode] {
        &self.nodes
    }

    /// Node at 0-based `index`
    pub fn node(&self, index: usize) -> Option<&DependencyNode> {
        self.nodes.get(index)
    }

    /// Nodes without a head
    pub fn roots(&self) -> impl Iterator<Item = &DependencyNode> {
        self.nodes.iter().filter(|node| node.head.is_none())
    }

    /// Head of the node at `index`
    pub fn head_of(&self, index: usize) -> Option<&DependencyNode> {
        self.nodes
            .get(index)
            .and_then(|node| node.head)
            .and_then(|head| self.nodes.get(head))
    }

    /// Dependents of the node at `index`, in sentence order
    pub fn children(&self, index: usize) -> impl Iterator<Item = &DependencyNode> {
        self.nodes
            .iter()
            .filter(move |node| node.head == Some(index))
    }

    /// Surface forms in sentence order
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().map(|node| node.word.as_str())
    }

    /// Consume the tree and return its nodes
    pub fn into_nodes(self) -> Vec<DependencyNode> {
        self.nodes
    }
}

/// Renders the tree in CoNLL-X column order, one token per line
impl fmt::Display for DependencyTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for node in &self.nodes {
            let head = node.head.map_or(0, |h| h + 1);
            writeln!(
                f,
                "{}\t{}\t{}\t{}\t{}\t{}",
                node.id,
                node.word,
                node.lemma.as_deref().unwrap_or("_"),
                node.pos,
                head,
                node.relation
            )?;
        }
        Ok(())
    }
}
