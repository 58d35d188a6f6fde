use itertools::Itertools;
use std::fmt::{Display, Formatter};

/// Position of a node: the index at every level, from the page root down.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodePath(Vec<usize>);

impl NodePath {
    pub fn root() -> Self {
        Self::default()
    }

    pub fn child(&self, index: usize) -> Self {
        let mut indices = Vec::with_capacity(self.0.len() + 1);
        indices.extend_from_slice(&self.0);
        indices.push(index);
        Self(indices)
    }

    pub fn depth(&self) -> usize {
        self.0.len()
    }

    pub fn indices(&self) -> &[usize] {
        &self.0
    }
}

impl From<Vec<usize>> for NodePath {
    fn from(indices: Vec<usize>) -> Self {
        Self(indices)
    }
}

impl Display for NodePath {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.iter().join("."))
    }
}

/// Identity of a rendered node, derived from its tag and position only.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NodeKey {
    tag: String,
    path: NodePath,
}

impl NodeKey {
    pub fn new(tag: impl Into<String>, path: NodePath) -> Self {
        Self {
            tag: tag.into(),
            path,
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn path(&self) -> &NodePath {
        &self.path
    }
}

impl Display for NodeKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}@{}", self.tag, self.path)
    }
}
