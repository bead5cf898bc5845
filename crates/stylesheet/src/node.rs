use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::FormatConfig;

/// A single `property: value` pair.
///
/// `value` never includes a trailing `!important`; that lives in
/// `important` so callers can compare values exactly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Declaration {
    pub property: String,
    pub value: String,
    pub important: bool,
}

impl Declaration {
    pub fn new(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            value: value.into(),
            important: false,
        }
    }
}

/// One node of the stylesheet tree.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum Node {
    /// `selector { ... }`
    Rule { selector: String, nodes: Vec<Node> },
    /// `@name params { ... }` or `@name params;` when `nodes` is `None`.
    AtRule {
        name: String,
        params: String,
        nodes: Option<Vec<Node>>,
    },
    Declaration(Declaration),
    /// Comment body without the `/*` `*/` delimiters.
    Comment { text: String },
}

impl Node {
    pub(crate) fn is_block(&self) -> bool {
        matches!(
            self,
            Node::Rule { .. } | Node::AtRule { nodes: Some(_), .. }
        )
    }
}

/// A parsed stylesheet: an ordered list of top-level nodes.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Stylesheet {
    pub nodes: Vec<Node>,
}

impl Stylesheet {
    pub fn new(nodes: Vec<Node>) -> Self {
        Self { nodes }
    }

    /// Visit every declaration in document order, descending into rules and
    /// block at-rules.
    pub fn walk_decls<F>(&self, mut f: F)
    where
        F: FnMut(&Declaration),
    {
        walk(&self.nodes, &mut f);
    }

    /// Mutable counterpart of [`Stylesheet::walk_decls`]. Each declaration is
    /// visited exactly once.
    pub fn walk_decls_mut<F>(&mut self, mut f: F)
    where
        F: FnMut(&mut Declaration),
    {
        walk_mut(&mut self.nodes, &mut f);
    }

    /// Number of declarations anywhere in the tree.
    pub fn declaration_count(&self) -> usize {
        let mut count = 0;
        self.walk_decls(|_| count += 1);
        count
    }

    /// Print the tree using the layout rules of `cfg`.
    pub fn to_css(&self, cfg: &FormatConfig) -> String {
        crate::serialize::write_stylesheet(self, cfg)
    }
}

impl fmt::Display for Stylesheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css(&FormatConfig::default()))
    }
}

fn walk<F: FnMut(&Declaration)>(nodes: &[Node], f: &mut F) {
    for node in nodes {
        match node {
            Node::Declaration(decl) => f(decl),
            Node::Rule { nodes, .. } => walk(nodes, f),
            Node::AtRule {
                nodes: Some(nodes), ..
            } => walk(nodes, f),
            Node::AtRule { nodes: None, .. } | Node::Comment { .. } => {}
        }
    }
}

fn walk_mut<F: FnMut(&mut Declaration)>(nodes: &mut [Node], f: &mut F) {
    for node in nodes {
        match node {
            Node::Declaration(decl) => f(decl),
            Node::Rule { nodes, .. } => walk_mut(nodes, f),
            Node::AtRule {
                nodes: Some(nodes), ..
            } => walk_mut(nodes, f),
            Node::AtRule { nodes: None, .. } | Node::Comment { .. } => {}
        }
    }
}
