//! Node and edge types for the subject graph

use serde::Serialize;

/// A node in the bipartite journalist-to-subject graph.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(tag = "kind", content = "label")]
pub enum GraphNode {
    /// One journalist, keyed by display name. Distinct records sharing a
    /// name merge into a single visual node; a documented limitation.
    #[serde(rename = "journalist")]
    Journalist(String),

    /// One normalized subject tag, shared by every record that carries it.
    #[serde(rename = "subject")]
    Subject(String),
}

impl GraphNode {
    /// The display label regardless of node kind.
    pub fn label(&self) -> &str {
        match self {
            GraphNode::Journalist(name) => name,
            GraphNode::Subject(tag) => tag,
        }
    }
}

/// An undirected edge between a journalist node and a subject node.
///
/// Edges have set semantics: at most one per (journalist, subject) pair,
/// no weights.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct GraphEdge {
    pub journalist: String,
    pub subject: String,
}
