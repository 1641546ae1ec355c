//! Journalist-to-subject graph for visualization

mod builder;
mod node;

pub use builder::SubjectGraph;
pub use node::{GraphEdge, GraphNode};
