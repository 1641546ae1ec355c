//! Bipartite graph construction from the full record set

use super::node::{GraphEdge, GraphNode};
use crate::record::Record;
use crate::tags::parse_tags;
use serde::Serialize;
use std::collections::BTreeSet;

/// The journalist-to-subject graph.
///
/// A rendering input, not a consistency-checked structure: no
/// connectivity or acyclicity invariant is enforced. Nodes and edges
/// are held in deterministic (lexicographic) order so renders and
/// tests are stable. Serializes to JSON for visualization front ends.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SubjectGraph {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

impl SubjectGraph {
    /// Build the graph from a record set.
    ///
    /// Every record contributes one journalist node (keyed by name) and
    /// one undirected edge per parsed subject tag. Subject nodes are
    /// keyed by normalized tag, so the same tag under different records
    /// yields one node with multiple incident edges. Duplicate
    /// (journalist, subject) pairs collapse to a single edge.
    pub fn build(records: &[Record]) -> Self {
        let mut journalists = BTreeSet::new();
        let mut subjects = BTreeSet::new();
        let mut edges = BTreeSet::new();

        for record in records {
            journalists.insert(record.name.clone());
            for tag in parse_tags(&record.subjects) {
                edges.insert(GraphEdge {
                    journalist: record.name.clone(),
                    subject: tag.clone(),
                });
                subjects.insert(tag);
            }
        }

        let nodes = journalists
            .into_iter()
            .map(GraphNode::Journalist)
            .chain(subjects.into_iter().map(GraphNode::Subject))
            .collect();

        Self {
            nodes,
            edges: edges.into_iter().collect(),
        }
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn journalist_count(&self) -> usize {
        self.nodes
            .iter()
            .filter(|n| matches!(n, GraphNode::Journalist(_)))
            .count()
    }

    pub fn subject_count(&self) -> usize {
        self.nodes
            .iter()
            .filter(|n| matches!(n, GraphNode::Subject(_)))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::RecordId;

    fn record(id: i64, name: &str, subjects: &str) -> Record {
        Record {
            id: RecordId::new(id),
            name: name.to_string(),
            category: None,
            subjects: subjects.to_string(),
            platforms: None,
            analysis: None,
        }
    }

    #[test]
    fn two_records_sharing_a_tag_share_one_subject_node() {
        let records = vec![record(1, "A", "X"), record(2, "B", "X, Y")];
        let graph = SubjectGraph::build(&records);

        assert_eq!(graph.node_count(), 4); // A, B, X, Y
        assert_eq!(graph.journalist_count(), 2);
        assert_eq!(graph.subject_count(), 2);

        assert_eq!(graph.edge_count(), 3);
        let expected: BTreeSet<GraphEdge> = [("A", "X"), ("B", "X"), ("B", "Y")]
            .iter()
            .map(|(j, s)| GraphEdge {
                journalist: j.to_string(),
                subject: s.to_string(),
            })
            .collect();
        let actual: BTreeSet<GraphEdge> = graph.edges.iter().cloned().collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn duplicate_tags_within_a_record_produce_one_edge() {
        let records = vec![record(1, "A", "X, X., x")];
        let graph = SubjectGraph::build(&records);

        // "X" and "X." normalize to the same node; "x" stays distinct.
        assert_eq!(graph.subject_count(), 2);
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn records_with_identical_names_merge_into_one_node() {
        let records = vec![record(1, "A", "X"), record(2, "A", "Y")];
        let graph = SubjectGraph::build(&records);

        assert_eq!(graph.journalist_count(), 1);
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn record_with_no_parseable_tags_still_gets_a_node() {
        let records = vec![record(1, "A", " , .")];
        let graph = SubjectGraph::build(&records);

        assert_eq!(graph.node_count(), 1);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn empty_record_set_builds_empty_graph() {
        let graph = SubjectGraph::build(&[]);
        assert_eq!(graph.node_count(), 0);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn graph_serializes_to_tagged_json() {
        let records = vec![record(1, "Anna", "Miljö")];
        let graph = SubjectGraph::build(&records);

        let json = serde_json::to_value(&graph).unwrap();
        assert_eq!(json["nodes"][0]["kind"], "journalist");
        assert_eq!(json["nodes"][0]["label"], "Anna");
        assert_eq!(json["nodes"][1]["kind"], "subject");
        assert_eq!(json["nodes"][1]["label"], "Miljö");
        assert_eq!(json["edges"][0]["journalist"], "Anna");
        assert_eq!(json["edges"][0]["subject"], "Miljö");
    }
}
