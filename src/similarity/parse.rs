use anyhow::{Context, Result};
use serde::Deserialize;

use super::graph::{Graph, Link, Node};

#[derive(Clone, Debug, Deserialize)]
struct RawNode {
    id: String,
}

#[derive(Clone, Debug, Deserialize)]
struct RawLink {
    source: String,
    target: String,
    value: f64,
}

#[derive(Clone, Debug, Deserialize)]
struct RawGraph {
    #[serde(default)]
    nodes: Vec<RawNode>,
    #[serde(default)]
    links: Vec<RawLink>,
}

pub fn parse_graph(raw: &str) -> Result<Graph> {
    let parsed: RawGraph = serde_json::from_str(raw).context("invalid similarity graph JSON")?;

    let nodes = parsed
        .nodes
        .into_iter()
        .map(|node| Node { id: node.id })
        .collect::<Vec<_>>();
    let links = parsed
        .links
        .into_iter()
        .map(|link| Link {
            source: link.source,
            target: link.target,
            value: link.value,
        })
        .collect::<Vec<_>>();

    Graph::new(nodes, links).context("malformed similarity graph")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::similarity::GraphError;

    #[test]
    fn parses_nodes_and_links() {
        let graph = parse_graph(
            r#"{
                "nodes": [{"id": "a", "extra": 1}, {"id": "b"}],
                "links": [{"source": "a", "target": "b", "value": 2.5}]
            }"#,
        )
        .unwrap();

        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.links()[0].value, 2.5);
    }

    #[test]
    fn dangling_link_rejects_dataset() {
        let error = parse_graph(
            r#"{"nodes": [{"id": "a"}], "links": [{"source": "a", "target": "zz", "value": 1}]}"#,
        )
        .unwrap_err();

        assert!(matches!(
            error.downcast_ref::<GraphError>(),
            Some(GraphError::DanglingLink { missing, .. }) if missing == "zz"
        ));
    }

    #[test]
    fn rejects_non_json() {
        assert!(parse_graph("not json").is_err());
    }
}
