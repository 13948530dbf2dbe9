use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use super::graph::Graph;
use super::parse::parse_graph;

pub fn load_graph(path: &Path) -> Result<Graph> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read similarity graph {}", path.display()))?;

    let graph =
        parse_graph(&raw).with_context(|| format!("failed to parse {}", path.display()))?;

    log::info!(
        "loaded {} submissions and {} scored pairs from {}",
        graph.node_count(),
        graph.link_count(),
        path.display()
    );

    Ok(graph)
}
