use std::cmp::Ordering;

use crate::similarity::{Graph, ScoreScale};

use super::color::Color;
use super::pipeline::Decisions;

/// One scored pair in the results table.
#[derive(Clone, Debug, PartialEq)]
pub struct ResultRow {
    pub rank: usize,
    pub source: String,
    pub target: String,
    /// Similarity on the display scale.
    pub score: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowEndpoint {
    Source,
    Target,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RowState {
    pub visible: bool,
    pub highlighted: bool,
    pub border: Color,
    pub bold: Option<RowEndpoint>,
}

/// Key shared by every table cell that belongs to `id`.
pub fn index_class(id: &str) -> String {
    format!("{id}_index")
}

/// All pairs, most similar first. Built once per dataset.
pub fn result_rows(graph: &Graph, scale: ScoreScale) -> Vec<ResultRow> {
    let mut rows = graph
        .links()
        .iter()
        .map(|link| ResultRow {
            rank: 0,
            source: link.source.clone(),
            target: link.target.clone(),
            score: scale.similarity(link.value),
        })
        .collect::<Vec<_>>();

    rows.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.source.cmp(&b.source))
            .then_with(|| a.target.cmp(&b.target))
    });

    for (index, row) in rows.iter_mut().enumerate() {
        row.rank = index + 1;
    }

    rows
}

/// How one row should look for the given threshold and decisions.
pub fn row_state(row: &ResultRow, threshold: f64, decisions: &Decisions) -> RowState {
    let visible = row.score >= threshold
        && decisions.visible.contains(&row.source)
        && decisions.visible.contains(&row.target);

    let highlighted =
        decisions.highlighted.contains(&row.source) || decisions.highlighted.contains(&row.target);

    let bold = match decisions.selected.as_deref() {
        Some(id) if id == row.source => Some(RowEndpoint::Source),
        Some(id) if id == row.target => Some(RowEndpoint::Target),
        _ => None,
    };

    RowState {
        visible,
        highlighted,
        border: decisions.color_of(&row.source),
        bold,
    }
}
