use std::collections::{HashMap, HashSet};

use crate::similarity::{Graph, ScoreScale};

use super::color::{Color, Palette};
use super::filter::{FilteredView, filter};
use super::groups::{Grouping, compute_groups};
use super::selection::{PointerEvent, SelectionController};

/// Everything derived from one threshold. Each field is produced from the
/// fields above it in a single pass; nothing is patched incrementally.
#[derive(Clone, Debug)]
pub struct PipelineState {
    pub threshold: f64,
    pub view: FilteredView,
    pub grouping: Grouping,
    pub palette: Palette,
    pub selection: SelectionController,
}

impl PipelineState {
    /// Runs filter, cluster, color and selection reapply in that order.
    pub fn compute(
        graph: &Graph,
        scale: ScoreScale,
        threshold: f64,
        mut selection: SelectionController,
    ) -> Self {
        let view = filter(graph, scale, threshold);
        let grouping = compute_groups(&view);
        let palette = Palette::assign(grouping.group_count());
        selection.drop_stale(&grouping);

        log::debug!(
            "threshold {threshold}: {} nodes, {} links, {} groups",
            view.nodes.len(),
            view.links.len(),
            grouping.group_count()
        );

        Self {
            threshold,
            view,
            grouping,
            palette,
            selection,
        }
    }

    /// Render decisions for the current selection.
    pub fn decisions(&self) -> Decisions {
        let selected_group = self
            .selection
            .selected()
            .and_then(|id| self.grouping.group_of(id));
        let palette = match selected_group {
            Some(group) => self.palette.focused(group),
            None => self.palette,
        };

        let highlighted = self
            .selection
            .focus()
            .and_then(|id| self.grouping.co_grouped(id))
            .map(|members| members.iter().cloned().collect::<HashSet<_>>())
            .unwrap_or_default();

        let visible = match selected_group {
            Some(group) => self.grouping.members(group).iter().cloned().collect(),
            None => self.view.nodes.iter().map(|node| node.id.clone()).collect(),
        };

        let colors = self
            .grouping
            .groups()
            .flat_map(|(group, members)| {
                let color = palette.color(group);
                members.iter().map(move |id| (id.clone(), color))
            })
            .collect();

        Decisions {
            visible,
            highlighted,
            focus: self.selection.focus().map(str::to_owned),
            selected: self.selection.selected().map(str::to_owned),
            colors,
        }
    }
}

/// What the renderer and the results table should show right now.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Decisions {
    /// Node ids that are drawn and whose table rows may be shown.
    pub visible: HashSet<String>,
    /// Nodes co-grouped with the hovered, dragged or selected node.
    pub highlighted: HashSet<String>,
    pub focus: Option<String>,
    pub selected: Option<String>,
    /// Fill color per node in the current view.
    pub colors: HashMap<String, Color>,
}

impl Decisions {
    pub fn color_of(&self, id: &str) -> Color {
        self.colors.get(id).copied().unwrap_or(Color::NEUTRAL)
    }
}

/// Owns the immutable dataset and the single current pipeline state.
#[derive(Clone, Debug)]
pub struct GraphModel {
    graph: Graph,
    scale: ScoreScale,
    state: PipelineState,
}

impl GraphModel {
    pub fn new(graph: Graph, scale: ScoreScale, threshold: f64) -> Self {
        let state =
            PipelineState::compute(&graph, scale, threshold, SelectionController::default());
        Self {
            graph,
            scale,
            state,
        }
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn scale(&self) -> ScoreScale {
        self.scale
    }

    pub fn state(&self) -> &PipelineState {
        &self.state
    }

    pub fn threshold(&self) -> f64 {
        self.state.threshold
    }

    pub fn threshold_range(&self) -> (f64, f64) {
        self.scale.threshold_range(self.graph.links())
    }

    /// Stores the new threshold and recomputes everything downstream.
    pub fn set_threshold(&mut self, threshold: f64) {
        let selection = std::mem::take(&mut self.state.selection);
        self.state = PipelineState::compute(&self.graph, self.scale, threshold, selection);
    }

    /// Events naming a node outside the current view are ignored.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> bool {
        if let Some(id) = event.node_id()
            && self.state.grouping.group_of(id).is_none()
        {
            return false;
        }

        self.state.selection.handle(event)
    }

    pub fn decisions(&self) -> Decisions {
        self.state.decisions()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cluster::selection::SelectionState;
    use crate::cluster::test_support::{graph, partition};

    fn two_pairs() -> GraphModel {
        GraphModel::new(
            graph(&["A", "B", "C", "D"], &[("A", "B", 2.0), ("C", "D", 9.0)]),
            ScoreScale::default(),
            0.0,
        )
    }

    fn ids(values: &[&str]) -> HashSet<String> {
        values.iter().map(|value| (*value).to_owned()).collect()
    }

    #[test]
    fn selecting_hides_other_groups_and_background_restores() {
        let mut model = two_pairs();
        let full = model.decisions();

        assert!(model.handle_pointer(PointerEvent::Click("A".into())));
        let focused = model.decisions();
        assert_eq!(focused.visible, ids(&["A", "B"]));
        assert_eq!(focused.highlighted, ids(&["A", "B"]));
        assert_eq!(focused.color_of("A"), full.color_of("A"));
        assert_eq!(focused.color_of("C"), Color::NEUTRAL);

        assert!(model.handle_pointer(PointerEvent::ClickBackground));
        let restored = model.decisions();
        assert_eq!(restored.visible, ids(&["A", "B", "C", "D"]));
        assert_eq!(restored, full);
    }

    #[test]
    fn hover_highlights_without_hiding() {
        let mut model = two_pairs();
        model.handle_pointer(PointerEvent::Enter("C".into()));
        let decisions = model.decisions();

        assert_eq!(decisions.highlighted, ids(&["C", "D"]));
        assert_eq!(decisions.visible.len(), 4);
        assert_ne!(decisions.color_of("A"), Color::NEUTRAL);
    }

    #[test]
    fn threshold_change_drops_stale_selection() {
        let mut model = two_pairs();
        model.handle_pointer(PointerEvent::Click("D".into()));

        model.set_threshold(5.0);
        assert_eq!(model.state().selection.state(), &SelectionState::Idle);
        assert_eq!(model.decisions().visible, ids(&["A", "B"]));
    }

    #[test]
    fn threshold_change_keeps_surviving_selection() {
        let mut model = two_pairs();
        model.handle_pointer(PointerEvent::Click("A".into()));

        model.set_threshold(5.0);
        assert_eq!(model.decisions().selected.as_deref(), Some("A"));
        assert_eq!(model.state().palette.group_count(), 1);
    }

    #[test]
    fn events_for_hidden_nodes_are_ignored() {
        let mut model = two_pairs();
        model.set_threshold(5.0);

        assert!(!model.handle_pointer(PointerEvent::Click("C".into())));
        assert!(!model.handle_pointer(PointerEvent::Click("nobody".into())));
    }

    #[test]
    fn empty_result_is_a_valid_state() {
        let mut model = two_pairs();
        model.set_threshold(50.0);
        let decisions = model.decisions();

        assert!(model.state().view.is_empty());
        assert_eq!(model.state().grouping.group_count(), 0);
        assert!(decisions.visible.is_empty());
        assert!(decisions.colors.is_empty());
    }

    #[test]
    fn rerunning_the_pipeline_is_idempotent() {
        let mut model = two_pairs();
        model.handle_pointer(PointerEvent::Click("A".into()));
        model.set_threshold(0.0);
        let first = model.decisions();
        let first_groups = partition(&model.state().grouping);

        model.set_threshold(0.0);
        assert_eq!(model.decisions(), first);
        assert_eq!(partition(&model.state().grouping), first_groups);
    }
}
