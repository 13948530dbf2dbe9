use super::groups::Grouping;

/// Pointer-driven selection state. At most one node is active at a time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SelectionState {
    #[default]
    Idle,
    Hovering(String),
    Dragging(String),
    Selected(String),
}

/// Input events, already resolved to the node under the pointer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PointerEvent {
    Enter(String),
    Leave(String),
    DragStart(String),
    DragEnd,
    Click(String),
    ClickBackground,
}

impl PointerEvent {
    pub fn node_id(&self) -> Option<&str> {
        match self {
            Self::Enter(id) | Self::Leave(id) | Self::DragStart(id) | Self::Click(id) => {
                Some(id)
            }
            Self::DragEnd | Self::ClickBackground => None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionController {
    state: SelectionState,
}

impl SelectionController {
    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    /// The clicked node, if any.
    pub fn selected(&self) -> Option<&str> {
        match &self.state {
            SelectionState::Selected(id) => Some(id),
            _ => None,
        }
    }

    /// The node whose group is highlighted: hovered, dragged or selected.
    /// A drag keeps the highlight of the hover that started it.
    pub fn focus(&self) -> Option<&str> {
        match &self.state {
            SelectionState::Idle => None,
            SelectionState::Hovering(id)
            | SelectionState::Dragging(id)
            | SelectionState::Selected(id) => Some(id),
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, SelectionState::Dragging(_))
    }

    /// Applies one event and reports whether the state changed.
    ///
    /// Clicking the selected node again keeps it selected; only a click on
    /// empty background clears a selection.
    pub fn handle(&mut self, event: PointerEvent) -> bool {
        let next = match (&self.state, event) {
            (SelectionState::Idle | SelectionState::Hovering(_), PointerEvent::Enter(id)) => {
                SelectionState::Hovering(id)
            }
            (SelectionState::Hovering(current), PointerEvent::Leave(id)) if *current == id => {
                SelectionState::Idle
            }
            (SelectionState::Idle | SelectionState::Hovering(_), PointerEvent::DragStart(id)) => {
                SelectionState::Dragging(id)
            }
            (SelectionState::Dragging(_), PointerEvent::DragEnd) => SelectionState::Idle,
            (_, PointerEvent::Click(id)) => SelectionState::Selected(id),
            (SelectionState::Selected(_), PointerEvent::ClickBackground) => SelectionState::Idle,
            _ => return false,
        };

        if next == self.state {
            return false;
        }

        log::debug!("selection {:?} -> {:?}", self.state, next);
        self.state = next;
        true
    }

    /// Falls back to `Idle` when the active node left the current grouping.
    pub fn drop_stale(&mut self, grouping: &Grouping) -> bool {
        let Some(id) = self.focus() else {
            return false;
        };

        if grouping.group_of(id).is_some() {
            return false;
        }

        log::warn!("{id} is no longer visible; clearing selection");
        self.state = SelectionState::Idle;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cluster::filter::filter;
    use crate::cluster::groups::compute_groups;
    use crate::cluster::test_support::graph;
    use crate::similarity::ScoreScale;

    fn enter(id: &str) -> PointerEvent {
        PointerEvent::Enter(id.to_owned())
    }

    fn click(id: &str) -> PointerEvent {
        PointerEvent::Click(id.to_owned())
    }

    #[test]
    fn hover_enter_and_leave() {
        let mut selection = SelectionController::default();

        assert!(selection.handle(enter("A")));
        assert_eq!(selection.state(), &SelectionState::Hovering("A".into()));
        assert!(selection.handle(enter("B")));
        assert!(!selection.handle(PointerEvent::Leave("A".into())));
        assert!(selection.handle(PointerEvent::Leave("B".into())));
        assert_eq!(selection.state(), &SelectionState::Idle);
    }

    #[test]
    fn drag_suppresses_hover_until_it_ends() {
        let mut selection = SelectionController::default();
        selection.handle(enter("A"));
        selection.handle(PointerEvent::DragStart("A".into()));

        assert!(selection.is_dragging());
        assert!(!selection.handle(enter("B")));
        assert!(!selection.handle(PointerEvent::Leave("A".into())));
        assert_eq!(selection.focus(), Some("A"));

        assert!(selection.handle(PointerEvent::DragEnd));
        assert_eq!(selection.state(), &SelectionState::Idle);
        assert_eq!(selection.focus(), None);
    }

    #[test]
    fn clicking_selected_node_again_keeps_it() {
        let mut selection = SelectionController::default();

        assert!(selection.handle(click("A")));
        assert!(!selection.handle(click("A")));
        assert_eq!(selection.selected(), Some("A"));

        assert!(selection.handle(click("B")));
        assert_eq!(selection.selected(), Some("B"));
    }

    #[test]
    fn background_click_clears_only_a_selection() {
        let mut selection = SelectionController::default();
        selection.handle(enter("A"));
        assert!(!selection.handle(PointerEvent::ClickBackground));

        selection.handle(click("A"));
        assert!(selection.handle(PointerEvent::ClickBackground));
        assert_eq!(selection.state(), &SelectionState::Idle);
    }

    #[test]
    fn hover_does_not_replace_selection() {
        let mut selection = SelectionController::default();
        selection.handle(click("A"));

        assert!(!selection.handle(enter("B")));
        assert!(!selection.handle(PointerEvent::DragStart("B".into())));
        assert_eq!(selection.selected(), Some("A"));
    }

    #[test]
    fn stale_selection_reverts_to_idle() {
        let graph = graph(&["A", "B", "C", "D"], &[("A", "B", 2.0), ("C", "D", 9.0)]);
        let mut selection = SelectionController::default();
        selection.handle(click("C"));

        let wide = compute_groups(&filter(&graph, ScoreScale::default(), 0.0));
        assert!(!selection.drop_stale(&wide));
        assert_eq!(selection.selected(), Some("C"));

        let narrow = compute_groups(&filter(&graph, ScoreScale::default(), 5.0));
        assert!(selection.drop_stale(&narrow));
        assert_eq!(selection.state(), &SelectionState::Idle);
    }
}
