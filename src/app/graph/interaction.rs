use eframe::egui::{self, Pos2, Rect, Ui};

use crate::cluster::{Decisions, PointerEvent};

use super::super::ViewModel;
use super::super::render_utils::{screen_radius, screen_to_world, world_to_screen};

impl ViewModel {
    pub(in crate::app) fn handle_graph_zoom(
        &mut self,
        ui: &Ui,
        rect: Rect,
        response: &egui::Response,
    ) {
        if !response.hovered() {
            return;
        }

        let scroll = ui.input(|input| input.raw_scroll_delta.y);
        if scroll.abs() <= f32::EPSILON {
            return;
        }

        let pointer = ui
            .input(|input| input.pointer.hover_pos())
            .unwrap_or_else(|| rect.center());
        let world_before = screen_to_world(rect, self.pan, self.zoom, pointer);

        let zoom_factor = (1.0 + (scroll * 0.0018)).clamp(0.85, 1.15);
        self.zoom = (self.zoom * zoom_factor).clamp(0.1, 6.0);
        self.pan = pointer - rect.center() - (world_before * self.zoom);
    }

    pub(in crate::app) fn handle_graph_pan(&mut self, response: &egui::Response) {
        if response.dragged_by(egui::PointerButton::Secondary)
            || response.dragged_by(egui::PointerButton::Middle)
        {
            self.pan += response.drag_delta();
        }
    }

    pub(in crate::app) fn screen_position(&self, rect: Rect, id: &str) -> Option<Pos2> {
        self.layout
            .get(id)
            .map(|world| world_to_screen(rect, self.pan, self.zoom, *world))
    }

    /// Closest visible node under the pointer.
    pub(in crate::app) fn hovered_node(
        &self,
        ui: &Ui,
        rect: Rect,
        decisions: &Decisions,
    ) -> Option<String> {
        let pointer = ui
            .input(|input| input.pointer.hover_pos())
            .filter(|pointer| rect.contains(*pointer))?;
        let radius = screen_radius(self.zoom);

        self.model
            .state()
            .view
            .nodes
            .iter()
            .filter(|node| decisions.visible.contains(&node.id))
            .filter_map(|node| {
                let distance = self.screen_position(rect, &node.id)?.distance(pointer);
                (distance <= radius).then_some((node.id.as_str(), distance))
            })
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(id, _)| id.to_owned())
    }

    /// Turns this frame's pointer activity into selection events.
    pub(in crate::app) fn translate_pointer(
        &mut self,
        rect: Rect,
        response: &egui::Response,
        hovered: Option<String>,
    ) {
        if self.pointer_node != hovered {
            if let Some(previous) = self.pointer_node.take() {
                self.model.handle_pointer(PointerEvent::Leave(previous));
            }
            if let Some(current) = &hovered {
                self.model.handle_pointer(PointerEvent::Enter(current.clone()));
            }
            self.pointer_node = hovered.clone();
        }

        if response.drag_started_by(egui::PointerButton::Primary)
            && let Some(id) = &hovered
        {
            self.dragged_node = Some(id.clone());
            self.model.handle_pointer(PointerEvent::DragStart(id.clone()));
        }

        if let Some(id) = &self.dragged_node
            && response.dragged_by(egui::PointerButton::Primary)
            && let Some(pointer) = response.interact_pointer_pos()
        {
            let world = screen_to_world(rect, self.pan, self.zoom, pointer);
            self.layout.insert(id.clone(), world);
        }

        if response.drag_stopped() && self.dragged_node.take().is_some() {
            self.model.handle_pointer(PointerEvent::DragEnd);
        }

        if response.clicked_by(egui::PointerButton::Primary) {
            let event = match hovered {
                Some(id) => PointerEvent::Click(id),
                None => PointerEvent::ClickBackground,
            };
            self.model.handle_pointer(event);
        }
    }

    pub(in crate::app) fn select_node(&mut self, id: &str) {
        self.model.handle_pointer(PointerEvent::Click(id.to_owned()));
    }

    pub(in crate::app) fn clear_selection(&mut self) {
        self.model.handle_pointer(PointerEvent::ClickBackground);
    }
}
