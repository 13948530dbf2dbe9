use eframe::egui::{self, Align2, Color32, FontId, Sense, Stroke, Ui, vec2};

use crate::util::short_name;

use super::super::ViewModel;
use super::super::render_utils::{blend_color, draw_background, screen_radius, to_color32};

impl ViewModel {
    pub(in crate::app) fn draw_graph(&mut self, ui: &mut Ui) {
        let (rect, response) = ui.allocate_exact_size(ui.available_size(), Sense::click_and_drag());
        let painter = ui.painter_at(rect);

        draw_background(&painter, rect, self.pan, self.zoom);

        self.handle_graph_zoom(ui, rect, &response);
        self.handle_graph_pan(&response);

        let hovered = self.hovered_node(ui, rect, &self.model.decisions());
        if hovered.is_some() {
            ui.output_mut(|output| {
                output.cursor_icon = egui::CursorIcon::PointingHand;
            });
        }
        self.translate_pointer(rect, &response, hovered.clone());

        let decisions = self.model.decisions();
        let state = self.model.state();

        if state.view.is_empty() {
            painter.text(
                rect.center(),
                Align2::CENTER_CENTER,
                "No pairs are at least this similar.",
                FontId::proportional(15.0),
                Color32::from_gray(90),
            );
            return;
        }

        let radius = screen_radius(self.zoom);
        let zoom_sqrt = self.zoom.sqrt();

        for link in &state.view.links {
            if !decisions.visible.contains(&link.source) || !decisions.visible.contains(&link.target)
            {
                continue;
            }
            let (Some(start), Some(end)) = (
                self.screen_position(rect, &link.source),
                self.screen_position(rect, &link.target),
            ) else {
                continue;
            };

            let color = if decisions.highlighted.contains(&link.source) {
                Color32::from_gray(70)
            } else {
                Color32::from_gray(160)
            };
            painter.line_segment(
                [start, end],
                Stroke::new((2.0 * zoom_sqrt).clamp(1.0, 4.0), color),
            );
        }

        for node in &state.view.nodes {
            if !decisions.visible.contains(&node.id) {
                continue;
            }
            let Some(position) = self.screen_position(rect, &node.id) else {
                continue;
            };

            let fill = to_color32(decisions.color_of(&node.id));
            let is_focus = decisions.focus.as_deref() == Some(node.id.as_str());
            let is_highlighted = decisions.highlighted.contains(&node.id);

            painter.circle_filled(position, radius, fill);
            if is_focus {
                painter.circle_stroke(position, radius, Stroke::new(4.0, Color32::BLACK));
            } else if is_highlighted {
                painter.circle_stroke(
                    position,
                    radius,
                    Stroke::new(2.5, blend_color(fill, Color32::BLACK, 0.35)),
                );
            }

            if is_focus || is_highlighted || self.zoom > 1.35 {
                painter.text(
                    position + vec2(radius + 5.0, 0.0),
                    Align2::LEFT_CENTER,
                    short_name(&node.id),
                    FontId::proportional(12.0),
                    Color32::from_gray(30),
                );
            }
        }

        if let Some(id) = &hovered
            && let Some(group) = state.grouping.group_of(id)
        {
            painter.text(
                rect.left_top() + vec2(10.0, 10.0),
                Align2::LEFT_TOP,
                format!(
                    "{id}  |  group {group}  |  {} co-grouped",
                    state.grouping.members(group).len()
                ),
                FontId::proportional(13.0),
                Color32::from_gray(30),
            );
        }

        if self.dragged_node.is_some() || self.model.state().selection.is_dragging() {
            ui.ctx().request_repaint();
        }
    }
}
