use eframe::egui::{self, Key, Response, RichText, Sense, Ui, vec2};

use crate::util::format_score;

use super::super::ViewModel;
use super::super::render_utils::to_color32;

const SLIDER_KEY_BASE_RATE: f64 = 10.0;
const SLIDER_KEY_ACCEL_PER_SEC: f64 = 9.0;
const SLIDER_KEY_ACCEL_MAX: f64 = 40.0;
const THRESHOLD_STEP: f64 = 0.1;

#[derive(Clone, Copy, Default)]
struct SliderKeyHoldState {
    positive_secs: f64,
    negative_secs: f64,
}

fn slider_key_accel_multiplier(hold_secs: f64) -> f64 {
    let ramp = hold_secs * SLIDER_KEY_ACCEL_PER_SEC;
    (1.0 + ramp + ramp * ramp * 0.15).min(SLIDER_KEY_ACCEL_MAX)
}

/// Holding an arrow key on the focused slider speeds up the longer it is
/// held.
fn apply_slider_arrow_acceleration(
    ui: &Ui,
    response: &Response,
    value: &mut f64,
    min: f64,
    max: f64,
    step: f64,
) -> bool {
    let state_id = response.id.with("arrow_key_hold_state");
    let mut hold_state = ui.ctx().data(|data| {
        data.get_temp::<SliderKeyHoldState>(state_id)
            .unwrap_or_default()
    });

    if !response.has_focus() {
        ui.ctx().data_mut(|data| {
            data.insert_temp(state_id, SliderKeyHoldState::default())
        });
        return false;
    }

    let (delta_time, increase_down, decrease_down) = ui.input(|input| {
        (
            f64::from(input.stable_dt.min(0.1)),
            input.key_down(Key::ArrowRight) || input.key_down(Key::ArrowUp),
            input.key_down(Key::ArrowLeft) || input.key_down(Key::ArrowDown),
        )
    });

    hold_state.positive_secs = if increase_down {
        hold_state.positive_secs + delta_time
    } else {
        0.0
    };
    hold_state.negative_secs = if decrease_down {
        hold_state.negative_secs + delta_time
    } else {
        0.0
    };

    let direction = (increase_down as i8) - (decrease_down as i8);
    ui.ctx()
        .data_mut(|data| data.insert_temp(state_id, hold_state));
    if direction == 0 {
        return false;
    }

    let hold_secs = if direction > 0 {
        hold_state.positive_secs
    } else {
        hold_state.negative_secs
    };
    let speed = SLIDER_KEY_BASE_RATE * slider_key_accel_multiplier(hold_secs);
    let delta = f64::from(direction) * step * speed * delta_time;

    let old_value = *value;
    *value = (*value + delta).clamp(min, max);
    ui.ctx().request_repaint();

    (*value - old_value).abs() > f64::EPSILON
}

impl ViewModel {
    pub(in crate::app) fn draw_controls(&mut self, ui: &mut Ui) {
        ui.heading("Cluster Controls");
        ui.separator();
        ui.add_space(4.0);

        let (min, max) = self.model.threshold_range();
        let slider = ui
            .add(
                egui::Slider::new(&mut self.threshold, min..=max)
                    .step_by(THRESHOLD_STEP)
                    .custom_formatter(|value, _| format_score(value))
                    .text("Similarity"),
            )
            .on_hover_text("Only keep pairs at least this similar.");
        if slider.hovered() {
            slider.request_focus();
        }
        let mut changed = slider.changed();
        changed |= apply_slider_arrow_acceleration(
            ui,
            &slider,
            &mut self.threshold,
            min,
            max,
            THRESHOLD_STEP,
        );
        if changed {
            self.apply_threshold();
        }

        ui.add_space(6.0);
        let state = self.model.state();
        ui.label(format!(
            "{} of {} submissions in {} groups",
            state.view.nodes.len(),
            self.model.graph().node_count(),
            state.grouping.group_count()
        ));
        ui.label(format!(
            "{} of {} pairs shown",
            state.view.links.len(),
            self.model.graph().link_count()
        ));

        ui.separator();
        ui.horizontal(|ui| {
            ui.label(RichText::new("Groups").strong());
            let has_selection = self.model.state().selection.selected().is_some();
            if ui
                .add_enabled(has_selection, egui::Button::new("Clear selection"))
                .clicked()
            {
                self.clear_selection();
            }
        });
        self.draw_group_legend(ui);
    }

    fn draw_group_legend(&mut self, ui: &mut Ui) {
        let decisions = self.model.decisions();
        let mut clicked = None;

        egui::ScrollArea::vertical()
            .id_salt("group_legend_scroll")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for (group, members) in self.model.state().grouping.groups() {
                    let Some(first) = members.first() else {
                        continue;
                    };

                    ui.horizontal(|ui| {
                        let (swatch, _) = ui.allocate_exact_size(vec2(12.0, 12.0), Sense::hover());
                        ui.painter()
                            .rect_filled(swatch, 2.0, to_color32(decisions.color_of(first)));

                        let label = format!("group {group} ({})", members.len());
                        if ui
                            .link(label)
                            .on_hover_text(members.join("\n"))
                            .clicked()
                        {
                            clicked = Some(first.clone());
                        }
                    });
                }
            });

        if let Some(id) = clicked {
            self.select_node(&id);
        }
    }
}
