use eframe::egui::{self, Color32, RichText, Sense, Ui, vec2};

use crate::cluster::{ResultRow, RowEndpoint, RowState, index_class, row_state};
use crate::util::{format_score, short_name};

use super::super::ViewModel;
use super::super::render_utils::to_color32;

const ROW_HEIGHT: f32 = 24.0;
const HIGHLIGHT_FILL: Color32 = Color32::from_rgb(236, 236, 236);

fn submission_label(id: &str, bold: bool) -> RichText {
    let text = RichText::new(short_name(id));
    if bold { text.strong() } else { text }
}

impl ViewModel {
    pub(in crate::app) fn draw_results(&mut self, ui: &mut Ui) {
        ui.heading("Results");
        ui.add_space(4.0);

        let decisions = self.model.decisions();
        let threshold = self.model.threshold();
        let shown = self
            .rows
            .iter()
            .filter_map(|row| {
                let state = row_state(row, threshold, &decisions);
                state.visible.then_some((row, state))
            })
            .collect::<Vec<(&ResultRow, RowState)>>();

        if shown.is_empty() {
            ui.label("No pairs at this similarity.");
            return;
        }

        let mut clicked = None;
        egui::ScrollArea::vertical()
            .id_salt("results_scroll")
            .auto_shrink([false, false])
            .show_rows(ui, ROW_HEIGHT, shown.len(), |ui, row_range| {
                for (row, state) in &shown[row_range] {
                    ui.push_id((index_class(&row.source), row.rank), |ui| {
                        let fill = if state.highlighted {
                            HIGHLIGHT_FILL
                        } else {
                            Color32::TRANSPARENT
                        };

                        egui::Frame::default().fill(fill).show(ui, |ui| {
                            ui.horizontal(|ui| {
                                ui.label(format!("{:>3}", row.rank));

                                for (id, endpoint) in [
                                    (&row.source, RowEndpoint::Source),
                                    (&row.target, RowEndpoint::Target),
                                ] {
                                    let bold = state.bold == Some(endpoint);
                                    if ui
                                        .link(submission_label(id, bold))
                                        .on_hover_text(id.as_str())
                                        .clicked()
                                    {
                                        clicked = Some(id.clone());
                                    }
                                }

                                ui.label(format_score(row.score));

                                let (border, _) =
                                    ui.allocate_exact_size(vec2(8.0, ROW_HEIGHT - 6.0), Sense::hover());
                                ui.painter().rect_filled(border, 0.0, to_color32(state.border));
                            });
                        });
                    });
                }
            });

        if let Some(id) = clicked {
            self.select_node(&id);
        }
    }
}
