use std::path::Path;

use eframe::egui::{self, Align, Context, Layout, Vec2};

use crate::cluster::{GraphModel, result_rows};
use crate::util::format_score;

use super::super::ViewModel;
use super::super::graph::group_layout;

impl ViewModel {
    pub(in crate::app) fn new(model: GraphModel) -> Self {
        let rows = result_rows(model.graph(), model.scale());
        let layout = group_layout(&model.state().grouping);
        let threshold = model.threshold();

        Self {
            model,
            rows,
            threshold,
            search: String::new(),
            pan: Vec2::ZERO,
            zoom: 1.0,
            layout,
            pointer_node: None,
            dragged_node: None,
        }
    }

    pub(in crate::app) fn show(
        &mut self,
        ctx: &Context,
        graph_path: &Path,
        reload_requested: &mut bool,
        is_loading: bool,
    ) {
        egui::TopBottomPanel::top("top_bar")
            .resizable(false)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.heading("simgraph");
                    ui.separator();
                    ui.label(format!("graph: {}", graph_path.display()));
                    ui.label(format!("submissions: {}", self.model.graph().node_count()));
                    ui.label(format!("pairs: {}", self.model.graph().link_count()));
                    let reload_button =
                        ui.add_enabled(!is_loading, egui::Button::new("Reload graph"));
                    if reload_button.clicked() {
                        *reload_requested = true;
                    }
                    if ui.button("Reset view").clicked() {
                        self.reset_view();
                    }
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        ui.label(format!(
                            "similarity >= {}",
                            format_score(self.model.threshold())
                        ));
                    });
                });
            });

        egui::SidePanel::left("controls")
            .resizable(true)
            .default_width(300.0)
            .show(ctx, |ui| self.draw_controls(ui));

        egui::SidePanel::right("results")
            .resizable(true)
            .default_width(380.0)
            .show(ctx, |ui| {
                egui::TopBottomPanel::bottom("details")
                    .resizable(true)
                    .default_height(300.0)
                    .show_inside(ui, |ui| self.draw_details(ui));
                self.draw_results(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            if is_loading {
                ui.vertical_centered(|ui| {
                    ui.add_space(120.0);
                    ui.heading("Reloading similarity graph...");
                    ui.add_space(8.0);
                    ui.spinner();
                });
            } else {
                self.draw_graph(ui);
            }
        });
    }

    /// Pushes the slider value through the pipeline and re-places the groups.
    pub(in crate::app) fn apply_threshold(&mut self) {
        self.model.set_threshold(self.threshold);
        self.layout = group_layout(&self.model.state().grouping);
        self.dragged_node = None;
    }

    fn reset_view(&mut self) {
        self.pan = Vec2::ZERO;
        self.zoom = 1.0;
        self.layout = group_layout(&self.model.state().grouping);
    }
}
