use eframe::egui::{self, RichText, Ui};
use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;

use crate::cluster::SelectionState;
use crate::util::short_name;

use super::super::ViewModel;

const SEARCH_RESULT_LIMIT: usize = 40;

fn fuzzy_match_score(matcher: &SkimMatcherV2, text: &str, query: &str) -> Option<i64> {
    matcher
        .fuzzy_match(text, query)
        .or_else(|| matcher.fuzzy_match(&text.to_ascii_lowercase(), &query.to_ascii_lowercase()))
}

impl ViewModel {
    pub(in crate::app) fn draw_details(&mut self, ui: &mut Ui) {
        ui.heading("Selection");
        ui.add_space(6.0);

        let mut clicked = None;
        let state = self.model.state();

        match state.selection.state() {
            SelectionState::Selected(id) => {
                ui.label(RichText::new(short_name(id)).strong());
                ui.small(id.as_str());
            }
            SelectionState::Hovering(id) | SelectionState::Dragging(id) => {
                ui.label(format!("Hovering {}", short_name(id)));
            }
            SelectionState::Idle => {
                ui.label("Click a node or a submission to isolate its group.");
            }
        }

        if let Some(focus) = state.selection.focus()
            && let Some(group) = state.grouping.group_of(focus)
        {
            let mut members = state.grouping.members(group).to_vec();
            members.sort();

            ui.add_space(4.0);
            ui.label(format!("Group {group}: {} submissions", members.len()));
            egui::ScrollArea::vertical()
                .id_salt("group_members_scroll")
                .max_height(220.0)
                .show(ui, |ui| {
                    for member in &members {
                        if ui.link(short_name(member)).on_hover_text(member.as_str()).clicked() {
                            clicked = Some(member.clone());
                        }
                    }
                });
        }

        ui.separator();
        ui.label("Find submission");
        ui.text_edit_singleline(&mut self.search)
            .on_hover_text("Fuzzy-match visible submissions, then click one to select it.");

        let matches = self.search_matches();
        if !self.search.trim().is_empty() && matches.is_empty() {
            ui.label("No visible submission matches.");
        }
        for id in matches {
            if ui.link(short_name(&id)).on_hover_text(id.as_str()).clicked() {
                clicked = Some(id);
            }
        }

        if let Some(id) = clicked {
            self.select_node(&id);
        }
    }

    /// Visible submissions matching the search box, best match first.
    fn search_matches(&self) -> Vec<String> {
        let query = self.search.trim();
        if query.is_empty() {
            return Vec::new();
        }

        let matcher = SkimMatcherV2::default();
        let mut scored = self
            .model
            .state()
            .view
            .nodes
            .iter()
            .filter_map(|node| {
                fuzzy_match_score(&matcher, &node.id, query).map(|score| (score, node.id.as_str()))
            })
            .collect::<Vec<_>>();

        scored.sort_by(|a, b| b.0.cmp(&a.0).then_with(|| a.1.cmp(b.1)));
        scored
            .into_iter()
            .take(SEARCH_RESULT_LIMIT)
            .map(|(_, id)| id.to_owned())
            .collect()
    }
}
