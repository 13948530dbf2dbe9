use std::fmt::Write;

use crate::cluster::GraphModel;
use crate::util::format_score;

/// Plain-text summary of the groups at the model's current threshold.
pub fn render(model: &GraphModel) -> String {
    let state = model.state();
    let mut out = String::new();

    let _ = writeln!(
        out,
        "threshold {} (max scale {})",
        format_score(state.threshold),
        format_score(model.scale().max())
    );
    let _ = writeln!(
        out,
        "{} of {} submissions in {} groups, {} of {} pairs",
        state.view.nodes.len(),
        model.graph().node_count(),
        state.grouping.group_count(),
        state.view.links.len(),
        model.graph().link_count()
    );

    for (group, members) in state.grouping.groups() {
        let mut members = members.to_vec();
        members.sort();
        let _ = writeln!(
            out,
            "group {group} {} ({}): {}",
            state.palette.color(group).to_hex(),
            members.len(),
            members.join(", ")
        );
    }

    out
}
