use std::collections::HashMap;
use std::f32::consts::TAU;

use eframe::egui::{Vec2, vec2};

use crate::cluster::Grouping;
use crate::util::stable_pair;

const GOLDEN_ANGLE: f32 = 2.399_963;
const NODE_SPACING: f32 = 34.0;
const GROUP_GAP: f32 = 60.0;

/// Deterministic placement: each group sits on a ring, rings are spread
/// along a golden-angle spiral so larger groups push later ones outwards.
pub(in crate::app) fn group_layout(grouping: &Grouping) -> HashMap<String, Vec2> {
    let mut positions = HashMap::new();
    let mut occupied_area = 0.0f32;

    for (group, members) in grouping.groups() {
        let mut members = members.to_vec();
        members.sort();

        let ring_radius = if members.len() <= 1 {
            0.0
        } else {
            (NODE_SPACING * members.len() as f32 / TAU).max(NODE_SPACING * 0.6)
        };
        let footprint = ring_radius + GROUP_GAP;

        let spiral_radius = if group == 0 {
            0.0
        } else {
            (occupied_area / std::f32::consts::PI).sqrt() + footprint
        };
        occupied_area += std::f32::consts::PI * footprint * footprint;

        let angle = group as f32 * GOLDEN_ANGLE;
        let center = vec2(angle.cos(), angle.sin()) * spiral_radius;

        for (index, id) in members.iter().enumerate() {
            let member_angle = index as f32 / members.len() as f32 * TAU;
            let (jx, jy) = stable_pair(id);
            let offset = vec2(member_angle.cos(), member_angle.sin()) * ring_radius
                + vec2(jx, jy) * (NODE_SPACING * 0.1);
            positions.insert(id.clone(), center + offset);
        }
    }

    positions
}
