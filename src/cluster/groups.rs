use std::collections::HashMap;

use super::filter::FilteredView;

/// Connected components of one filtered view.
///
/// Group ids are dense, start at 0 and are only meaningful within the
/// recomputation that produced them; the same submission can land in a
/// different id after the threshold moves.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Grouping {
    group_of: HashMap<String, usize>,
    members: Vec<Vec<String>>,
}

impl Grouping {
    pub fn group_count(&self) -> usize {
        self.members.len()
    }

    pub fn group_of(&self, id: &str) -> Option<usize> {
        self.group_of.get(id).copied()
    }

    pub fn members(&self, group: usize) -> &[String] {
        self.members.get(group).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Every node sharing `id`'s group, `id` included. `None` when `id` is
    /// not part of the current view.
    pub fn co_grouped(&self, id: &str) -> Option<&[String]> {
        self.group_of(id).map(|group| self.members(group))
    }

    pub fn groups(&self) -> impl Iterator<Item = (usize, &[String])> {
        self.members
            .iter()
            .enumerate()
            .map(|(group, members)| (group, members.as_slice()))
    }
}

/// Labels every node of `view` with its connected component.
///
/// Iterative depth-first search over an undirected adjacency map, so deep
/// chains cannot overflow the call stack. O(V + E).
pub fn compute_groups(view: &FilteredView) -> Grouping {
    let mut adjacency: HashMap<&str, Vec<&str>> = HashMap::with_capacity(view.nodes.len());
    for link in &view.links {
        adjacency
            .entry(link.source.as_str())
            .or_default()
            .push(link.target.as_str());
        adjacency
            .entry(link.target.as_str())
            .or_default()
            .push(link.source.as_str());
    }

    let mut group_of = HashMap::with_capacity(view.nodes.len());
    let mut members = Vec::new();
    let mut stack = Vec::new();

    for node in &view.nodes {
        if group_of.contains_key(node.id.as_str()) {
            continue;
        }

        let group = members.len();
        let mut component = Vec::new();
        group_of.insert(node.id.clone(), group);
        stack.push(node.id.as_str());

        while let Some(current) = stack.pop() {
            component.push(current.to_owned());

            for &next in adjacency.get(current).into_iter().flatten() {
                if !group_of.contains_key(next) {
                    group_of.insert(next.to_owned(), group);
                    stack.push(next);
                }
            }
        }

        members.push(component);
    }

    Grouping { group_of, members }
}
