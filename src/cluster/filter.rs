use std::collections::HashSet;

use crate::similarity::{Graph, Link, Node, ScoreScale};

/// The subgraph induced by one threshold. Rebuilt from scratch on every
/// threshold change; nodes keep the dataset's order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FilteredView {
    pub nodes: Vec<Node>,
    pub links: Vec<Link>,
}

impl FilteredView {
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Keeps every link whose similarity is at least `threshold`, and only the
/// nodes that still have one of those links. Thresholds outside the data's
/// range simply keep everything or nothing.
pub fn filter(graph: &Graph, scale: ScoreScale, threshold: f64) -> FilteredView {
    let links = graph
        .links()
        .iter()
        .filter(|link| scale.passes(link.value, threshold))
        .cloned()
        .collect::<Vec<_>>();

    let endpoints = links
        .iter()
        .flat_map(|link| [link.source.as_str(), link.target.as_str()])
        .collect::<HashSet<_>>();

    let nodes = graph
        .nodes()
        .iter()
        .filter(|node| endpoints.contains(node.id.as_str()))
        .cloned()
        .collect::<Vec<_>>();

    FilteredView { nodes, links }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::cluster::test_support::{graph, random_graph};

    #[test]
    fn threshold_zero_keeps_both_pairs() {
        let graph = graph(&["A", "B", "C", "D"], &[("A", "B", 2.0), ("C", "D", 9.0)]);
        let view = filter(&graph, ScoreScale::default(), 0.0);

        assert_eq!(view.links.len(), 2);
        assert_eq!(view.nodes.len(), 4);
    }

    #[test]
    fn raising_threshold_drops_weak_pair_and_its_nodes() {
        let graph = graph(&["A", "B", "C", "D"], &[("A", "B", 2.0), ("C", "D", 9.0)]);
        let view = filter(&graph, ScoreScale::default(), 5.0);

        assert_eq!(view.links.len(), 1);
        let ids = view.nodes.iter().map(|node| node.id.as_str()).collect::<Vec<_>>();
        assert_eq!(ids, ["A", "B"]);
    }

    #[test]
    fn out_of_range_threshold_is_empty_not_an_error() {
        let graph = graph(&["A", "B"], &[("A", "B", 2.0)]);

        assert!(filter(&graph, ScoreScale::default(), 100.0).is_empty());
        assert!(filter(&graph, ScoreScale::default(), f64::NAN).is_empty());
        assert_eq!(filter(&graph, ScoreScale::default(), -100.0).links.len(), 1);
    }

    #[test]
    fn unlinked_nodes_are_never_shown() {
        let graph = graph(&["A", "B", "lonely"], &[("A", "B", 1.0)]);
        let view = filter(&graph, ScoreScale::default(), 0.0);

        assert!(view.nodes.iter().all(|node| node.id != "lonely"));
    }

    proptest! {
        #[test]
        fn higher_threshold_never_adds_links(
            graph in random_graph(),
            low in 0.0f64..11.0,
            bump in 0.0f64..11.0,
        ) {
            let scale = ScoreScale::default();
            let wide = filter(&graph, scale, low);
            let narrow = filter(&graph, scale, low + bump);

            for link in &narrow.links {
                prop_assert!(wide.links.contains(link));
            }
        }

        #[test]
        fn every_visible_node_has_a_link(graph in random_graph(), threshold in 0.0f64..11.0) {
            let view = filter(&graph, ScoreScale::default(), threshold);

            for node in &view.nodes {
                prop_assert!(
                    view.links
                        .iter()
                        .any(|link| link.source == node.id || link.target == node.id)
                );
            }
        }

        #[test]
        fn filtering_is_deterministic(graph in random_graph(), threshold in 0.0f64..11.0) {
            let scale = ScoreScale::default();
            prop_assert_eq!(filter(&graph, scale, threshold), filter(&graph, scale, threshold));
        }
    }
}
