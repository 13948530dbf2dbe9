use std::collections::HashSet;

use super::error::GraphError;

/// Raw similarity scores are stored on an inverted scale: a smaller value
/// means the two submissions are more alike. The threshold control works on
/// the display scale `max - value`, where higher means more similar.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScoreScale {
    max: f64,
}

impl ScoreScale {
    pub const DEFAULT_MAX: f64 = 11.0;

    pub fn new(max: f64) -> Self {
        Self { max }
    }

    pub fn max(self) -> f64 {
        self.max
    }

    /// Converts a raw stored value to the display (similarity) scale.
    pub fn similarity(self, raw: f64) -> f64 {
        self.max - raw
    }

    /// A link survives `threshold` iff its similarity is at least as high.
    /// A NaN threshold keeps nothing.
    pub fn passes(self, raw: f64, threshold: f64) -> bool {
        self.similarity(raw) >= threshold
    }

    /// Slider bounds on the display scale: the floor of the weakest
    /// similarity present, up to one step below the raw maximum.
    pub fn threshold_range(self, links: &[Link]) -> (f64, f64) {
        let upper = self.max - 1.0;
        let lower = links
            .iter()
            .map(|link| self.similarity(link.value))
            .min_by(f64::total_cmp)
            .map(f64::floor)
            .unwrap_or(0.0);

        (lower.min(upper), upper)
    }
}

impl Default for ScoreScale {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Node {
    pub id: String,
}

/// An undirected, scored pair of submissions.
#[derive(Clone, Debug, PartialEq)]
pub struct Link {
    pub source: String,
    pub target: String,
    pub value: f64,
}

/// The full dataset, validated once and never mutated afterwards.
#[derive(Clone, Debug)]
pub struct Graph {
    nodes: Vec<Node>,
    links: Vec<Link>,
}

impl Graph {
    pub fn new(nodes: Vec<Node>, links: Vec<Link>) -> Result<Self, GraphError> {
        let mut known_ids = HashSet::with_capacity(nodes.len());
        for node in &nodes {
            if !known_ids.insert(node.id.as_str()) {
                return Err(GraphError::DuplicateNode(node.id.clone()));
            }
        }

        for link in &links {
            for endpoint in [&link.source, &link.target] {
                if !known_ids.contains(endpoint.as_str()) {
                    return Err(GraphError::DanglingLink {
                        source_id: link.source.clone(),
                        target_id: link.target.clone(),
                        missing: endpoint.clone(),
                    });
                }
            }

            if !link.value.is_finite() {
                return Err(GraphError::NonFiniteScore {
                    source_id: link.source.clone(),
                    target_id: link.target.clone(),
                    value: link.value,
                });
            }
        }

        Ok(Self { nodes, links })
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn links(&self) -> &[Link] {
        &self.links
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn link_count(&self) -> usize {
        self.links.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(id: &str) -> Node {
        Node { id: id.to_owned() }
    }

    fn link(source: &str, target: &str, value: f64) -> Link {
        Link {
            source: source.to_owned(),
            target: target.to_owned(),
            value,
        }
    }

    #[test]
    fn rejects_dangling_link() {
        let error = Graph::new(vec![node("a")], vec![link("a", "b", 3.0)]).unwrap_err();
        assert_eq!(
            error,
            GraphError::DanglingLink {
                source_id: "a".into(),
                target_id: "b".into(),
                missing: "b".into(),
            }
        );
    }

    #[test]
    fn rejects_duplicate_node() {
        let error = Graph::new(vec![node("a"), node("a")], Vec::new()).unwrap_err();
        assert_eq!(error, GraphError::DuplicateNode("a".into()));
    }

    #[test]
    fn rejects_nan_score() {
        let error = Graph::new(vec![node("a"), node("b")], vec![link("a", "b", f64::NAN)]);
        assert!(matches!(error, Err(GraphError::NonFiniteScore { .. })));
    }

    #[test]
    fn similarity_inverts_raw_scale() {
        let scale = ScoreScale::default();
        assert_eq!(scale.similarity(2.0), 9.0);
        assert!(scale.passes(2.0, 5.0));
        assert!(!scale.passes(9.0, 5.0));
        assert!(!scale.passes(2.0, f64::NAN));
    }

    #[test]
    fn threshold_range_follows_weakest_link() {
        let scale = ScoreScale::default();
        let links = vec![link("a", "b", 2.0), link("c", "d", 8.5)];
        assert_eq!(scale.threshold_range(&links), (2.0, 10.0));
        assert_eq!(scale.threshold_range(&[]), (0.0, 10.0));
    }
}
