use thiserror::Error;

/// Reasons a similarity dataset is rejected at load time.
///
/// Any of these rejects the whole dataset; nothing is silently dropped.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GraphError {
    #[error("node id {0:?} appears more than once")]
    DuplicateNode(String),
    #[error("link {source_id:?} -> {target_id:?} references unknown node {missing:?}")]
    DanglingLink {
        source_id: String,
        target_id: String,
        missing: String,
    },
    #[error("link {source_id:?} -> {target_id:?} has non-finite score {value}")]
    NonFiniteScore {
        source_id: String,
        target_id: String,
        value: f64,
    },
}
