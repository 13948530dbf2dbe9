mod error;
mod graph;
mod load;
mod parse;

pub use error::GraphError;
pub use graph::{Graph, Link, Node, ScoreScale};
pub use load::load_graph;
pub use parse::parse_graph;
