mod color;
mod filter;
mod groups;
mod pipeline;
mod selection;
mod table;

pub use color::Color;
pub use groups::Grouping;
pub use pipeline::{Decisions, GraphModel};
pub use selection::{PointerEvent, SelectionState};
pub use table::{ResultRow, RowEndpoint, RowState, index_class, result_rows, row_state};
