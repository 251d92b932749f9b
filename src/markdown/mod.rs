//! Markdown document model.
//!
//! A small tree of composable nodes, each rendering itself to a Markdown
//! string. Rendering is a pure function of the node's fields and its
//! children; nodes are immutable once constructed, except that container
//! nodes accept appends while a document is being assembled.

mod node;
mod table;

pub use node::{CodeStyle, Node, TextStyle};
pub use table::TableBuilder;
