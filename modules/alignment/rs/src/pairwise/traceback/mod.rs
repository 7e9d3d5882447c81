pub use graph::{Graph, GraphBuilder, Grid};
pub use paths::Paths;

mod graph;
mod paths;
