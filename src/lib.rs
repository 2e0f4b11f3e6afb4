pub mod error;
pub mod geometry;
pub mod graph;
pub mod io;
pub mod math;
pub mod operations;

pub use error::{GatepathError, Result};
pub use geometry::{Gateway, NodeRole, Point};
pub use graph::VisibilityGraph;
pub use operations::{solve, validate_path, PathResult};
