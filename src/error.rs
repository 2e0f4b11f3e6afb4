use thiserror::Error;

/// Top-level error type for the gatepath solver.
#[derive(Debug, Error)]
pub enum GatepathError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error(transparent)]
    Interchange(#[from] InterchangeError),
}

/// Malformed input geometry, rejected before the graph is built.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("point {0:?} has a non-finite coordinate")]
    NonFinite(String),

    #[error("gateway {0} has zero length")]
    Degenerate(u32),

    #[error("label {0:?} is bound to more than one point")]
    DuplicateLabel(String),
}

/// Errors related to the visibility graph.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("no graph node labelled {0:?}")]
    NodeNotFound(String),
}

/// Errors raised while reading input or writing a path.
#[derive(Debug, Error)]
pub enum InterchangeError {
    #[error("{path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("point with label {0:?} not found")]
    UnknownLabel(String),
}

/// Convenience type alias for results using [`GatepathError`].
pub type Result<T> = std::result::Result<T, GatepathError>;
