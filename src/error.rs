use thiserror::Error;

use crate::math::Point3;

/// Top-level error type for curvewalk.
#[derive(Debug, Error)]
pub enum CurvewalkError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Operation(#[from] OperationError),

    #[error(transparent)]
    Tessellation(#[from] TessellationError),

    #[error(transparent)]
    Document(#[from] DocumentError),
}

/// Errors related to path geometry.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("not a continuous path: segment starts at {found}, path ends at {expected}")]
    NotContinuous { expected: Point3, found: Point3 },

    #[error("path has no segments")]
    EmptyPath,
}

/// Errors related to operation arguments.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Errors related to tessellation.
#[derive(Debug, Error)]
pub enum TessellationError {
    #[error("invalid tessellation parameters: {0}")]
    InvalidParameters(String),
}

/// Errors raised while reading control points from a key/value document.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("malformed document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("coordinate `{key}` has {len} components, expected 2")]
    InvalidCoordinate { key: String, len: usize },
}

/// Convenience type alias for results using [`CurvewalkError`].
pub type Result<T> = std::result::Result<T, CurvewalkError>;
