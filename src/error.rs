use thiserror::Error;

/// Top-level error type for the inkline geometry core.
#[derive(Debug, Error)]
pub enum InklineError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Camera(#[from] CameraError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("zero-length vector")]
    ZeroVector,

    #[error("curve has {actual} points but the operation needs at least {needed}")]
    TooFewPoints { needed: usize, actual: usize },

    #[error("sample count {0} is too small; at least 2 samples are required")]
    SampleCountTooSmall(usize),
}

/// Errors related to camera construction.
#[derive(Debug, Error)]
pub enum CameraError {
    #[error("viewport size {width}x{height} must be positive")]
    EmptyViewport { width: f64, height: f64 },

    #[error("camera position, target, and up reference are degenerate")]
    DegenerateLookAt,

    #[error("camera matrix is not invertible")]
    SingularCameraMatrix,
}

/// Convenience type alias for results using [`InklineError`].
pub type Result<T> = std::result::Result<T, InklineError>;
