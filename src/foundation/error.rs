/// Convenience result type used across seatmap.
pub type SeatMapResult<T> = Result<T, SeatMapError>;

/// Top-level error taxonomy used by seat map APIs.
#[derive(thiserror::Error, Debug)]
pub enum SeatMapError {
    /// Caller-supplied cabin or occupancy data violates the input contract.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while building sprites or touching the drawing surface.
    #[error("render error: {0}")]
    Render(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SeatMapError {
    /// Build a [`SeatMapError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`SeatMapError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`SeatMapError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
