use thiserror::Error;

/// Failures surfaced by the search engine and path reconstructor.
///
/// None of these are fatal: calling `reset` again with corrected inputs
/// always brings the engine back to a usable state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("invalid endpoints: {reason}")]
    InvalidEndpoints { reason: String },

    #[error("search has not been initialized, call reset first")]
    NotInitialized,

    #[error("no path exists between start and goal")]
    NoPathFound,
}

impl SearchError {
    pub(crate) fn invalid_endpoints(reason: impl Into<String>) -> Self {
        Self::InvalidEndpoints {
            reason: reason.into(),
        }
    }
}

/// Rejected topology parameters.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{name} must be at least {min}, got {value}")]
    DimensionTooSmall {
        name: &'static str,
        min: usize,
        value: usize,
    },

    #[error("{name} must be at most {max}, got {value}")]
    DimensionTooLarge {
        name: &'static str,
        max: usize,
        value: usize,
    },

    #[error("wall density must be within 0-{max}%, got {value}")]
    DensityOutOfRange { value: f64, max: f64 },

    #[error("unknown preset size {0}")]
    UnknownPreset(usize),
}

/// Errors produced while reading a maze from its text layout.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MazeParseError {
    #[error("maze layout is empty")]
    Empty,

    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unexpected character {ch:?} at row {row}, column {col}")]
    UnexpectedChar { ch: char, row: usize, col: usize },

    #[error("marker '{0}' appears more than once")]
    DuplicateMarker(char),
}

/// Failures of a spawned search run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DriverError {
    #[error(transparent)]
    Search(#[from] SearchError),

    #[error("search task failed: {0}")]
    TaskFailed(String),
}
