//! Error types for route planning, layout loading and configuration.

use thiserror::Error;

use crate::core::Point2D;

/// Route planning failure.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlanError {
    /// The frontier ran dry before any exit was reached.
    #[error("no exit is reachable from ({:.1}, {:.1})", .start.x, .start.y)]
    UnreachableGoal { start: Point2D },

    /// A planning failure attributed to one occupant of a batch.
    #[error("occupant {index}: {source}")]
    Occupant {
        index: usize,
        #[source]
        source: Box<PlanError>,
    },
}

impl PlanError {
    /// Whether this error (or the wrapped occupant error) is an unreachable exit.
    pub fn is_unreachable(&self) -> bool {
        match self {
            PlanError::UnreachableGoal { .. } => true,
            PlanError::Occupant { source, .. } => source.is_unreachable(),
        }
    }
}

/// Layout loading or validation failure.
#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("failed to read layout: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse layout: {0}")]
    Parse(#[from] serde_json::Error),

    /// A seat (`group = Some(row)`) or goal (`group = None`) has a
    /// non-finite or non-positive extent.
    #[error("invalid rectangle at group {group:?}, index {index}")]
    InvalidRectangle { group: Option<usize>, index: usize },
}

/// Configuration loading failure.
#[derive(Error, Debug)]
pub enum ConfigLoadError {
    #[error("failed to read config: {0}")]
    Io(String),

    #[error("failed to parse config: {0}")]
    Parse(String),
}

/// Result alias for planning operations.
pub type Result<T> = std::result::Result<T, PlanError>;
