//! Error types for the simulation core.
//!
//! The per-tick hot path is infallible by construction; the only fallible
//! operations are level loading and entity geometry construction.

use thiserror::Error;

/// A level identifier with no corresponding grid data.
///
/// Fatal to the containing session: an empty level cannot be recovered, so
/// callers propagate this rather than retrying.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LevelLoadError {
    #[error("no grid data for level {0}")]
    UnknownLevel(u32),
}

/// Rejected rectangle construction: width and height must be strictly
/// positive for overlap tests to mean anything.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("invalid geometry: {width}x{height} rectangle")]
pub struct InvalidGeometry {
    pub width: f32,
    pub height: f32,
}

/// Umbrella error for world construction and level transitions.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum WorldError {
    #[error(transparent)]
    Level(#[from] LevelLoadError),
    #[error(transparent)]
    Geometry(#[from] InvalidGeometry),
}
