// ABOUTME: Error types for the dicesim library.
// ABOUTME: Covers die construction, weighting, drawing, and result access errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("A die needs at least one face")]
    InvalidFaceSet,

    #[error("Face {0} is not on this die")]
    UnknownFace(String),

    #[error("Invalid weight '{0}': must be a finite, non-negative number")]
    InvalidWeight(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Cannot draw from a die whose weights are all zero")]
    DegenerateWeights,

    #[error("Invalid layout '{0}': expected 'W' (wide) or 'N' (narrow)")]
    InvalidFormat(String),

    #[error("No results yet: the game has not been played")]
    NoResults,
}

pub type Result<T> = std::result::Result<T, Error>;
