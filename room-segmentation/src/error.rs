use thiserror::Error;

/// Caller-visible failures of the segmentation engine.
///
/// Bad wall data is never an error; it is skipped. Only a configuration
/// that cannot be computed with ends up here.
#[derive(Debug, Error, PartialEq)]
pub enum SegmentationError {
    #[error("snap_eps must be a finite positive number, got {0}")]
    InvalidSnapEpsilon(f64),

    #[error("min_area must be a finite non-negative number, got {0}")]
    InvalidMinArea(f64),
}

pub type Result<T> = std::result::Result<T, SegmentationError>;
