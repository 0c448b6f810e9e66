//! Sparse volume error handling
//!
//! This module provides the result alias and helper constructors used by the
//! volume's bounds checks and strict inserts.

use crate::error::{Axis, LabError, LabResult};

/// Type alias for sparse volume operation results
pub type VolumeResult<T> = LabResult<T>;

/// Create an out of bounds error for one axis
pub fn out_of_bounds(axis: Axis, value: i32, limit: u32) -> LabError {
    LabError::OutOfBounds {
        axis,
        value: i64::from(value),
        limit,
    }
}

/// Create a duplicate cell error
pub fn duplicate_key(x: i32, y: i32, z: i32) -> LabError {
    LabError::DuplicateKey { x, y, z }
}

/// Create an invalid dimensions error
pub fn invalid_dimensions(x: u32, y: u32, z: u32, reason: impl std::fmt::Display) -> LabError {
    LabError::InvalidDimensions {
        x,
        y,
        z,
        reason: reason.to_string(),
    }
}
