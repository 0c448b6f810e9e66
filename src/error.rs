//! Crate-wide error type
//!
//! Every subsystem reports failures through `LabError`; the `list` and
//! `sparse` modules add their own result aliases and helper constructors on top.

use std::fmt;

/// Axis of the sparse volume a coordinate belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        };
        f.write_str(name)
    }
}

/// Errors raised by the data structures and the demo configuration
#[derive(Debug, thiserror::Error)]
pub enum LabError {
    #[error("Index {index} is out of range for a list of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("{axis}={value} is outside the volume bounds [0, {limit})")]
    OutOfBounds { axis: Axis, value: i64, limit: u32 },

    #[error("Cell ({x}, {y}, {z}) is already set")]
    DuplicateKey { x: i32, y: i32, z: i32 },

    #[error("Invalid volume dimensions {x}x{y}x{z}: {reason}")]
    InvalidDimensions { x: u32, y: u32, z: u32, reason: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Result alias used across the crate
pub type LabResult<T> = Result<T, LabError>;
