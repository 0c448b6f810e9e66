//! Sparse storage
//!
//! A bounded 3D volume where only explicitly set cells are stored.

pub mod error;
mod volume;

pub use error::VolumeResult;
pub use volume::{Dimensions, SparseVolume};
