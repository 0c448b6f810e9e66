pub mod config;
pub mod constants;
pub mod error;
pub mod figures;
pub mod list;
pub mod morton;
pub mod sparse;

pub use config::LabConfig;
pub use error::{Axis, LabError, LabResult};
pub use figures::{Circle, Figure, Rectangle, Shape, Square};
pub use list::{SimpleList, SimpleStack};
pub use sparse::{Dimensions, SparseVolume};
