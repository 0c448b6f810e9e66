//! Geometric figures
//!
//! `Rectangle`, `Square` and `Circle` share the `Shape` capability; `Figure`
//! closes them into one type that can be stored in a `SimpleList` and sorted
//! by area.

mod figure;
mod shape;

pub use figure::Figure;
pub use shape::{Circle, Rectangle, Shape, Square};
