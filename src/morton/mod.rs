/// Morton encoding (Z-order curve) for sparse volume keys
///
/// Interleaves the bits of x, y and z so every in-bounds coordinate triple maps
/// to its own 64-bit key, and neighbouring cells land on nearby keys.

pub mod morton3d;

pub use morton3d::{morton_decode, morton_encode, MortonIterator};
