/// Morton encoding/decoding for 3D coordinates
///
/// Uses the "magic bits" shifts, 21 bits per axis.

use crate::constants::sparse::{AXIS_MASK, MAX_AXIS_EXTENT};

/// Every third bit, starting at bit 0
const MAGIC_X: u64 = 0x1249249249249249;

/// Spreads the low 21 bits of `v` to every 3rd bit
#[inline(always)]
fn spread_bits(v: u32) -> u64 {
    let mut x = v as u64 & AXIS_MASK;
    x = (x | (x << 32)) & 0x001f_0000_0000_ffff;
    x = (x | (x << 16)) & 0x001f_0000_ff00_00ff;
    x = (x | (x << 8)) & 0x100f_00f0_0f00_f00f;
    x = (x | (x << 4)) & 0x10c3_0c30_c30c_30c3;
    x = (x | (x << 2)) & MAGIC_X;
    x
}

/// Compacts every 3rd bit back to a 21-bit integer
#[inline(always)]
fn compact_bits(v: u64) -> u32 {
    let mut x = v & MAGIC_X;
    x = (x ^ (x >> 2)) & 0x10c3_0c30_c30c_30c3;
    x = (x ^ (x >> 4)) & 0x100f_00f0_0f00_f00f;
    x = (x ^ (x >> 8)) & 0x001f_0000_ff00_00ff;
    x = (x ^ (x >> 16)) & 0x001f_0000_0000_ffff;
    x = (x ^ (x >> 32)) & AXIS_MASK;
    x as u32
}

/// Encode 3D coordinates into a Morton code (Z-order)
/// Supports up to 21 bits per coordinate (2^21 = 2,097,152)
#[inline(always)]
pub fn morton_encode(x: u32, y: u32, z: u32) -> u64 {
    debug_assert!(x < MAX_AXIS_EXTENT, "x coordinate too large for Morton encoding");
    debug_assert!(y < MAX_AXIS_EXTENT, "y coordinate too large for Morton encoding");
    debug_assert!(z < MAX_AXIS_EXTENT, "z coordinate too large for Morton encoding");

    spread_bits(x) | (spread_bits(y) << 1) | (spread_bits(z) << 2)
}

/// Decode a Morton code back to 3D coordinates
#[inline(always)]
pub fn morton_decode(morton: u64) -> (u32, u32, u32) {
    let x = compact_bits(morton);
    let y = compact_bits(morton >> 1);
    let z = compact_bits(morton >> 2);
    (x, y, z)
}

/// Morton-ordered traversal of the box `[0, max)` on each axis
///
/// Codes that decode outside the box are skipped.
pub struct MortonIterator {
    max: (u32, u32, u32),
    current: u64,
    end: u64,
}

impl MortonIterator {
    pub fn new(max: (u32, u32, u32)) -> Self {
        let end = if max.0 == 0 || max.1 == 0 || max.2 == 0 {
            0
        } else {
            morton_encode(max.0 - 1, max.1 - 1, max.2 - 1) + 1
        };
        Self { max, current: 0, end }
    }
}

impl Iterator for MortonIterator {
    type Item = (u32, u32, u32);

    fn next(&mut self) -> Option<Self::Item> {
        while self.current < self.end {
            let (x, y, z) = morton_decode(self.current);
            self.current += 1;
            if x < self.max.0 && y < self.max.1 && z < self.max.2 {
                return Some((x, y, z));
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_morton_encode_decode() {
        let test_cases = [
            (0, 0, 0),
            (1, 1, 1),
            (7, 7, 7),
            (15, 15, 15),
            (100, 200, 50),
            (1000, 2000, 500),
            (MAX_AXIS_EXTENT - 1, 0, MAX_AXIS_EXTENT - 1),
        ];

        for (x, y, z) in test_cases {
            let morton = morton_encode(x, y, z);
            let (dx, dy, dz) = morton_decode(morton);
            assert_eq!((x, y, z), (dx, dy, dz), "Failed for ({}, {}, {})", x, y, z);
        }
    }

    #[test]
    fn test_known_codes() {
        assert_eq!(morton_encode(1, 0, 0), 0b001);
        assert_eq!(morton_encode(0, 1, 0), 0b010);
        assert_eq!(morton_encode(0, 0, 1), 0b100);
        assert_eq!(morton_encode(2, 0, 0), 0b001_000);
        assert_eq!(morton_encode(3, 3, 3), 0b111_111);
    }

    #[test]
    fn test_keys_differ_along_every_axis() {
        let mut seen = HashSet::new();
        for x in 0..6 {
            for y in 0..6 {
                for z in 0..6 {
                    assert!(seen.insert(morton_encode(x, y, z)), "collision at ({}, {}, {})", x, y, z);
                }
            }
        }
        assert_eq!(seen.len(), 216);
    }

    #[test]
    fn test_iterator_visits_each_cell_once() {
        let cells: Vec<_> = MortonIterator::new((3, 5, 2)).collect();
        assert_eq!(cells.len(), 30);

        let unique: HashSet<_> = cells.iter().copied().collect();
        assert_eq!(unique.len(), 30);
        assert!(cells.iter().all(|&(x, y, z)| x < 3 && y < 5 && z < 2));
        assert_eq!(cells[0], (0, 0, 0));
    }

    #[test]
    fn test_iterator_empty_box() {
        assert_eq!(MortonIterator::new((0, 4, 4)).count(), 0);
    }
}
