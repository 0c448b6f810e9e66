/// Sparse 3D volume
///
/// Only cells that were explicitly set occupy an entry in the backing map;
/// every other in-bounds cell reads as the default value. Keys are the Morton
/// code of all three coordinates.

use std::collections::hash_map::Entry;
use std::fmt;

use rustc_hash::FxHashMap;

use super::error::{duplicate_key, invalid_dimensions, out_of_bounds, VolumeResult};
use crate::constants::sparse::MAX_AXIS_EXTENT;
use crate::error::Axis;
use crate::morton::{morton_decode, morton_encode, MortonIterator};

/// Extent of the volume along each axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub x: u32,
    pub y: u32,
    pub z: u32,
}

impl Dimensions {
    /// Total number of addressable cells
    pub fn cell_count(&self) -> u64 {
        u64::from(self.x) * u64::from(self.y) * u64::from(self.z)
    }
}

#[derive(Debug, Clone)]
pub struct SparseVolume<T> {
    cells: FxHashMap<u64, T>,
    dims: Dimensions,
    default: T,
}

impl<T> SparseVolume<T> {
    /// Create a volume of `max_x * max_y * max_z` cells that all read as `default`.
    ///
    /// Every extent must be in `1..=2^21`.
    pub fn new(max_x: u32, max_y: u32, max_z: u32, default: T) -> VolumeResult<Self> {
        for extent in [max_x, max_y, max_z] {
            if extent == 0 {
                return Err(invalid_dimensions(max_x, max_y, max_z, "every extent must be positive"));
            }
            if extent > MAX_AXIS_EXTENT {
                return Err(invalid_dimensions(
                    max_x,
                    max_y,
                    max_z,
                    format!("extents are limited to {}", MAX_AXIS_EXTENT),
                ));
            }
        }

        log::debug!("Created sparse volume {}x{}x{}", max_x, max_y, max_z);
        Ok(Self {
            cells: FxHashMap::default(),
            dims: Dimensions { x: max_x, y: max_y, z: max_z },
            default,
        })
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }

    pub fn default_value(&self) -> &T {
        &self.default
    }

    /// Number of explicitly stored cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Value at (x, y, z), or the default if the cell was never set
    pub fn get(&self, x: i32, y: i32, z: i32) -> VolumeResult<&T> {
        let key = self.key(x, y, z)?;
        Ok(self.cells.get(&key).unwrap_or(&self.default))
    }

    /// Store `value` at (x, y, z), returning whatever was stored there before
    pub fn set(&mut self, x: i32, y: i32, z: i32, value: T) -> VolumeResult<Option<T>> {
        let key = self.key(x, y, z)?;
        let previous = self.cells.insert(key, value);
        if previous.is_some() {
            log::trace!("Overwrote cell ({}, {}, {})", x, y, z);
        }
        Ok(previous)
    }

    /// Store `value` only if (x, y, z) has not been set yet
    pub fn insert_new(&mut self, x: i32, y: i32, z: i32, value: T) -> VolumeResult<()> {
        let key = self.key(x, y, z)?;
        match self.cells.entry(key) {
            Entry::Occupied(_) => Err(duplicate_key(x, y, z)),
            Entry::Vacant(slot) => {
                slot.insert(value);
                Ok(())
            }
        }
    }

    /// Reset (x, y, z) to the default, returning the value that was stored
    pub fn remove(&mut self, x: i32, y: i32, z: i32) -> VolumeResult<Option<T>> {
        let key = self.key(x, y, z)?;
        Ok(self.cells.remove(&key))
    }

    /// Drop every stored cell
    pub fn clear(&mut self) {
        self.cells.clear();
    }

    /// Stored cells with their coordinates, in no particular order
    pub fn iter_set(&self) -> impl Iterator<Item = ((u32, u32, u32), &T)> + '_ {
        self.cells.iter().map(|(&key, value)| (morton_decode(key), value))
    }

    /// Every cell of the volume in Morton order, defaults included
    pub fn iter_morton(&self) -> impl Iterator<Item = ((u32, u32, u32), &T)> + '_ {
        MortonIterator::new((self.dims.x, self.dims.y, self.dims.z))
            .map(move |(x, y, z)| ((x, y, z), self.cell(x, y, z)))
    }

    fn key(&self, x: i32, y: i32, z: i32) -> VolumeResult<u64> {
        let x = Self::axis_coord(Axis::X, x, self.dims.x)?;
        let y = Self::axis_coord(Axis::Y, y, self.dims.y)?;
        let z = Self::axis_coord(Axis::Z, z, self.dims.z)?;
        Ok(morton_encode(x, y, z))
    }

    fn axis_coord(axis: Axis, value: i32, limit: u32) -> VolumeResult<u32> {
        match u32::try_from(value) {
            Ok(coord) if coord < limit => Ok(coord),
            _ => Err(out_of_bounds(axis, value, limit)),
        }
    }

    fn cell(&self, x: u32, y: u32, z: u32) -> &T {
        self.cells.get(&morton_encode(x, y, z)).unwrap_or(&self.default)
    }
}

/// Layered grid: one block per z layer, one bracketed row per y, x values tab-separated
impl<T: fmt::Display> fmt::Display for SparseVolume<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for z in 0..self.dims.z {
            for y in 0..self.dims.y {
                f.write_str("[")?;
                for x in 0..self.dims.x {
                    if x > 0 {
                        f.write_str("\t")?;
                    }
                    write!(f, "{}", self.cell(x, y, z))?;
                }
                f.write_str("]\n")?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LabError;

    #[test]
    fn test_unset_cells_read_default() {
        let volume = SparseVolume::new(3, 4, 2, -1).expect("valid dimensions");
        for x in 0..3 {
            for y in 0..4 {
                for z in 0..2 {
                    assert_eq!(volume.get(x, y, z).ok(), Some(&-1));
                }
            }
        }
        assert!(volume.is_empty());
    }

    #[test]
    fn test_set_then_get() {
        let mut volume = SparseVolume::new(4, 4, 4, 0).expect("valid dimensions");
        assert_eq!(volume.set(1, 2, 3, 9).ok(), Some(None));
        assert_eq!(volume.get(1, 2, 3).ok(), Some(&9));
        assert_eq!(volume.get(3, 2, 1).ok(), Some(&0));
        assert_eq!(volume.len(), 1);
    }

    #[test]
    fn test_cells_differ_only_in_z() {
        let mut volume = SparseVolume::new(2, 2, 3, 0).expect("valid dimensions");
        volume.set(1, 1, 0, 10).expect("in bounds");
        volume.set(1, 1, 1, 11).expect("in bounds");
        volume.set(1, 1, 2, 12).expect("in bounds");

        assert_eq!(volume.get(1, 1, 0).ok(), Some(&10));
        assert_eq!(volume.get(1, 1, 1).ok(), Some(&11));
        assert_eq!(volume.get(1, 1, 2).ok(), Some(&12));
        assert_eq!(volume.len(), 3);
    }

    #[test]
    fn test_set_upserts() {
        let mut volume = SparseVolume::new(2, 2, 2, 0).expect("valid dimensions");
        volume.set(0, 1, 0, 5).expect("in bounds");
        assert_eq!(volume.set(0, 1, 0, 6).ok(), Some(Some(5)));
        assert_eq!(volume.get(0, 1, 0).ok(), Some(&6));
        assert_eq!(volume.len(), 1);
    }

    #[test]
    fn test_insert_new_rejects_duplicates() {
        let mut volume = SparseVolume::new(2, 2, 2, 0).expect("valid dimensions");
        volume.insert_new(1, 0, 1, 3).expect("first insert");
        let err = volume.insert_new(1, 0, 1, 4).unwrap_err();
        assert!(matches!(err, LabError::DuplicateKey { x: 1, y: 0, z: 1 }));
        assert_eq!(volume.get(1, 0, 1).ok(), Some(&3));
    }

    #[test]
    fn test_bounds_per_axis() {
        let mut volume = SparseVolume::new(2, 3, 4, 0).expect("valid dimensions");

        let cases = [
            ((2, 0, 0), Axis::X),
            ((-1, 0, 0), Axis::X),
            ((0, 3, 0), Axis::Y),
            ((0, -5, 0), Axis::Y),
            ((0, 0, 4), Axis::Z),
            ((0, 0, i32::MIN), Axis::Z),
        ];
        for ((x, y, z), expected) in cases {
            match volume.get(x, y, z) {
                Err(LabError::OutOfBounds { axis, .. }) => assert_eq!(axis, expected),
                other => panic!("expected bounds error for ({}, {}, {}), got {:?}", x, y, z, other),
            }
            assert!(matches!(volume.set(x, y, z, 1), Err(LabError::OutOfBounds { .. })));
        }
        assert!(volume.is_empty());
    }

    #[test]
    fn test_invalid_dimensions() {
        assert!(matches!(SparseVolume::new(0, 1, 1, 0), Err(LabError::InvalidDimensions { .. })));
        assert!(matches!(SparseVolume::new(1, 1, 0, 0), Err(LabError::InvalidDimensions { .. })));
        assert!(SparseVolume::new(1, MAX_AXIS_EXTENT + 1, 1, 0).is_err());
        assert!(SparseVolume::new(1, MAX_AXIS_EXTENT, 1, 0).is_ok());
    }

    #[test]
    fn test_remove_restores_default() {
        let mut volume = SparseVolume::new(2, 2, 2, '.').expect("valid dimensions");
        volume.set(1, 1, 1, '#').expect("in bounds");
        assert_eq!(volume.remove(1, 1, 1).ok(), Some(Some('#')));
        assert_eq!(volume.get(1, 1, 1).ok(), Some(&'.'));
        assert_eq!(volume.remove(1, 1, 1).ok(), Some(None));
    }

    #[test]
    fn test_iterators() {
        let mut volume = SparseVolume::new(3, 3, 3, 0u8).expect("valid dimensions");
        volume.set(2, 0, 1, 7).expect("in bounds");

        let stored: Vec<_> = volume.iter_set().collect();
        assert_eq!(stored, vec![((2, 0, 1), &7)]);

        let all: Vec<_> = volume.iter_morton().collect();
        assert_eq!(all.len(), 27);
        assert_eq!(all.iter().filter(|(_, v)| **v == 7).count(), 1);
    }

    #[test]
    fn test_render_layers() {
        let mut volume = SparseVolume::new(3, 2, 2, 0).expect("valid dimensions");
        volume.set(2, 1, 0, 4).expect("in bounds");
        volume.set(0, 0, 1, 9).expect("in bounds");

        let expected = "[0\t0\t0]\n[0\t0\t4]\n\n[9\t0\t0]\n[0\t0\t0]\n\n";
        assert_eq!(volume.to_string(), expected);
    }
}
