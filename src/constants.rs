// Simple Structures Constants - SINGLE SOURCE OF TRUTH
//
// Tunables shared by the data structures, the config defaults and the demo.

/// Sparse volume / Morton key limits
pub mod sparse {
    /// Bits per axis packed into a 64-bit Morton key
    pub const AXIS_BITS: u32 = 21;
    /// Largest extent a single axis may have (2^21)
    pub const MAX_AXIS_EXTENT: u32 = 1 << AXIS_BITS;
    /// Mask of the bits a single axis occupies before interleaving
    pub const AXIS_MASK: u64 = (1 << AXIS_BITS) - 1;
}

/// Figure comparison
pub mod figures {
    /// Areas closer than this compare as equal
    pub const AREA_EPSILON: f64 = 0.001;
}

/// Defaults used when no config file is given
pub mod demo {
    pub const VOLUME_EXTENT: u32 = 5;
    pub const VOLUME_DEFAULT: i64 = 0;
    /// Values 0..STACK_DEPTH are pushed and then popped
    pub const STACK_DEPTH: u32 = 8;
    pub const LIST_VALUES: [i64; 4] = [5, 3, 8, 1];
}
