//! List error handling
//!
//! Result alias and helper constructors for the linked list and the stack.

use crate::error::{LabError, LabResult};

/// Type alias for list operation results
pub type ListResult<T> = LabResult<T>;

/// Create an index out of range error
pub fn index_out_of_range(index: usize, len: usize) -> LabError {
    LabError::IndexOutOfRange { index, len }
}
