//! Linked list structures
//!
//! `SimpleList` is a generic singly linked list with indexed access and an
//! in-place quicksort; `SimpleStack` is a LIFO adapter over it.

pub mod error;
mod quicksort;
mod simple_list;
mod stack;

pub use error::ListResult;
pub use simple_list::{Iter, Node, SimpleList};
pub use stack::SimpleStack;
