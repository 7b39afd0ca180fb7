pub mod merge_sort;
pub mod singly_linked;

pub use singly_linked::{Element, Link};
