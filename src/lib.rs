pub mod deque;
pub mod error;
mod linear_list;
mod raw;

pub use deque::StringQueue;
pub use error::{QueueError, Result};
