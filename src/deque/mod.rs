pub mod handle;
mod string_queue;

pub use string_queue::StringQueue;
