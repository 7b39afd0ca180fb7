mod try_box;

pub use try_box::{try_alloc, try_box, try_copy_str};
