use crate::error::{QueueError, Result};

use std::alloc::Layout;
use std::ptr::NonNull;

// On failure `value` is dropped and nothing stays allocated.
pub fn try_alloc<T>(value: T) -> Result<NonNull<T>> {
    let layout = Layout::new::<T>();
    if layout.size() == 0 {
        return Ok(NonNull::from(Box::leak(Box::new(value))));
    }

    unsafe {
        let ptr = std::alloc::alloc(layout) as *mut T;
        if ptr.is_null() {
            tracing::debug!(size = layout.size(), "element allocation failed");
            return Err(QueueError::AllocationFailure);
        }
        ptr.write(value);
        Ok(NonNull::new_unchecked(ptr))
    }
}

pub fn try_box<T>(value: T) -> Result<Box<T>> {
    try_alloc(value).map(|ptr| unsafe { Box::from_raw(ptr.as_ptr()) })
}

pub fn try_copy_str(s: &str) -> Result<String> {
    let mut value = String::new();
    if value.try_reserve_exact(s.len()).is_err() {
        tracing::debug!(len = s.len(), "value allocation failed");
        return Err(QueueError::AllocationFailure);
    }
    value.push_str(s);
    Ok(value)
}
