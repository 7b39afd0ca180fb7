//! Handle-style access to [`StringQueue`] where the queue itself may be
//! absent. An absent handle never panics: mutations report `false`, the
//! size query reports `0` and everything else does nothing.

use super::StringQueue;
use crate::error::{QueueError, Result};
use crate::raw::try_box;

fn require<Q>(q: Option<Q>, op: &'static str) -> Result<Q> {
    q.ok_or_else(|| {
        tracing::debug!(op, "absent queue handle");
        QueueError::InvalidArgument
    })
}

/// Returns `None` if the queue could not be allocated.
pub fn create() -> Option<Box<StringQueue>> {
    try_box(StringQueue::new()).ok()
}

pub fn destroy(q: Option<Box<StringQueue>>) {
    drop(q)
}

pub fn insert_head(q: Option<&mut StringQueue>, s: &str) -> bool {
    require(q, "insert_head")
        .and_then(|q| q.insert_head(s))
        .is_ok()
}

pub fn insert_tail(q: Option<&mut StringQueue>, s: &str) -> bool {
    require(q, "insert_tail")
        .and_then(|q| q.insert_tail(s))
        .is_ok()
}

pub fn remove_head(q: Option<&mut StringQueue>, buf: Option<&mut [u8]>) -> bool {
    require(q, "remove_head")
        .and_then(|q| q.remove_head(buf))
        .is_ok()
}

pub fn size(q: Option<&StringQueue>) -> usize {
    q.map_or(0, StringQueue::len)
}

pub fn reverse(q: Option<&mut StringQueue>) {
    if let Ok(q) = require(q, "reverse") {
        q.reverse()
    }
}

pub fn sort(q: Option<&mut StringQueue>) {
    if let Ok(q) = require(q, "sort") {
        q.sort()
    }
}
