use crate::error::{QueueError, Result};
use crate::linear_list::{merge_sort, singly_linked, Element, Link};
use crate::raw::try_copy_str;

use std::fmt;

/// A queue of owned strings backed by a singly-linked chain.
///
/// Insertion works at both ends, removal only at the head. Every value is
/// copied in on insertion; the caller's text is never retained.
pub struct StringQueue {
    head: Link,
    tail: Link,
    len: usize,
    // invariant: the queue owns every element reachable from head,
    // tail is the last of them, and both are None exactly when len == 0
}

unsafe impl Send for StringQueue {}
unsafe impl Sync for StringQueue {}

impl StringQueue {
    pub const fn new() -> Self {
        Self {
            head: None,
            tail: None,
            len: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn head(&self) -> Option<&str> {
        self.head.map(|ptr| unsafe { &*ptr.as_ptr() }.value.as_str())
    }

    pub fn tail(&self) -> Option<&str> {
        self.tail.map(|ptr| unsafe { &*ptr.as_ptr() }.value.as_str())
    }

    pub fn insert_head(&mut self, s: &str) -> Result<()> {
        let value = try_copy_str(s)?;
        let mut node = Element::alloc(value)?;

        unsafe { node.as_mut().next = self.head };
        if self.tail.is_none() {
            self.tail = Some(node);
        }
        self.head = Some(node);
        self.len += 1;
        Ok(())
    }

    pub fn insert_tail(&mut self, s: &str) -> Result<()> {
        let value = try_copy_str(s)?;
        let node = Element::alloc(value)?;

        match self.tail {
            None => self.head = Some(node),
            Some(mut tail) => unsafe { tail.as_mut().next = Some(node) },
        }
        self.tail = Some(node);
        self.len += 1;
        Ok(())
    }

    pub fn pop_head(&mut self) -> Option<String> {
        let node = self.head?;
        unsafe {
            self.head = node.as_ref().next;
        }
        self.len -= 1;
        if self.head.is_none() {
            self.tail = None;
        }
        Some(unsafe { Element::consume(node) })
    }

    /// Removes the head element, destroying its value.
    ///
    /// When `buf` is given, up to `buf.len() - 1` bytes of the removed value
    /// are copied into it followed by a zero terminator; longer values are
    /// truncated. The element is removed whether or not a buffer is given.
    /// Returns the number of bytes copied, terminator excluded.
    pub fn remove_head(&mut self, buf: Option<&mut [u8]>) -> Result<usize> {
        let value = match self.pop_head() {
            Some(value) => value,
            None => {
                tracing::debug!("remove_head on empty queue");
                return Err(QueueError::EmptyQueue);
            }
        };

        Ok(match buf {
            Some(buf) => copy_terminated(&value, buf),
            None => 0,
        })
    }

    pub fn reverse(&mut self) {
        if self.len < 2 {
            return;
        }
        self.tail = self.head;
        self.head = unsafe { singly_linked::reverse(self.head) };
        tracing::trace!(len = self.len, "reversed queue");
    }

    pub fn sort(&mut self) {
        if self.len < 2 {
            return;
        }
        unsafe {
            self.head = merge_sort::sort(self.head);
            self.tail = singly_linked::last(self.head);
        }
        tracing::trace!(len = self.len, "sorted queue");
    }

    pub fn clear(&mut self) {
        let released = unsafe { singly_linked::release(self.head) };
        debug_assert_eq!(released, self.len);
        self.head = None;
        self.tail = None;
        self.len = 0;
    }
}

impl Default for StringQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for StringQueue {
    fn drop(&mut self) {
        self.clear()
    }
}

impl fmt::Debug for StringQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(unsafe { singly_linked::values(self.head) })
            .finish()
    }
}

fn copy_terminated(value: &str, buf: &mut [u8]) -> usize {
    if buf.is_empty() {
        return 0;
    }
    let n = value.len().min(buf.len() - 1);
    buf[..n].copy_from_slice(&value.as_bytes()[..n]);
    buf[n] = 0;
    n
}
