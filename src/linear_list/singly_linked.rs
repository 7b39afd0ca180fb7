use crate::error::Result;
use crate::raw::try_alloc;

use std::ptr::NonNull;

pub type Link = Option<NonNull<Element>>;

/// One node of a singly-linked chain. Every element is allocated by
/// [`Element::alloc`] and owned by exactly one chain until
/// [`Element::consume`] releases it.
pub struct Element {
    pub value: String,
    pub next: Link,
}

impl Element {
    pub fn alloc(value: String) -> Result<NonNull<Self>> {
        try_alloc(Self { value, next: None })
    }

    // cond: ptr came from Element::alloc and is no longer linked anywhere
    pub unsafe fn consume(ptr: NonNull<Self>) -> String {
        let node = Box::from_raw(ptr.as_ptr());
        node.value
    }
}

/// Reverses the chain in place and returns its new head.
// cond: every element reachable from head is valid and owned by this chain
pub unsafe fn reverse(mut head: Link) -> Link {
    let mut prev: Link = None;
    while let Some(mut node) = head {
        head = node.as_ref().next;
        node.as_mut().next = prev;
        prev = Some(node);
    }
    prev
}

// cond: head is a valid chain
pub unsafe fn last(head: Link) -> Link {
    let mut node = head?;
    while let Some(next) = node.as_ref().next {
        node = next;
    }
    Some(node)
}

/// Releases every element front to back and returns how many there were.
// cond: head is a valid chain that nothing else refers to
pub unsafe fn release(mut head: Link) -> usize {
    let mut count = 0;
    while let Some(node) = head {
        head = node.as_ref().next;
        drop(Element::consume(node));
        count += 1;
    }
    count
}

// cond: the chain stays valid and unmodified for 'a
pub unsafe fn values<'a>(head: Link) -> impl Iterator<Item = &'a str> {
    std::iter::successors(head, |node| unsafe { node.as_ref().next })
        .map(|node| unsafe { &*node.as_ptr() }.value.as_str())
}

#[cfg(test)]
pub fn from_values(values: &[&str]) -> Link {
    let mut head: Link = None;
    for v in values.iter().rev() {
        let mut node = Element::alloc(v.to_string()).unwrap();
        unsafe { node.as_mut().next = head };
        head = Some(node);
    }
    head
}

#[cfg(test)]
pub fn collect(head: Link) -> Vec<String> {
    unsafe { values(head) }.map(String::from).collect()
}
