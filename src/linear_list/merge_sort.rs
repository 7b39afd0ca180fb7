use super::singly_linked::{Element, Link};

use std::ptr::NonNull;

/// Sorts the chain ascending by byte-wise comparison of the values and
/// returns the new head. Elements are relinked, never reallocated.
/// Equal values keep their relative order.
// cond: every element reachable from head is valid and owned by this chain
pub unsafe fn sort(head: Link) -> Link {
    let node = match head {
        Some(node) if node.as_ref().next.is_some() => node,
        _ => return head,
    };

    let back = split(node);
    merge(sort(head), sort(back))
}

// cond: head has at least two elements
// Cuts the chain after its midpoint and returns the back half.
unsafe fn split(head: NonNull<Element>) -> Link {
    let mut slow = head;
    let mut fast = head.as_ref().next;
    while let Some(next) = fast.and_then(|f| unsafe { f.as_ref().next }) {
        slow = slow.as_ref().next?;
        fast = next.as_ref().next;
    }
    slow.as_mut().next.take()
}

// ties go to `a`
unsafe fn merge(mut a: Link, mut b: Link) -> Link {
    let mut head: Link = None;
    let mut tail: Link = None;

    while let (Some(x), Some(y)) = (a, b) {
        let node = if x.as_ref().value <= y.as_ref().value {
            a = x.as_ref().next;
            x
        } else {
            b = y.as_ref().next;
            y
        };
        match tail {
            Some(mut t) => t.as_mut().next = Some(node),
            None => head = Some(node),
        }
        tail = Some(node);
    }

    let rest = a.or(b);
    match tail {
        Some(mut t) => t.as_mut().next = rest,
        None => head = rest,
    }
    head
}
