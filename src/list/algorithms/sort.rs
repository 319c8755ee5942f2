use crate::list::{Link, Node};
use std::ptr::NonNull;

/// Sort the chain starting at `head` and return the new head.
///
/// `less(a, b)` reports whether `a` must come before `b`. Equal values keep
/// their order, because a node of the second half only overtakes a node of
/// the first half when it is strictly less.
///
/// It is unsafe because `head` must be the first node of a well-formed chain
/// (acyclic, with `prev` links mirroring `next` links) that the caller owns.
pub(crate) unsafe fn merge_sort<F>(head: Link, less: &mut F) -> Link
where
    F: FnMut(&i32, &i32) -> bool,
{
    let head = match head {
        Some(node) if node.as_ref().next.is_some() => node,
        // empty, or a single node
        _ => return head,
    };
    let second = split(head);
    let first = merge_sort(Some(head), less);
    let second = merge_sort(second, less);
    merge(first, second, less)
}

/// Cut a chain in halves and return the head of the second half.
///
/// A slow walker advances one node and a fast one two nodes, as long as the
/// fast one has two successors. The slow walker then sits on the last node of
/// the first half, which gets the extra node of an odd-length chain.
unsafe fn split(head: NonNull<Node>) -> Link {
    let (mut slow, mut fast) = (head, head);
    while let Some(next_next) = fast.as_ref().next.and_then(|next| next.as_ref().next) {
        fast = next_next;
        if let Some(next) = slow.as_ref().next {
            slow = next;
        }
    }
    let second = slow.as_mut().next.take();
    if let Some(mut second) = second {
        second.as_mut().prev = None;
    }
    second
}

/// Merge two sorted chains into one and return its head.
///
/// The merge is iterative: a tail walks the merged chain and every node
/// appended to it gets its `prev` link rewritten.
unsafe fn merge<F>(mut a: Link, mut b: Link, less: &mut F) -> Link
where
    F: FnMut(&i32, &i32) -> bool,
{
    let mut head: Link = None;
    let mut tail: Link = None;
    loop {
        let mut node = match (a, b) {
            (Some(x), Some(y)) => {
                if less(&y.as_ref().value, &x.as_ref().value) {
                    b = y.as_ref().next;
                    y
                } else {
                    a = x.as_ref().next;
                    x
                }
            }
            (rest, None) | (None, rest) => {
                // The rest is already linked and sorted, hook it up as a whole.
                if let Some(mut rest) = rest {
                    rest.as_mut().prev = tail;
                }
                match tail {
                    Some(mut tail) => tail.as_mut().next = rest,
                    None => head = rest,
                }
                return head;
            }
        };
        node.as_mut().prev = tail;
        node.as_mut().next = None;
        match tail {
            Some(mut tail) => tail.as_mut().next = Some(node),
            None => head = Some(node),
        }
        tail = Some(node);
    }
}
