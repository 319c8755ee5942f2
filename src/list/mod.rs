use std::alloc::alloc;
use std::fmt::{self, Debug, Display, Formatter};
use std::marker::PhantomData;
use std::ptr::NonNull;

use tracing::trace;

use crate::error::{leak_box, try_leak_box_with, AllocError, AllocFn};
use crate::list::iterator::{Iter, IterMut, IterRev};

pub mod iterator;

mod algorithms;

/// The `Sequence` is a doubly-linked sequence of integers with owned nodes.
///
/// The `Sequence` only holds a pointer to its first node. There is neither a
/// tail pointer nor a length field, so reaching the back of the sequence or
/// computing its length takes *O*(*n*) time.
///
/// # Positions
///
/// All positional operations take a 0-based `isize` position and never fail
/// on an out-of-range one:
/// - [`insert_at`](Sequence::insert_at) clamps a position `<= 0` to the front
///   and a position `>= len` to the back;
/// - [`delete_at`](Sequence::delete_at) treats a position `<= 0` as the front
///   and does nothing for a position `>= len`.
pub struct Sequence {
    pub(crate) head: Link,
    _marker: PhantomData<Box<Node>>,
}

/// A link to a node, `None` at either end of the chain.
pub(crate) type Link = Option<NonNull<Node>>;

pub(crate) struct Node {
    pub(crate) value: i32,
    /// The owning link. Every node is released through the chain of `next`
    /// links starting from the head, never through `prev`.
    pub(crate) next: Link,
    pub(crate) prev: Link,
}

impl Node {
    /// Create a detached node, with both links set to `None`, in memory
    /// obtained from `alloc`.
    pub(crate) fn try_new_detached(
        value: i32,
        alloc: AllocFn,
    ) -> Result<NonNull<Node>, AllocError> {
        try_leak_box_with(Node::unlinked(value), alloc)
    }

    /// Like [`Node::try_new_detached`] with the global allocator, but aborts on
    /// allocation failure.
    pub(crate) fn new_detached(value: i32) -> NonNull<Node> {
        leak_box(Node::unlinked(value))
    }

    fn unlinked(value: i32) -> Node {
        Node {
            value,
            next: None,
            prev: None,
        }
    }

    /// Release a node that is no longer reachable from any sequence, and
    /// return its value.
    ///
    /// It is unsafe because `node` must come from [`Node::new_detached`] or
    /// [`Node::try_new_detached`] and must not be released twice.
    pub(crate) unsafe fn release(node: NonNull<Node>) -> i32 {
        Box::from_raw(node.as_ptr()).value
    }
}

/// Check that `prev` and `next` are linked to each other in both directions.
#[cfg(debug_assertions)]
fn assert_adjacent(prev: NonNull<Node>, next: NonNull<Node>) {
    // SAFETY: both nodes belong to the sequence being spliced.
    unsafe {
        assert_eq!(prev.as_ref().next, Some(next));
        assert_eq!(next.as_ref().prev, Some(prev));
    }
}

/// Where a position lands when walking from the head.
pub(crate) enum Seek {
    /// The node currently at the position.
    At(NonNull<Node>),
    /// The walk ran off the end; holds the last node of a non-empty sequence.
    PastEnd(NonNull<Node>),
    Empty,
}

// private methods
impl Sequence {
    pub(crate) fn back_node(&self) -> Link {
        let mut node = self.head?;
        // SAFETY: every node reachable from `head` is owned by `self`.
        unsafe {
            while let Some(next) = node.as_ref().next {
                node = next;
            }
        }
        Some(node)
    }

    pub(crate) fn seek(&self, pos: usize) -> Seek {
        let mut node = match self.head {
            Some(head) => head,
            None => return Seek::Empty,
        };
        for _ in 0..pos {
            // SAFETY: every node reachable from `head` is owned by `self`.
            match unsafe { node.as_ref().next } {
                Some(next) => node = next,
                None => return Seek::PastEnd(node),
            }
        }
        Seek::At(node)
    }

    /// Link a detached node in front of the first node.
    ///
    /// It is unsafe because `node` must be detached (not owned by any sequence).
    pub(crate) unsafe fn link_front(&mut self, mut node: NonNull<Node>) {
        node.as_mut().prev = None;
        node.as_mut().next = self.head;
        if let Some(mut head) = self.head {
            head.as_mut().prev = Some(node);
        }
        self.head = Some(node);

        #[cfg(debug_assertions)]
        {
            self.assert_front(Some(node));
            if let Some(next) = node.as_ref().next {
                assert_adjacent(node, next);
            }
        }
    }

    /// Link a detached node right after `prev`.
    ///
    /// It is unsafe because it does not check whether `prev` belongs to the
    /// list, or whether `node` is detached.
    pub(crate) unsafe fn link_after(&mut self, mut prev: NonNull<Node>, mut node: NonNull<Node>) {
        let next = prev.as_ref().next;
        node.as_mut().prev = Some(prev);
        node.as_mut().next = next;
        if let Some(mut next) = next {
            next.as_mut().prev = Some(node);
        }
        prev.as_mut().next = Some(node);

        #[cfg(debug_assertions)]
        {
            assert_adjacent(prev, node);
            if let Some(next) = next {
                assert_adjacent(node, next);
            }
        }
    }

    /// Link a detached node right before `next`, which may be the first node.
    ///
    /// It is unsafe because it does not check whether `next` belongs to the
    /// list, or whether `node` is detached.
    pub(crate) unsafe fn link_before(&mut self, next: NonNull<Node>, node: NonNull<Node>) {
        match next.as_ref().prev {
            Some(prev) => self.link_after(prev, node),
            None => self.link_front(node),
        }
    }

    /// Splice a node out of the list, reconnecting its neighbours, and release it.
    ///
    /// It is unsafe because it does not check whether `node` belongs to the list.
    pub(crate) unsafe fn unlink(&mut self, node: NonNull<Node>) -> i32 {
        let (prev, next) = (node.as_ref().prev, node.as_ref().next);
        match prev {
            Some(mut prev) => prev.as_mut().next = next,
            None => self.head = next,
        }
        if let Some(mut next) = next {
            next.as_mut().prev = prev;
        }

        #[cfg(debug_assertions)]
        match (prev, next) {
            (Some(prev), Some(next)) => assert_adjacent(prev, next),
            (Some(prev), None) => assert_eq!(prev.as_ref().next, None),
            (None, next) => self.assert_front(next),
        }

        Node::release(node)
    }

    /// Check that `head` is the first node and has no `prev` link.
    #[cfg(debug_assertions)]
    fn assert_front(&self, head: Link) {
        assert_eq!(self.head, head);
        if let Some(head) = head {
            // SAFETY: `head` is owned by `self`.
            unsafe { assert_eq!(head.as_ref().prev, None) };
        }
    }

    fn try_attach<F>(&mut self, value: i32, alloc: AllocFn, attach: F) -> Result<(), AllocError>
    where
        F: FnOnce(&mut Self, NonNull<Node>),
    {
        let node = Node::try_new_detached(value, alloc)?;
        attach(self, node);
        Ok(())
    }

    fn attach_front(&mut self, node: NonNull<Node>) {
        // SAFETY: `node` was just allocated and is detached.
        unsafe {
            self.link_front(node);
            trace!(value = node.as_ref().value, "pushed front");
        }
    }

    fn attach_back(&mut self, node: NonNull<Node>) {
        // SAFETY: `node` was just allocated and is detached, and the back
        // node is owned by `self`.
        unsafe {
            match self.back_node() {
                Some(back) => self.link_after(back, node),
                None => self.link_front(node),
            }
            trace!(value = node.as_ref().value, "pushed back");
        }
    }

    fn attach_at(&mut self, pos: isize, node: NonNull<Node>) {
        let pos = match usize::try_from(pos) {
            Ok(pos) if pos > 0 => pos,
            _ => return self.attach_front(node),
        };
        // SAFETY: `node` was just allocated and is detached, and the nodes
        // found by `seek` are owned by `self`.
        unsafe {
            match self.seek(pos) {
                Seek::At(at) => self.link_before(at, node),
                Seek::PastEnd(back) => self.link_after(back, node),
                Seek::Empty => self.link_front(node),
            }
            trace!(pos, value = node.as_ref().value, "inserted");
        }
    }
}

impl Sequence {
    /// Create an empty `Sequence`
    ///
    /// # Examples
    /// ```
    /// use linked_sequence::Sequence;
    /// let seq = Sequence::new();
    /// assert!(seq.is_empty());
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self {
            head: None,
            _marker: PhantomData,
        }
    }

    /// Returns `true` if the `Sequence` is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Returns the length of the `Sequence`, by walking it.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_sequence::Sequence;
    ///
    /// let mut seq = Sequence::new();
    /// assert_eq!(seq.len(), 0);
    ///
    /// seq.push_front(2);
    /// seq.push_back(3);
    /// assert_eq!(seq.len(), 2);
    /// ```
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Provides the first value, or `None` if the sequence is empty.
    #[inline]
    pub fn front(&self) -> Option<i32> {
        // SAFETY: `head` is owned by `self`.
        self.head.map(|head| unsafe { head.as_ref().value })
    }

    /// Provides the last value, or `None` if the sequence is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    pub fn back(&self) -> Option<i32> {
        // SAFETY: the back node is owned by `self`.
        self.back_node().map(|back| unsafe { back.as_ref().value })
    }

    /// Provides the value at `pos`, or `None` if `pos >= len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_sequence::Sequence;
    ///
    /// let seq = Sequence::from([4, 5, 6]);
    /// assert_eq!(seq.get(1), Some(5));
    /// assert_eq!(seq.get(3), None);
    /// ```
    pub fn get(&self, pos: usize) -> Option<i32> {
        match self.seek(pos) {
            // SAFETY: `node` is owned by `self`.
            Seek::At(node) => Some(unsafe { node.as_ref().value }),
            Seek::PastEnd(_) | Seek::Empty => None,
        }
    }

    /// Adds a value first in the sequence.
    ///
    /// Aborts the process if the node cannot be allocated; see
    /// [`try_push_front`](Sequence::try_push_front) for a fallible version.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_sequence::Sequence;
    ///
    /// let mut seq = Sequence::new();
    ///
    /// seq.push_front(2);
    /// assert_eq!(seq.front(), Some(2));
    ///
    /// seq.push_front(1);
    /// assert_eq!(seq.to_vec(), vec![1, 2]);
    /// ```
    pub fn push_front(&mut self, value: i32) {
        self.attach_front(Node::new_detached(value));
    }

    /// Adds a value first in the sequence, or returns `AllocError` if the node
    /// cannot be allocated. The sequence is unchanged on error.
    pub fn try_push_front(&mut self, value: i32) -> Result<(), AllocError> {
        self.try_attach(value, alloc, Self::attach_front)
    }

    /// Appends a value to the back of the sequence.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time, as the back has to be
    /// found by walking the sequence.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_sequence::Sequence;
    ///
    /// let mut seq = Sequence::new();
    /// seq.push_back(1);
    /// seq.push_back(3);
    /// assert_eq!(seq.back(), Some(3));
    /// assert_eq!(seq.to_vec(), vec![1, 3]);
    /// ```
    pub fn push_back(&mut self, value: i32) {
        self.attach_back(Node::new_detached(value));
    }

    /// Appends a value to the back of the sequence, or returns `AllocError` if
    /// the node cannot be allocated. The sequence is unchanged on error.
    pub fn try_push_back(&mut self, value: i32) -> Result<(), AllocError> {
        self.try_attach(value, alloc, Self::attach_back)
    }

    /// Inserts a value so that it ends up at position `pos`.
    ///
    /// A position `<= 0` inserts at the front, and a position `>= len` appends
    /// at the back. Otherwise the new node is spliced right before the node
    /// currently at `pos`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_sequence::Sequence;
    ///
    /// let mut seq = Sequence::from([1, 3, 2]);
    ///
    /// seq.insert_at(1, 10);
    /// assert_eq!(seq.to_vec(), vec![1, 10, 3, 2]);
    ///
    /// seq.insert_at(-5, 0);
    /// seq.insert_at(10_000, 99);
    /// assert_eq!(seq.to_vec(), vec![0, 1, 10, 3, 2, 99]);
    /// ```
    pub fn insert_at(&mut self, pos: isize, value: i32) {
        self.attach_at(pos, Node::new_detached(value));
    }

    /// Like [`insert_at`](Sequence::insert_at), but returns `AllocError` if the
    /// node cannot be allocated. The sequence is unchanged on error.
    pub fn try_insert_at(&mut self, pos: isize, value: i32) -> Result<(), AllocError> {
        self.try_attach(value, alloc, |seq, node| seq.attach_at(pos, node))
    }

    /// Removes the value at position `pos` and returns it.
    ///
    /// A position `<= 0` removes the first value. Nothing happens, and `None`
    /// is returned, if the sequence is empty or `pos >= len`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_sequence::Sequence;
    ///
    /// let mut seq = Sequence::from([1, 10, 3, 2]);
    ///
    /// assert_eq!(seq.delete_at(0), Some(1));
    /// assert_eq!(seq.delete_at(2), Some(2));
    /// assert_eq!(seq.delete_at(7), None);
    /// assert_eq!(seq.to_vec(), vec![10, 3]);
    /// ```
    pub fn delete_at(&mut self, pos: isize) -> Option<i32> {
        let pos = usize::try_from(pos).unwrap_or(0);
        match self.seek(pos) {
            Seek::At(node) => {
                // SAFETY: `node` was found by walking `self`.
                let value = unsafe { self.unlink(node) };
                trace!(pos, value, "deleted");
                Some(value)
            }
            Seek::PastEnd(_) | Seek::Empty => {
                trace!(pos, "delete out of range, ignored");
                None
            }
        }
    }

    /// Removes the first value and returns it, or `None` if the sequence is
    /// empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    pub fn pop_front(&mut self) -> Option<i32> {
        let head = self.head?;
        // SAFETY: `head` is owned by `self`.
        Some(unsafe { self.unlink(head) })
    }

    /// Releases every node, leaving the sequence empty.
    ///
    /// Calling it on an empty sequence does nothing, so it is safe to call any
    /// number of times.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_sequence::Sequence;
    ///
    /// let mut seq = Sequence::from([1, 2, 3]);
    /// seq.free_all();
    /// assert!(seq.is_empty());
    /// seq.free_all();
    /// assert!(seq.is_empty());
    /// ```
    pub fn free_all(&mut self) {
        if self.is_empty() {
            return;
        }
        let mut released = 0_usize;
        while self.pop_front().is_some() {
            released += 1;
        }
        trace!(released, "freed all nodes");
    }

    /// Collects the values from head to tail.
    pub fn to_vec(&self) -> Vec<i32> {
        self.iter().collect()
    }

    /// Provides a forward iterator over the values.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_sequence::Sequence;
    ///
    /// let seq = Sequence::from([0, 1, 2]);
    ///
    /// let mut iter = seq.iter();
    /// assert_eq!(iter.next(), Some(0));
    /// assert_eq!(iter.next(), Some(1));
    /// assert_eq!(iter.next(), Some(2));
    /// assert_eq!(iter.next(), None);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self)
    }

    /// Provides a forward iterator with mutable references to the values.
    ///
    /// Only the values can be changed, never the links.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_sequence::Sequence;
    ///
    /// let mut seq = Sequence::from([0, 1, 2]);
    /// for value in seq.iter_mut() {
    ///     *value += 10;
    /// }
    /// assert_eq!(seq.to_vec(), vec![10, 11, 12]);
    /// ```
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_> {
        IterMut::new(self)
    }

    /// Provides an iterator from the last value to the first one, following
    /// the `prev` links.
    ///
    /// Creating it walks to the back of the sequence first.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_sequence::Sequence;
    ///
    /// let seq = Sequence::from([0, 1, 2]);
    /// assert_eq!(seq.iter_rev().collect::<Vec<_>>(), vec![2, 1, 0]);
    /// ```
    pub fn iter_rev(&self) -> IterRev<'_> {
        IterRev::new(self)
    }
}

impl Debug for Sequence {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Values separated by a single space, head to tail.
impl Display for Sequence {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut iter = self.iter();
        if let Some(first) = iter.next() {
            write!(f, "{}", first)?;
            for value in iter {
                write!(f, " {}", value)?;
            }
        }
        Ok(())
    }
}

impl Default for Sequence {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Sequence {
    fn drop(&mut self) {
        self.free_all();
    }
}

unsafe impl Send for Sequence {}

unsafe impl Sync for Sequence {}

/// Hooks that corrupt the structure on purpose, to exercise the integrity
/// diagnostics.
#[cfg(test)]
impl Sequence {
    /// Point the `next` link of the last node to the node at `target`,
    /// returning the last node for [`Sequence::unlink_tail`].
    ///
    /// The sequence must be restored before it is dropped.
    pub(crate) unsafe fn link_tail_to(&mut self, target: usize) -> NonNull<Node> {
        let mut back = self.back_node().expect("cannot corrupt an empty sequence");
        let target = match self.seek(target) {
            Seek::At(node) => node,
            _ => panic!("cannot link the tail to a nonexistent node"),
        };
        back.as_mut().next = Some(target);
        back
    }

    pub(crate) unsafe fn unlink_tail(&mut self, mut back: NonNull<Node>) {
        back.as_mut().next = None;
    }
}

#[cfg(test)]
mod tests {
    use crate::error::out_of_memory;
    use crate::list::Sequence;
    use crate::AllocError;

    #[test]
    fn sequence_create() {
        let mut seq = Sequence::new();
        assert!(seq.is_empty());
        seq.push_back(1);
        assert!(!seq.is_empty());
        assert_eq!(seq.pop_front(), Some(1));
        assert!(seq.is_empty());
        assert_eq!(seq.pop_front(), None);
    }

    #[test]
    fn sequence_push() {
        let mut seq = Sequence::new();
        assert_eq!(seq.front(), None);
        assert_eq!(seq.back(), None);

        seq.push_back(1);
        assert_eq!(seq.front(), Some(1));
        assert_eq!(seq.back(), Some(1));

        seq.push_front(2);
        seq.push_back(3);
        assert_eq!(seq.front(), Some(2));
        assert_eq!(seq.back(), Some(3));
        assert_eq!(seq.to_vec(), vec![2, 1, 3]);
        assert_eq!(seq.len(), 3);
        assert!(seq.is_well_formed());
    }

    #[test]
    fn sequence_try_push() -> Result<(), AllocError> {
        let mut seq = Sequence::new();
        seq.try_push_back(2)?;
        seq.try_push_front(1)?;
        seq.try_insert_at(1, 5)?;
        assert_eq!(seq.to_vec(), vec![1, 5, 2]);
        assert!(seq.is_well_formed());
        Ok(())
    }

    #[test]
    fn sequence_try_push_out_of_memory() {
        fn test_case(values: &[i32]) {
            let mut seq: Sequence = values.iter().copied().collect();
            let fronts = seq.try_attach(9, out_of_memory, Sequence::attach_front);
            let backs = seq.try_attach(9, out_of_memory, Sequence::attach_back);
            assert_eq!(fronts, Err(AllocError));
            assert_eq!(backs, Err(AllocError));
            for pos in -1..=values.len() as isize + 1 {
                let inserted =
                    seq.try_attach(9, out_of_memory, |seq, node| seq.attach_at(pos, node));
                assert_eq!(inserted, Err(AllocError), "pos = {}", pos);
            }
            assert_eq!(seq.to_vec(), values);
            assert!(seq.is_well_formed());

            // the sequence keeps working after a failed allocation
            seq.push_back(9);
            assert_eq!(seq.back(), Some(9));
            assert!(seq.is_well_formed());
        }
        test_case(&[]);
        test_case(&[1]);
        test_case(&[1, 2, 3]);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic]
    fn sequence_splice_check_catches_broken_link() {
        let seq = Sequence::from([1, 2, 3]);
        let first = seq.head.unwrap();
        let third = seq.back_node().unwrap();
        super::assert_adjacent(first, third);
    }

    #[test]
    fn sequence_splices_keep_neighbours_adjacent() {
        // in debug builds every splice also checks its neighbours
        let mut seq = Sequence::new();
        for (i, value) in (0..16).enumerate() {
            seq.insert_at((i as isize * 7) % (i as isize + 1), value);
        }
        assert_eq!(seq.len(), 16);
        assert!(seq.is_well_formed());
        while seq.delete_at(seq.len() as isize / 2).is_some() {
            assert!(seq.is_well_formed());
        }
    }

    #[test]
    fn sequence_insert_at() {
        let mut seq = Sequence::new();
        seq.insert_at(3, 7);
        assert_eq!(seq.to_vec(), vec![7]);

        let mut seq = Sequence::from([0, 1, 2, 3]);
        seq.insert_at(0, 10);
        assert_eq!(seq.to_vec(), vec![10, 0, 1, 2, 3]);
        seq.insert_at(2, 11);
        assert_eq!(seq.to_vec(), vec![10, 0, 11, 1, 2, 3]);
        seq.insert_at(5, 12);
        assert_eq!(seq.to_vec(), vec![10, 0, 11, 1, 2, 12, 3]);
        seq.insert_at(7, 13);
        assert_eq!(seq.to_vec(), vec![10, 0, 11, 1, 2, 12, 3, 13]);
        assert!(seq.is_well_formed());
    }

    #[test]
    fn sequence_insert_at_clamps() {
        let mut front = Sequence::from([1, 2, 3]);
        let mut clamped = front.clone();
        front.push_front(9);
        clamped.insert_at(-5, 9);
        assert_eq!(front, clamped);
        clamped.insert_at(isize::MIN, 8);
        assert_eq!(clamped.front(), Some(8));

        let mut back = Sequence::from([1, 2, 3]);
        let mut clamped = back.clone();
        back.push_back(9);
        clamped.insert_at(10_000, 9);
        assert_eq!(back, clamped);
        clamped.insert_at(isize::MAX, 8);
        assert_eq!(clamped.back(), Some(8));
        assert!(clamped.is_well_formed());
    }

    #[test]
    fn sequence_delete_at() {
        let mut seq = Sequence::new();
        assert_eq!(seq.delete_at(0), None);
        assert_eq!(seq.delete_at(-1), None);

        let mut seq: Sequence = (0..6).collect();
        assert_eq!(seq.delete_at(-3), Some(0));
        assert_eq!(seq.to_vec(), vec![1, 2, 3, 4, 5]);
        assert_eq!(seq.delete_at(4), Some(5));
        assert_eq!(seq.to_vec(), vec![1, 2, 3, 4]);
        assert_eq!(seq.delete_at(1), Some(2));
        assert_eq!(seq.to_vec(), vec![1, 3, 4]);
        assert!(seq.is_well_formed());

        let before = seq.clone();
        assert_eq!(seq.delete_at(seq.len() as isize), None);
        assert_eq!(seq.delete_at(seq.len() as isize + 5), None);
        assert_eq!(seq, before);

        while seq.delete_at(0).is_some() {}
        assert!(seq.is_empty());
    }

    #[test]
    fn sequence_free_all() {
        let mut seq = Sequence::new();
        seq.free_all();
        assert!(seq.is_empty());

        seq.extend([1, 2, 3]);
        seq.free_all();
        assert!(seq.is_empty());
        seq.free_all();
        assert!(seq.is_empty());

        seq.push_back(4);
        assert_eq!(seq.to_vec(), vec![4]);
    }

    #[test]
    fn sequence_get() {
        let seq = Sequence::from([5, 6, 7]);
        assert_eq!(seq.get(0), Some(5));
        assert_eq!(seq.get(2), Some(7));
        assert_eq!(seq.get(3), None);
        assert_eq!(Sequence::new().get(0), None);
    }

    #[test]
    fn sequence_fmt() {
        let seq = Sequence::from([1, -2, 3]);
        assert_eq!(seq.to_string(), "1 -2 3");
        assert_eq!(format!("{:?}", seq), "[1, -2, 3]");
        assert_eq!(Sequence::new().to_string(), "");
    }

    #[test]
    fn sequence_scenario() {
        let mut seq = Sequence::new();
        seq.push_back(1);
        seq.push_back(3);
        seq.push_back(2);
        seq.insert_at(1, 10);
        assert_eq!(seq.to_vec(), vec![1, 10, 3, 2]);
        seq.delete_at(0);
        assert_eq!(seq.to_vec(), vec![10, 3, 2]);
        seq.sort();
        assert_eq!(seq.to_vec(), vec![2, 3, 10]);
        seq.reverse();
        assert_eq!(seq.to_vec(), vec![10, 3, 2]);
        assert!(!seq.has_cycle());
    }
}
