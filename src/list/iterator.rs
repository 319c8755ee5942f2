use crate::list::{Link, Node, Sequence};
use std::fmt;
use std::iter::FusedIterator;
use std::marker::PhantomData;

/// An iterator over the values of a `Sequence`, from head to tail.
///
/// Though the `Iter` does not hold a reference from the sequence,
/// it actually *borrows* (immutably) from the sequence, so a phantom
/// marker of `&'a Sequence` is added to protect the sequence from being
/// written.
///
/// # Examples
///
/// ```compile_fail
/// use linked_sequence::Sequence;
///
/// let mut seq = Sequence::from([1, 2, 3]);
/// let mut iter = seq.iter();
///
/// // Won't compile, because seq is already borrowed immutably.
/// seq.push_back(4);
/// println!("{:?}", iter.next());
/// ```
#[derive(Clone)]
pub struct Iter<'a> {
    next: Link,
    _marker: PhantomData<&'a Sequence>,
}

impl<'a> Iter<'a> {
    pub(crate) fn new(seq: &'a Sequence) -> Self {
        Self {
            next: seq.head,
            _marker: PhantomData,
        }
    }
}

impl fmt::Debug for Iter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Iter").field(&self.clone().collect::<Vec<_>>()).finish()
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = i32;

    fn next(&mut self) -> Option<Self::Item> {
        // SAFETY: `next` is either `None` or a node of the borrowed sequence.
        let current = unsafe { self.next?.as_ref() };
        self.next = current.next;
        Some(current.value)
    }
}

impl FusedIterator for Iter<'_> {}

/// A mutable iterator over the values of a `Sequence`.
///
/// It hands out the values only, so the links of the sequence stay intact.
///
/// # Examples
///
/// `Sequence` is not readable after an `IterMut` is created.
/// ```compile_fail
/// use linked_sequence::Sequence;
///
/// let mut seq = Sequence::from([1, 2, 3]);
/// let mut iter = seq.iter_mut();
/// println!("{:?}", seq.front());
/// println!("{:?}", iter.next());
/// ```
pub struct IterMut<'a> {
    next: Link,
    _marker: PhantomData<&'a mut Sequence>,
}

impl<'a> IterMut<'a> {
    pub(crate) fn new(seq: &'a mut Sequence) -> Self {
        Self {
            next: seq.head,
            _marker: PhantomData,
        }
    }
}

impl<'a> Iterator for IterMut<'a> {
    type Item = &'a mut i32;

    fn next(&mut self) -> Option<Self::Item> {
        // SAFETY: `next` is either `None` or a node of the mutably borrowed
        // sequence, and each node is yielded at most once.
        let current: &'a mut Node = unsafe { &mut *self.next?.as_ptr() };
        self.next = current.next;
        Some(&mut current.value)
    }
}

impl FusedIterator for IterMut<'_> {}

/// An iterator over the values of a `Sequence`, from tail to head, following
/// the `prev` links.
#[derive(Clone)]
pub struct IterRev<'a> {
    prev: Link,
    _marker: PhantomData<&'a Sequence>,
}

impl<'a> IterRev<'a> {
    pub(crate) fn new(seq: &'a Sequence) -> Self {
        Self {
            prev: seq.back_node(),
            _marker: PhantomData,
        }
    }
}

impl<'a> Iterator for IterRev<'a> {
    type Item = i32;

    fn next(&mut self) -> Option<Self::Item> {
        // SAFETY: `prev` is either `None` or a node of the borrowed sequence.
        let current = unsafe { self.prev?.as_ref() };
        self.prev = current.prev;
        Some(current.value)
    }
}

impl FusedIterator for IterRev<'_> {}

/// An owning iterator over the values of a `Sequence`.
///
/// Each node is released as soon as its value is yielded.
pub struct IntoIter {
    seq: Sequence,
}

impl fmt::Debug for IntoIter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.seq).finish()
    }
}

impl Iterator for IntoIter {
    type Item = i32;

    fn next(&mut self) -> Option<Self::Item> {
        self.seq.pop_front()
    }
}

impl FusedIterator for IntoIter {}

impl IntoIterator for Sequence {
    type Item = i32;
    type IntoIter = IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { seq: self }
    }
}

impl<'a> IntoIterator for &'a Sequence {
    type Item = i32;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> IntoIterator for &'a mut Sequence {
    type Item = &'a mut i32;
    type IntoIter = IterMut<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl FromIterator<i32> for Sequence {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        let mut seq = Sequence::new();
        seq.extend(iter);
        seq
    }
}

/// Appends every value at the back.
///
/// The back is found once, so extending by *m* values takes *O*(*n* + *m*)
/// time rather than *m* calls to [`Sequence::push_back`].
impl Extend<i32> for Sequence {
    fn extend<I: IntoIterator<Item = i32>>(&mut self, iter: I) {
        let mut back = self.back_node();
        for value in iter {
            let node = Node::new_detached(value);
            // SAFETY: `node` was just allocated and is detached, and `back` is
            // the last node of `self`.
            unsafe {
                match back {
                    Some(back) => self.link_after(back, node),
                    None => self.link_front(node),
                }
            }
            back = Some(node);
        }
    }
}

impl<'a> Extend<&'a i32> for Sequence {
    fn extend<I: IntoIterator<Item = &'a i32>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied())
    }
}

impl<const N: usize> From<[i32; N]> for Sequence {
    fn from(values: [i32; N]) -> Self {
        values.into_iter().collect()
    }
}

unsafe impl Send for Iter<'_> {}

unsafe impl Sync for Iter<'_> {}

unsafe impl Send for IterMut<'_> {}

unsafe impl Sync for IterMut<'_> {}

unsafe impl Send for IterRev<'_> {}

unsafe impl Sync for IterRev<'_> {}
