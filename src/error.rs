use std::alloc::{alloc, Layout};
use std::fmt;
use std::ptr::NonNull;

/// The error returned when a node cannot be allocated.
///
/// It is only produced by the `try_*` insertion methods of
/// [`Sequence`](crate::Sequence). The sequence is left untouched when it is
/// returned, because allocation always happens before any link is updated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AllocError;

impl fmt::Display for AllocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("memory allocation failed")
    }
}

impl std::error::Error for AllocError {}

/// A raw allocation function with the signature of [`std::alloc::alloc`].
///
/// Returning a null pointer reports that the allocator is out of memory. The
/// memory must be releasable by the global allocator.
pub(crate) type AllocFn = unsafe fn(Layout) -> *mut u8;

/// Allocate `value` on the heap and leak it, or return `AllocError` if the
/// allocator is out of memory.
///
/// The returned pointer must be reclaimed with `Box::from_raw`.
pub(crate) fn try_leak_box<T>(value: T) -> Result<NonNull<T>, AllocError> {
    try_leak_box_with(value, alloc)
}

/// Like [`try_leak_box`], with the raw allocation done by `alloc`.
pub(crate) fn try_leak_box_with<T>(value: T, alloc: AllocFn) -> Result<NonNull<T>, AllocError> {
    let layout = Layout::new::<T>();
    if layout.size() == 0 {
        return Ok(NonNull::from(Box::leak(Box::new(value))));
    }
    // SAFETY: `layout` has a non-zero size, and the memory is initialized
    // by `write` before anyone reads it. `alloc` hands out global allocator
    // memory with the layout of `T`, so `Box::from_raw` can release it.
    unsafe {
        let ptr = NonNull::new(alloc(layout).cast::<T>()).ok_or(AllocError)?;
        ptr.as_ptr().write(value);
        Ok(ptr)
    }
}

/// Like [`try_leak_box`], but aborts through the global allocation error
/// handler when the allocator is out of memory.
pub(crate) fn leak_box<T>(value: T) -> NonNull<T> {
    match try_leak_box(value) {
        Ok(ptr) => ptr,
        Err(AllocError) => std::alloc::handle_alloc_error(Layout::new::<T>()),
    }
}

/// An allocation function that always reports being out of memory.
#[cfg(test)]
pub(crate) unsafe fn out_of_memory(_: Layout) -> *mut u8 {
    std::ptr::null_mut()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    #[test]
    fn alloc_error_display() {
        assert_eq!(AllocError.to_string(), "memory allocation failed");
        let boxed: Box<dyn std::error::Error> = Box::new(AllocError);
        assert_eq!(boxed.to_string(), "memory allocation failed");
    }

    #[test]
    fn leaked_box_round_trip() {
        let ptr = try_leak_box(42_i64).unwrap();
        // SAFETY: `ptr` was just leaked from a box and is not aliased.
        let boxed = unsafe { Box::from_raw(ptr.as_ptr()) };
        assert_eq!(*boxed, 42);

        let zst = leak_box(());
        // SAFETY: as above, zero-sized boxes are handled by `Box` itself.
        drop(unsafe { Box::from_raw(zst.as_ptr()) });
    }

    #[test]
    fn leak_box_out_of_memory() {
        let shared = Rc::new(7);
        let result = try_leak_box_with(Rc::clone(&shared), out_of_memory);
        assert_eq!(result.err(), Some(AllocError));
        // the value is dropped, not leaked
        assert_eq!(Rc::strong_count(&shared), 1);

        // zero-sized values never reach the allocator
        assert!(try_leak_box_with((), out_of_memory).is_ok());
    }
}
