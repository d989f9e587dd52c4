//! Pointer alignment checks for the aligned memory-transfer family
//!
//! Backends call [`is_aligned`] inside `debug_assert!` so the alignment
//! precondition is enforced in debug builds and free in release builds.

/// True iff `ptr` is aligned to `align` bytes
///
/// `align` must be a power of two.
#[inline(always)]
pub fn is_aligned<T>(ptr: *const T, align: usize) -> bool {
    debug_assert!(align.is_power_of_two());
    (ptr as usize) & (align - 1) == 0
}
