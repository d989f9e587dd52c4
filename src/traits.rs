//! Core lane abstraction traits
//!
//! This module defines the traits every backend implements. Code written
//! against [`LaneVector`] is backend-agnostic and compiles to the native
//! vector instructions of whichever backend the build selected.

use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};

/// Fixed-width lane vector abstraction
///
/// A `LaneVector` is a value type holding exactly [`LANES`](Self::LANES)
/// floating-point elements packed into one hardware vector register. It has no
/// identity beyond its bit pattern: copying a vector duplicates register
/// content and never aliases memory.
///
/// The operator supertraits give vector code the same surface syntax as scalar
/// arithmetic; all of them are element-wise with IEEE-754 semantics. Division
/// by zero, overflow, and NaN operands produce the IEEE special values rather
/// than signaled failures.
///
/// # Example
///
/// ```rust
/// use lanevec::{DefaultLanes, LaneVector};
///
/// let a = DefaultLanes::from_array([3.0, -2.0]);
/// let b = DefaultLanes::from_array([1.0, 1.0]);
/// let sum = a + b;
/// assert_eq!(sum.extract(0), 4.0);
/// assert_eq!(sum.extract(1), -1.0);
/// ```
pub trait LaneVector:
    Copy
    + Clone
    + Sized
    + Add<Output = Self>
    + AddAssign
    + Sub<Output = Self>
    + SubAssign
    + Mul<Output = Self>
    + MulAssign
    + Div<Output = Self>
    + DivAssign
{
    /// The underlying scalar element type
    type Scalar: Copy;

    /// Associated mask type for comparison results and blend selectors
    type Mask: LaneMask;

    /// Number of lanes held by one vector
    const LANES: usize;

    /// Byte alignment required by the aligned and streaming memory operations
    ///
    /// Equals the native byte width of one register for this backend.
    /// Collaborators allocating backing storage must honor this or use only
    /// the unaligned variants.
    const ALIGN: usize;

    // Construction

    /// Broadcast a scalar value to all lanes
    fn splat(value: Self::Scalar) -> Self;

    /// Load from a slice (must have at least LANES elements)
    ///
    /// # Panics
    ///
    /// Panics if the slice has fewer than LANES elements.
    fn from_slice(slice: &[Self::Scalar]) -> Self;

    /// Store to a slice (must have at least LANES elements)
    ///
    /// # Panics
    ///
    /// Panics if the slice has fewer than LANES elements.
    fn to_slice(self, slice: &mut [Self::Scalar]);

    // Memory transfer

    /// Load LANES contiguous elements starting at `ptr`, no alignment
    /// requirement
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for reads of LANES elements.
    unsafe fn load(ptr: *const Self::Scalar) -> Self;

    /// Load LANES contiguous elements from an aligned address
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for reads of LANES elements and aligned to
    /// [`ALIGN`](Self::ALIGN) bytes. Alignment is checked by `debug_assert!`
    /// in debug builds only; a misaligned pointer in release builds faults or
    /// reads wrong data depending on the platform.
    unsafe fn load_aligned(ptr: *const Self::Scalar) -> Self;

    /// Write LANES elements to `ptr`, no alignment requirement
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for writes of LANES elements.
    unsafe fn store(self, ptr: *mut Self::Scalar);

    /// Write LANES elements to an aligned address
    ///
    /// # Safety
    ///
    /// Same contract as [`load_aligned`](Self::load_aligned), for writes.
    unsafe fn store_aligned(self, ptr: *mut Self::Scalar);

    /// Non-temporal (streaming) store, bypassing the cache hierarchy
    ///
    /// Intended for output data not expected to be re-read soon. Streaming
    /// stores may be weakly ordered relative to subsequent loads on some
    /// architectures: callers that read the data back must issue a memory
    /// fence (e.g. `core::sync::atomic::fence`) before the dependent read.
    ///
    /// # Safety
    ///
    /// Same contract as [`store_aligned`](Self::store_aligned).
    unsafe fn store_nt(self, ptr: *mut Self::Scalar);

    /// Indexed load: lane `i` is read from `base + offsets[i]`
    ///
    /// Offsets are scalar element counts, not bytes. They need not be sorted,
    /// unique, or contiguous; reading the same address into multiple lanes is
    /// legal and deterministic.
    ///
    /// # Safety
    ///
    /// `base + offsets[i]` must be valid for reads for every lane `i`, and
    /// `offsets` must contain at least LANES entries (checked by
    /// `debug_assert!` only).
    unsafe fn gather(base: *const Self::Scalar, offsets: &[i32]) -> Self;

    /// Indexed store: lane `i` is written to `base + offsets[i]`
    ///
    /// Lanes are written in ascending lane order. When offsets collide, the
    /// highest colliding lane index wins; this ordering is part of the
    /// contract and covered by tests.
    ///
    /// # Safety
    ///
    /// `base + offsets[i]` must be valid for writes for every lane `i`, and
    /// `offsets` must contain at least LANES entries (checked by
    /// `debug_assert!` only).
    unsafe fn scatter(self, base: *mut Self::Scalar, offsets: &[i32]);

    // Reduction and extraction

    /// Scalar at logical lane index `lane`
    ///
    /// `lane` must be below LANES. The bound is checked by `debug_assert!`
    /// only; the result for an out-of-range index in release builds is
    /// unspecified.
    fn extract(self, lane: usize) -> Self::Scalar;

    /// True iff at least one lane has any bit set
    ///
    /// This is a bit-pattern test, not a numeric one: `-0.0` counts as
    /// nonzero because its sign bit is set. On masks it reads as "at least
    /// one true lane". Compiles to a branchless single-register test.
    fn any(self) -> bool;

    // Lane-wise math

    /// Lane-wise square root using the hardware unit's rounding
    ///
    /// Negative inputs yield NaN per IEEE-754, not an error.
    fn sqrt(self) -> Self;

    // Comparisons (produce masks)

    /// Lane-wise `<`, returning an all-ones/all-zeros mask per lane
    fn lt(self, rhs: Self) -> Self::Mask;

    /// Lane-wise `<=`
    fn le(self, rhs: Self) -> Self::Mask;

    /// Lane-wise `==`
    ///
    /// NaN lanes compare unequal, following the hardware's non-signaling
    /// comparison semantics.
    fn eq(self, rhs: Self) -> Self::Mask;

    /// Lane-wise `>`
    fn gt(self, rhs: Self) -> Self::Mask;

    /// Lane-wise `>=`
    fn ge(self, rhs: Self) -> Self::Mask;

    // Predicated blend

    /// Per-lane conditional select, in place
    ///
    /// For each lane `i`: keep `self[i]` where `mask[i]` is false, take
    /// `other[i]` where it is true. This is how lane-parallel branchy logic
    /// is expressed without scalar branches.
    fn blend(&mut self, mask: Self::Mask, other: Self);

    /// Three-operand form of [`blend`](Self::blend)
    ///
    /// For each lane: `mask[i] ? true_val[i] : false_val[i]`.
    #[inline(always)]
    fn select(mask: Self::Mask, true_val: Self, false_val: Self) -> Self {
        let mut out = false_val;
        out.blend(mask, true_val);
        out
    }
}

/// Per-lane boolean mask
///
/// Masks are produced by the comparison operations on [`LaneVector`] and
/// consumed by blend/select. They share the vector's register shape: a lane is
/// "true" when its bits are all ones and "false" when all zeros. Lane values
/// are only meaningful at that all-ones/all-zeros level; masks are not a
/// truthy/falsy coercion of arbitrary bit patterns.
pub trait LaneMask: Copy + Clone + Sized {
    /// True iff every lane is set
    fn all(self) -> bool;

    /// True iff at least one lane is set
    fn any(self) -> bool;

    /// True iff no lane is set
    fn none(self) -> bool;

    /// Lane-wise AND of two masks
    fn and(self, rhs: Self) -> Self;

    /// Lane-wise OR of two masks
    fn or(self, rhs: Self) -> Self;

    /// Lane-wise NOT
    fn not(self) -> Self;

    /// Lane-wise XOR of two masks
    fn xor(self, rhs: Self) -> Self;
}
