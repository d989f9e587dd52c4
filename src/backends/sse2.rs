//! SSE2 backend implementation (x86/x86-64)
//!
//! This backend provides two-lane (128-bit) f64 operations using SSE2
//! instructions, which are baseline on every x86-64 CPU. When the build also
//! enables SSE4.1 (`-C target-feature=+sse4.1`), the blend and `any` paths
//! use the dedicated `blendv`/`ptest` instructions.
//!
//! **Note**: This implementation assumes SSE2 is available when the `sse2`
//! feature is enabled. Backend selection is compile time only.

// This backend only compiles on x86/x86_64 targets
#![cfg(any(target_arch = "x86", target_arch = "x86_64"))]

use crate::align::is_aligned;
use crate::traits::{LaneMask, LaneVector};
use core::fmt;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};

#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::*;

#[cfg(target_arch = "x86")]
use core::arch::x86::*;

/// SSE2 lane vector (two f64 lanes)
///
/// Wraps the `__m128d` intrinsic type.
#[derive(Copy, Clone)]
#[repr(transparent)]
pub struct Sse2Lanes(__m128d);

/// SSE2 mask (two-lane mask)
///
/// Uses `__m128d` to represent per-lane boolean values as all-ones/all-zeros
/// bit patterns, the same register shape as the vector itself.
#[derive(Copy, Clone)]
#[repr(transparent)]
pub struct Sse2Mask(__m128d);

impl Sse2Lanes {
    /// Build a vector from a literal list of lane values
    #[inline(always)]
    pub fn from_array(values: [f64; 2]) -> Self {
        unsafe { Sse2Lanes(_mm_loadu_pd(values.as_ptr())) }
    }

    /// Lane values in lane order
    #[inline(always)]
    pub fn to_array(self) -> [f64; 2] {
        let mut out = [0.0; 2];
        unsafe { _mm_storeu_pd(out.as_mut_ptr(), self.0) };
        out
    }

    /// Zero-cost reinterpretation of an already-built register value
    #[inline(always)]
    pub fn from_register(raw: __m128d) -> Self {
        Sse2Lanes(raw)
    }

    /// The underlying register value
    #[inline(always)]
    pub fn to_register(self) -> __m128d {
        self.0
    }
}

impl Add for Sse2Lanes {
    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        unsafe { Sse2Lanes(_mm_add_pd(self.0, rhs.0)) }
    }
}

impl AddAssign for Sse2Lanes {
    #[inline(always)]
    fn add_assign(&mut self, rhs: Self) {
        self.0 = unsafe { _mm_add_pd(self.0, rhs.0) };
    }
}

impl Sub for Sse2Lanes {
    type Output = Self;

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        unsafe { Sse2Lanes(_mm_sub_pd(self.0, rhs.0)) }
    }
}

impl SubAssign for Sse2Lanes {
    #[inline(always)]
    fn sub_assign(&mut self, rhs: Self) {
        self.0 = unsafe { _mm_sub_pd(self.0, rhs.0) };
    }
}

impl Mul for Sse2Lanes {
    type Output = Self;

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        unsafe { Sse2Lanes(_mm_mul_pd(self.0, rhs.0)) }
    }
}

impl MulAssign for Sse2Lanes {
    #[inline(always)]
    fn mul_assign(&mut self, rhs: Self) {
        self.0 = unsafe { _mm_mul_pd(self.0, rhs.0) };
    }
}

impl Div for Sse2Lanes {
    type Output = Self;

    #[inline(always)]
    fn div(self, rhs: Self) -> Self {
        unsafe { Sse2Lanes(_mm_div_pd(self.0, rhs.0)) }
    }
}

impl DivAssign for Sse2Lanes {
    #[inline(always)]
    fn div_assign(&mut self, rhs: Self) {
        self.0 = unsafe { _mm_div_pd(self.0, rhs.0) };
    }
}

impl LaneVector for Sse2Lanes {
    type Scalar = f64;
    type Mask = Sse2Mask;

    const LANES: usize = 2;
    const ALIGN: usize = 16;

    #[inline(always)]
    fn splat(value: f64) -> Self {
        unsafe { Sse2Lanes(_mm_set1_pd(value)) }
    }

    #[inline(always)]
    fn from_slice(slice: &[f64]) -> Self {
        assert!(slice.len() >= Self::LANES, "Slice too short for lane load");
        unsafe { Sse2Lanes(_mm_loadu_pd(slice.as_ptr())) }
    }

    #[inline(always)]
    fn to_slice(self, slice: &mut [f64]) {
        assert!(slice.len() >= Self::LANES, "Slice too short for lane store");
        unsafe { _mm_storeu_pd(slice.as_mut_ptr(), self.0) }
    }

    #[inline(always)]
    unsafe fn load(ptr: *const f64) -> Self {
        Sse2Lanes(_mm_loadu_pd(ptr))
    }

    #[inline(always)]
    unsafe fn load_aligned(ptr: *const f64) -> Self {
        debug_assert!(is_aligned(ptr, Self::ALIGN), "misaligned lane load");
        Sse2Lanes(_mm_load_pd(ptr))
    }

    #[inline(always)]
    unsafe fn store(self, ptr: *mut f64) {
        _mm_storeu_pd(ptr, self.0);
    }

    #[inline(always)]
    unsafe fn store_aligned(self, ptr: *mut f64) {
        debug_assert!(is_aligned(ptr, Self::ALIGN), "misaligned lane store");
        _mm_store_pd(ptr, self.0);
    }

    #[inline(always)]
    unsafe fn store_nt(self, ptr: *mut f64) {
        debug_assert!(is_aligned(ptr, Self::ALIGN), "misaligned streaming store");
        _mm_stream_pd(ptr, self.0);
    }

    #[inline(always)]
    unsafe fn gather(base: *const f64, offsets: &[i32]) -> Self {
        debug_assert!(offsets.len() >= Self::LANES, "offset list too short");
        let lo = _mm_load_sd(base.offset(offsets[0] as isize));
        Sse2Lanes(_mm_loadh_pd(lo, base.offset(offsets[1] as isize)))
    }

    #[inline(always)]
    unsafe fn scatter(self, base: *mut f64, offsets: &[i32]) {
        debug_assert!(offsets.len() >= Self::LANES, "offset list too short");
        // Ascending lane order: on colliding offsets lane 1 wins.
        _mm_storel_pd(base.offset(offsets[0] as isize), self.0);
        _mm_storeh_pd(base.offset(offsets[1] as isize), self.0);
    }

    #[inline(always)]
    fn extract(self, lane: usize) -> f64 {
        debug_assert!(lane < Self::LANES, "lane index out of range");
        unsafe {
            if lane == 0 {
                _mm_cvtsd_f64(self.0)
            } else {
                _mm_cvtsd_f64(_mm_unpackhi_pd(self.0, self.0))
            }
        }
    }

    #[cfg(target_feature = "sse4.1")]
    #[inline(always)]
    fn any(self) -> bool {
        unsafe {
            let bits = _mm_castpd_si128(self.0);
            _mm_testz_si128(bits, bits) == 0
        }
    }

    #[cfg(not(target_feature = "sse4.1"))]
    #[inline(always)]
    fn any(self) -> bool {
        unsafe {
            // Bytewise compare against zero: all-0xff means every bit clear.
            let bits = _mm_castpd_si128(self.0);
            let zeroed = _mm_cmpeq_epi8(bits, _mm_setzero_si128());
            _mm_movemask_epi8(zeroed) != 0xffff
        }
    }

    #[inline(always)]
    fn sqrt(self) -> Self {
        unsafe { Sse2Lanes(_mm_sqrt_pd(self.0)) }
    }

    #[inline(always)]
    fn lt(self, rhs: Self) -> Sse2Mask {
        unsafe { Sse2Mask(_mm_cmplt_pd(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn le(self, rhs: Self) -> Sse2Mask {
        unsafe { Sse2Mask(_mm_cmple_pd(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn eq(self, rhs: Self) -> Sse2Mask {
        unsafe { Sse2Mask(_mm_cmpeq_pd(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn gt(self, rhs: Self) -> Sse2Mask {
        unsafe { Sse2Mask(_mm_cmpgt_pd(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn ge(self, rhs: Self) -> Sse2Mask {
        unsafe { Sse2Mask(_mm_cmpge_pd(self.0, rhs.0)) }
    }

    #[cfg(target_feature = "sse4.1")]
    #[inline(always)]
    fn blend(&mut self, mask: Sse2Mask, other: Self) {
        self.0 = unsafe { _mm_blendv_pd(self.0, other.0, mask.0) };
    }

    #[cfg(not(target_feature = "sse4.1"))]
    #[inline(always)]
    fn blend(&mut self, mask: Sse2Mask, other: Self) {
        self.0 = unsafe {
            _mm_or_pd(
                _mm_and_pd(mask.0, other.0),
                _mm_andnot_pd(mask.0, self.0),
            )
        };
    }
}

impl LaneMask for Sse2Mask {
    // movemask reads the per-lane sign bits, which comparison-produced masks
    // set iff the lane is true.

    #[inline(always)]
    fn all(self) -> bool {
        unsafe { _mm_movemask_pd(self.0) == 0b11 }
    }

    #[inline(always)]
    fn any(self) -> bool {
        unsafe { _mm_movemask_pd(self.0) != 0 }
    }

    #[inline(always)]
    fn none(self) -> bool {
        unsafe { _mm_movemask_pd(self.0) == 0 }
    }

    #[inline(always)]
    fn and(self, rhs: Self) -> Self {
        unsafe { Sse2Mask(_mm_and_pd(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn or(self, rhs: Self) -> Self {
        unsafe { Sse2Mask(_mm_or_pd(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn not(self) -> Self {
        unsafe {
            let ones = _mm_cmpeq_pd(_mm_setzero_pd(), _mm_setzero_pd());
            Sse2Mask(_mm_andnot_pd(self.0, ones))
        }
    }

    #[inline(always)]
    fn xor(self, rhs: Self) -> Self {
        unsafe { Sse2Mask(_mm_xor_pd(self.0, rhs.0)) }
    }
}

impl fmt::Display for Sse2Lanes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lanes = self.to_array();
        write!(f, "[{}, {}]", lanes[0], lanes[1])
    }
}

impl fmt::Debug for Sse2Lanes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
