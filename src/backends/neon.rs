//! NEON backend implementation (ARM64)
//!
//! This backend provides two-lane (128-bit) f64 operations using ARM NEON
//! instructions. NEON is mandatory on ARM64, so no runtime detection is
//! needed.
//!
//! `core::arch::aarch64` exposes no non-temporal store hint, so `store_nt`
//! here is a plain aligned store; the caller-side ordering contract is
//! unchanged so code stays portable to the x86 backend.

// This backend only compiles on aarch64 targets
#![cfg(target_arch = "aarch64")]

use crate::align::is_aligned;
use crate::traits::{LaneMask, LaneVector};
use core::arch::aarch64::*;
use core::fmt;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};

/// NEON lane vector (two f64 lanes)
///
/// Wraps the `float64x2_t` intrinsic type.
#[derive(Copy, Clone)]
#[repr(transparent)]
pub struct NeonLanes(float64x2_t);

/// NEON mask (two-lane mask)
///
/// Uses `uint64x2_t` to represent per-lane boolean values as
/// all-ones/all-zeros bit patterns, the register shape NEON comparisons
/// produce.
#[derive(Copy, Clone)]
#[repr(transparent)]
pub struct NeonMask(uint64x2_t);

impl NeonLanes {
    /// Build a vector from a literal list of lane values
    #[inline(always)]
    pub fn from_array(values: [f64; 2]) -> Self {
        unsafe { NeonLanes(vld1q_f64(values.as_ptr())) }
    }

    /// Lane values in lane order
    #[inline(always)]
    pub fn to_array(self) -> [f64; 2] {
        let mut out = [0.0; 2];
        unsafe { vst1q_f64(out.as_mut_ptr(), self.0) };
        out
    }

    /// Zero-cost reinterpretation of an already-built register value
    #[inline(always)]
    pub fn from_register(raw: float64x2_t) -> Self {
        NeonLanes(raw)
    }

    /// The underlying register value
    #[inline(always)]
    pub fn to_register(self) -> float64x2_t {
        self.0
    }
}

impl Add for NeonLanes {
    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        unsafe { NeonLanes(vaddq_f64(self.0, rhs.0)) }
    }
}

impl AddAssign for NeonLanes {
    #[inline(always)]
    fn add_assign(&mut self, rhs: Self) {
        self.0 = unsafe { vaddq_f64(self.0, rhs.0) };
    }
}

impl Sub for NeonLanes {
    type Output = Self;

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        unsafe { NeonLanes(vsubq_f64(self.0, rhs.0)) }
    }
}

impl SubAssign for NeonLanes {
    #[inline(always)]
    fn sub_assign(&mut self, rhs: Self) {
        self.0 = unsafe { vsubq_f64(self.0, rhs.0) };
    }
}

impl Mul for NeonLanes {
    type Output = Self;

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        unsafe { NeonLanes(vmulq_f64(self.0, rhs.0)) }
    }
}

impl MulAssign for NeonLanes {
    #[inline(always)]
    fn mul_assign(&mut self, rhs: Self) {
        self.0 = unsafe { vmulq_f64(self.0, rhs.0) };
    }
}

impl Div for NeonLanes {
    type Output = Self;

    #[inline(always)]
    fn div(self, rhs: Self) -> Self {
        unsafe { NeonLanes(vdivq_f64(self.0, rhs.0)) }
    }
}

impl DivAssign for NeonLanes {
    #[inline(always)]
    fn div_assign(&mut self, rhs: Self) {
        self.0 = unsafe { vdivq_f64(self.0, rhs.0) };
    }
}

impl LaneVector for NeonLanes {
    type Scalar = f64;
    type Mask = NeonMask;

    const LANES: usize = 2;
    const ALIGN: usize = 16;

    #[inline(always)]
    fn splat(value: f64) -> Self {
        unsafe { NeonLanes(vdupq_n_f64(value)) }
    }

    #[inline(always)]
    fn from_slice(slice: &[f64]) -> Self {
        assert!(slice.len() >= Self::LANES, "Slice too short for lane load");
        unsafe { NeonLanes(vld1q_f64(slice.as_ptr())) }
    }

    #[inline(always)]
    fn to_slice(self, slice: &mut [f64]) {
        assert!(slice.len() >= Self::LANES, "Slice too short for lane store");
        unsafe { vst1q_f64(slice.as_mut_ptr(), self.0) }
    }

    #[inline(always)]
    unsafe fn load(ptr: *const f64) -> Self {
        NeonLanes(vld1q_f64(ptr))
    }

    #[inline(always)]
    unsafe fn load_aligned(ptr: *const f64) -> Self {
        debug_assert!(is_aligned(ptr, Self::ALIGN), "misaligned lane load");
        NeonLanes(vld1q_f64(ptr))
    }

    #[inline(always)]
    unsafe fn store(self, ptr: *mut f64) {
        vst1q_f64(ptr, self.0);
    }

    #[inline(always)]
    unsafe fn store_aligned(self, ptr: *mut f64) {
        debug_assert!(is_aligned(ptr, Self::ALIGN), "misaligned lane store");
        vst1q_f64(ptr, self.0);
    }

    #[inline(always)]
    unsafe fn store_nt(self, ptr: *mut f64) {
        debug_assert!(is_aligned(ptr, Self::ALIGN), "misaligned streaming store");
        vst1q_f64(ptr, self.0);
    }

    #[inline(always)]
    unsafe fn gather(base: *const f64, offsets: &[i32]) -> Self {
        debug_assert!(offsets.len() >= Self::LANES, "offset list too short");
        let lo = vld1_f64(base.offset(offsets[0] as isize));
        let hi = vld1_f64(base.offset(offsets[1] as isize));
        NeonLanes(vcombine_f64(lo, hi))
    }

    #[inline(always)]
    unsafe fn scatter(self, base: *mut f64, offsets: &[i32]) {
        debug_assert!(offsets.len() >= Self::LANES, "offset list too short");
        // Ascending lane order: on colliding offsets lane 1 wins.
        vst1_f64(base.offset(offsets[0] as isize), vget_low_f64(self.0));
        vst1_f64(base.offset(offsets[1] as isize), vget_high_f64(self.0));
    }

    #[inline(always)]
    fn extract(self, lane: usize) -> f64 {
        debug_assert!(lane < Self::LANES, "lane index out of range");
        unsafe {
            if lane == 0 {
                vgetq_lane_f64::<0>(self.0)
            } else {
                vgetq_lane_f64::<1>(self.0)
            }
        }
    }

    #[inline(always)]
    fn any(self) -> bool {
        // Horizontal max over the u32 view is nonzero iff any bit is set.
        unsafe { vmaxvq_u32(vreinterpretq_u32_f64(self.0)) != 0 }
    }

    #[inline(always)]
    fn sqrt(self) -> Self {
        unsafe { NeonLanes(vsqrtq_f64(self.0)) }
    }

    #[inline(always)]
    fn lt(self, rhs: Self) -> NeonMask {
        unsafe { NeonMask(vcltq_f64(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn le(self, rhs: Self) -> NeonMask {
        unsafe { NeonMask(vcleq_f64(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn eq(self, rhs: Self) -> NeonMask {
        unsafe { NeonMask(vceqq_f64(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn gt(self, rhs: Self) -> NeonMask {
        unsafe { NeonMask(vcgtq_f64(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn ge(self, rhs: Self) -> NeonMask {
        unsafe { NeonMask(vcgeq_f64(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn blend(&mut self, mask: NeonMask, other: Self) {
        self.0 = unsafe { vbslq_f64(mask.0, other.0, self.0) };
    }
}

impl LaneMask for NeonMask {
    #[inline(always)]
    fn all(self) -> bool {
        unsafe { vminvq_u32(vreinterpretq_u32_u64(self.0)) == u32::MAX }
    }

    #[inline(always)]
    fn any(self) -> bool {
        unsafe { vmaxvq_u32(vreinterpretq_u32_u64(self.0)) != 0 }
    }

    #[inline(always)]
    fn none(self) -> bool {
        !self.any()
    }

    #[inline(always)]
    fn and(self, rhs: Self) -> Self {
        unsafe { NeonMask(vandq_u64(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn or(self, rhs: Self) -> Self {
        unsafe { NeonMask(vorrq_u64(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn not(self) -> Self {
        unsafe {
            NeonMask(vreinterpretq_u64_u32(vmvnq_u32(vreinterpretq_u32_u64(
                self.0,
            ))))
        }
    }

    #[inline(always)]
    fn xor(self, rhs: Self) -> Self {
        unsafe { NeonMask(veorq_u64(self.0, rhs.0)) }
    }
}

impl fmt::Display for NeonLanes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lanes = self.to_array();
        write!(f, "[{}, {}]", lanes[0], lanes[1])
    }
}

impl fmt::Debug for NeonLanes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
