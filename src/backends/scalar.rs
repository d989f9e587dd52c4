//! Scalar backend implementation
//!
//! This backend emulates a two-lane f64 register with a plain array. It works
//! on any platform and is the reference implementation the property tests
//! compare the hardware backends against.

use crate::align::is_aligned;
use crate::traits::{LaneMask, LaneVector};
use core::fmt;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};

/// Scalar lane vector (two f64 lanes in an array)
#[derive(Copy, Clone, PartialEq)]
#[repr(transparent)]
pub struct ScalarLanes([f64; 2]);

/// Scalar mask (two booleans)
#[derive(Copy, Clone, Debug, PartialEq)]
#[repr(transparent)]
pub struct ScalarMask([bool; 2]);

impl ScalarLanes {
    /// Build a vector from a literal list of lane values
    #[inline(always)]
    pub const fn from_array(values: [f64; 2]) -> Self {
        ScalarLanes(values)
    }

    /// Lane values in lane order
    #[inline(always)]
    pub const fn to_array(self) -> [f64; 2] {
        self.0
    }
}

impl Add for ScalarLanes {
    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        ScalarLanes([self.0[0] + rhs.0[0], self.0[1] + rhs.0[1]])
    }
}

impl AddAssign for ScalarLanes {
    #[inline(always)]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for ScalarLanes {
    type Output = Self;

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        ScalarLanes([self.0[0] - rhs.0[0], self.0[1] - rhs.0[1]])
    }
}

impl SubAssign for ScalarLanes {
    #[inline(always)]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Mul for ScalarLanes {
    type Output = Self;

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        ScalarLanes([self.0[0] * rhs.0[0], self.0[1] * rhs.0[1]])
    }
}

impl MulAssign for ScalarLanes {
    #[inline(always)]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl Div for ScalarLanes {
    type Output = Self;

    #[inline(always)]
    fn div(self, rhs: Self) -> Self {
        ScalarLanes([self.0[0] / rhs.0[0], self.0[1] / rhs.0[1]])
    }
}

impl DivAssign for ScalarLanes {
    #[inline(always)]
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl LaneVector for ScalarLanes {
    type Scalar = f64;
    type Mask = ScalarMask;

    const LANES: usize = 2;
    // Matches the hardware backends so allocation contracts are identical
    // across builds and misalignment surfaces in portable debug runs.
    const ALIGN: usize = 16;

    #[inline(always)]
    fn splat(value: f64) -> Self {
        ScalarLanes([value, value])
    }

    #[inline(always)]
    fn from_slice(slice: &[f64]) -> Self {
        assert!(slice.len() >= Self::LANES, "Slice too short for lane load");
        ScalarLanes([slice[0], slice[1]])
    }

    #[inline(always)]
    fn to_slice(self, slice: &mut [f64]) {
        assert!(slice.len() >= Self::LANES, "Slice too short for lane store");
        slice[0] = self.0[0];
        slice[1] = self.0[1];
    }

    #[inline(always)]
    unsafe fn load(ptr: *const f64) -> Self {
        ScalarLanes([*ptr, *ptr.add(1)])
    }

    #[inline(always)]
    unsafe fn load_aligned(ptr: *const f64) -> Self {
        debug_assert!(is_aligned(ptr, Self::ALIGN), "misaligned lane load");
        Self::load(ptr)
    }

    #[inline(always)]
    unsafe fn store(self, ptr: *mut f64) {
        *ptr = self.0[0];
        *ptr.add(1) = self.0[1];
    }

    #[inline(always)]
    unsafe fn store_aligned(self, ptr: *mut f64) {
        debug_assert!(is_aligned(ptr, Self::ALIGN), "misaligned lane store");
        self.store(ptr);
    }

    #[inline(always)]
    unsafe fn store_nt(self, ptr: *mut f64) {
        // No cache-bypassing path without intrinsics; the alignment contract
        // still holds so callers stay portable to the hardware backends.
        debug_assert!(is_aligned(ptr, Self::ALIGN), "misaligned streaming store");
        self.store(ptr);
    }

    #[inline(always)]
    unsafe fn gather(base: *const f64, offsets: &[i32]) -> Self {
        debug_assert!(offsets.len() >= Self::LANES, "offset list too short");
        ScalarLanes([
            *base.offset(offsets[0] as isize),
            *base.offset(offsets[1] as isize),
        ])
    }

    #[inline(always)]
    unsafe fn scatter(self, base: *mut f64, offsets: &[i32]) {
        debug_assert!(offsets.len() >= Self::LANES, "offset list too short");
        // Ascending lane order: on colliding offsets lane 1 wins.
        *base.offset(offsets[0] as isize) = self.0[0];
        *base.offset(offsets[1] as isize) = self.0[1];
    }

    #[inline(always)]
    fn extract(self, lane: usize) -> f64 {
        debug_assert!(lane < Self::LANES, "lane index out of range");
        if lane == 0 {
            self.0[0]
        } else {
            self.0[1]
        }
    }

    #[inline(always)]
    fn any(self) -> bool {
        (self.0[0].to_bits() | self.0[1].to_bits()) != 0
    }

    #[inline(always)]
    fn sqrt(self) -> Self {
        ScalarLanes([libm::sqrt(self.0[0]), libm::sqrt(self.0[1])])
    }

    #[inline(always)]
    fn lt(self, rhs: Self) -> ScalarMask {
        ScalarMask([self.0[0] < rhs.0[0], self.0[1] < rhs.0[1]])
    }

    #[inline(always)]
    fn le(self, rhs: Self) -> ScalarMask {
        ScalarMask([self.0[0] <= rhs.0[0], self.0[1] <= rhs.0[1]])
    }

    #[inline(always)]
    fn eq(self, rhs: Self) -> ScalarMask {
        ScalarMask([self.0[0] == rhs.0[0], self.0[1] == rhs.0[1]])
    }

    #[inline(always)]
    fn gt(self, rhs: Self) -> ScalarMask {
        ScalarMask([self.0[0] > rhs.0[0], self.0[1] > rhs.0[1]])
    }

    #[inline(always)]
    fn ge(self, rhs: Self) -> ScalarMask {
        ScalarMask([self.0[0] >= rhs.0[0], self.0[1] >= rhs.0[1]])
    }

    #[inline(always)]
    fn blend(&mut self, mask: ScalarMask, other: Self) {
        if mask.0[0] {
            self.0[0] = other.0[0];
        }
        if mask.0[1] {
            self.0[1] = other.0[1];
        }
    }
}

impl LaneMask for ScalarMask {
    #[inline(always)]
    fn all(self) -> bool {
        self.0[0] && self.0[1]
    }

    #[inline(always)]
    fn any(self) -> bool {
        self.0[0] || self.0[1]
    }

    #[inline(always)]
    fn none(self) -> bool {
        !self.any()
    }

    #[inline(always)]
    fn and(self, rhs: Self) -> Self {
        ScalarMask([self.0[0] && rhs.0[0], self.0[1] && rhs.0[1]])
    }

    #[inline(always)]
    fn or(self, rhs: Self) -> Self {
        ScalarMask([self.0[0] || rhs.0[0], self.0[1] || rhs.0[1]])
    }

    #[inline(always)]
    fn not(self) -> Self {
        ScalarMask([!self.0[0], !self.0[1]])
    }

    #[inline(always)]
    fn xor(self, rhs: Self) -> Self {
        ScalarMask([self.0[0] ^ rhs.0[0], self.0[1] ^ rhs.0[1]])
    }
}

impl fmt::Display for ScalarLanes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.0[0], self.0[1])
    }
}

impl fmt::Debug for ScalarLanes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_arithmetic() {
        let a = ScalarLanes::from_array([2.0, 6.0]);
        let b = ScalarLanes::from_array([3.0, 2.0]);

        assert_eq!((a + b).to_array(), [5.0, 8.0]);
        assert_eq!((a - b).to_array(), [-1.0, 4.0]);
        assert_eq!((a * b).to_array(), [6.0, 12.0]);
        assert_eq!((a / b).to_array(), [2.0 / 3.0, 3.0]);
    }

    #[test]
    fn test_scalar_in_place_forms() {
        let mut v = ScalarLanes::splat(4.0);
        v += ScalarLanes::splat(1.0);
        v *= ScalarLanes::splat(2.0);
        v -= ScalarLanes::splat(6.0);
        v /= ScalarLanes::splat(2.0);
        assert_eq!(v.to_array(), [2.0, 2.0]);
    }

    #[test]
    fn test_scalar_comparison() {
        let a = ScalarLanes::from_array([1.0, 2.0]);
        let b = ScalarLanes::from_array([2.0, 2.0]);

        assert_eq!(a.lt(b), ScalarMask([true, false]));
        assert_eq!(a.le(b), ScalarMask([true, true]));
        assert_eq!(a.eq(b), ScalarMask([false, true]));
        assert_eq!(a.gt(b), ScalarMask([false, false]));
        assert_eq!(a.ge(b), ScalarMask([false, true]));
    }

    #[test]
    fn test_scalar_blend() {
        let mut v = ScalarLanes::from_array([1.0, 2.0]);
        let mask = ScalarLanes::splat(0.0).eq(ScalarLanes::from_array([0.0, 1.0]));
        v.blend(mask, ScalarLanes::splat(9.0));
        assert_eq!(v.to_array(), [9.0, 2.0]);
    }

    #[test]
    fn test_scalar_any_is_a_bit_test() {
        assert!(!ScalarLanes::splat(0.0).any());
        assert!(ScalarLanes::from_array([0.0, 1.0]).any());
        // -0.0 has its sign bit set, so it counts.
        assert!(ScalarLanes::from_array([-0.0, 0.0]).any());
    }

    #[test]
    fn test_scalar_sqrt() {
        let v = ScalarLanes::from_array([4.0, 9.0]).sqrt();
        assert_eq!(v.to_array(), [2.0, 3.0]);
        assert!(ScalarLanes::splat(-1.0).sqrt().extract(0).is_nan());
    }

    #[test]
    fn test_scalar_extract() {
        let v = ScalarLanes::from_array([1.5, -2.5]);
        assert_eq!(v.extract(0), 1.5);
        assert_eq!(v.extract(1), -2.5);
    }

    #[test]
    fn test_scalar_mask_ops() {
        let t = ScalarLanes::splat(0.0).eq(ScalarLanes::splat(0.0));
        let f = ScalarLanes::splat(0.0).eq(ScalarLanes::splat(1.0));

        assert!(t.all() && t.any() && !t.none());
        assert!(!f.all() && !f.any() && f.none());
        assert!(t.and(f).none());
        assert!(t.or(f).all());
        assert!(f.not().all());
        assert!(t.xor(t).none());
        assert!(t.xor(f).all());
    }

    #[test]
    fn test_scalar_display() {
        extern crate alloc;
        use alloc::format;

        let v = ScalarLanes::from_array([1.5, -2.0]);
        assert_eq!(format!("{}", v), "[1.5, -2]");
    }
}
