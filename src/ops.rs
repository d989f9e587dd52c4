//! Functional-style lane operations
//!
//! Free-function wrappers over the [`LaneVector`] surface for call sites that
//! read better in function form (kernel pipelines, fold arguments).

use crate::traits::LaneVector;

/// Add two lane vectors element-wise
///
/// # Example
///
/// ```rust
/// use lanevec::{DefaultLanes, LaneVector};
/// use lanevec::ops::add;
///
/// let a = DefaultLanes::splat(2.0);
/// let b = DefaultLanes::splat(3.0);
/// assert_eq!(add(a, b).extract(0), 5.0);
/// ```
#[inline(always)]
pub fn add<V: LaneVector>(a: V, b: V) -> V {
    a + b
}

/// Subtract two lane vectors element-wise
#[inline(always)]
pub fn sub<V: LaneVector>(a: V, b: V) -> V {
    a - b
}

/// Multiply two lane vectors element-wise
#[inline(always)]
pub fn mul<V: LaneVector>(a: V, b: V) -> V {
    a * b
}

/// Divide two lane vectors element-wise
#[inline(always)]
pub fn div<V: LaneVector>(a: V, b: V) -> V {
    a / b
}

/// Lane-wise square root
///
/// # Example
///
/// ```rust
/// use lanevec::{DefaultLanes, LaneVector};
/// use lanevec::ops::sqrt;
///
/// let v = DefaultLanes::from_array([4.0, 9.0]);
/// assert_eq!(sqrt(v).to_array(), [2.0, 3.0]);
/// ```
#[inline(always)]
pub fn sqrt<V: LaneVector>(v: V) -> V {
    v.sqrt()
}

/// Per-lane conditional select: `mask[i] ? true_val[i] : false_val[i]`
///
/// # Example
///
/// ```rust
/// use lanevec::{DefaultLanes, LaneVector};
/// use lanevec::ops::select;
///
/// let a = DefaultLanes::from_array([1.0, 2.0]);
/// let b = DefaultLanes::from_array([2.0, 2.0]);
/// let picked = select(a.lt(b), b, a);
/// assert_eq!(picked.to_array(), [2.0, 2.0]);
/// ```
#[inline(always)]
pub fn select<V: LaneVector>(mask: V::Mask, true_val: V, false_val: V) -> V {
    V::select(mask, true_val, false_val)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends::scalar::ScalarLanes;

    #[test]
    fn test_add() {
        let a = ScalarLanes::splat(2.0);
        let b = ScalarLanes::splat(3.0);
        assert_eq!(add(a, b).to_array(), [5.0, 5.0]);
    }

    #[test]
    fn test_sub() {
        let a = ScalarLanes::splat(5.0);
        let b = ScalarLanes::splat(3.0);
        assert_eq!(sub(a, b).to_array(), [2.0, 2.0]);
    }

    #[test]
    fn test_mul() {
        let a = ScalarLanes::splat(2.0);
        let b = ScalarLanes::splat(3.0);
        assert_eq!(mul(a, b).to_array(), [6.0, 6.0]);
    }

    #[test]
    fn test_div() {
        let a = ScalarLanes::splat(6.0);
        let b = ScalarLanes::splat(3.0);
        assert_eq!(div(a, b).to_array(), [2.0, 2.0]);
    }

    #[test]
    fn test_sqrt() {
        let v = ScalarLanes::from_array([4.0, 9.0]);
        assert_eq!(sqrt(v).to_array(), [2.0, 3.0]);
    }

    #[test]
    fn test_select() {
        let a = ScalarLanes::from_array([1.0, 2.0]);
        let b = ScalarLanes::from_array([2.0, 2.0]);
        let picked = select(a.lt(b), ScalarLanes::splat(9.0), a);
        assert_eq!(picked.to_array(), [9.0, 2.0]);
    }
}
