//! Memory-transfer contract tests
//!
//! Round trips for the load/store families, the gather/scatter laws, and the
//! scatter collision ordering pinned by the contract.

use core::sync::atomic::{fence, Ordering};
use lanevec::{DefaultLanes, LaneVector};

#[repr(C, align(16))]
struct Aligned([f64; 8]);

#[test]
fn test_unaligned_roundtrip_leaves_memory_unchanged() {
    let src = [0.5, -1.5, 2.5, -3.5];
    let mut buf = src;
    unsafe {
        let v = DefaultLanes::load(buf.as_ptr().add(1));
        v.store(buf.as_mut_ptr().add(1));
    }
    assert_eq!(buf, src);
}

#[test]
fn test_aligned_roundtrip_reproduces_source_bytes() {
    let src = Aligned([1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]);
    let mut dst = Aligned([0.0; 8]);

    for chunk in (0..8).step_by(DefaultLanes::LANES) {
        unsafe {
            let v = DefaultLanes::load_aligned(src.0.as_ptr().add(chunk));
            v.store_aligned(dst.0.as_mut_ptr().add(chunk));
        }
    }
    assert_eq!(dst.0, src.0);
}

#[test]
fn test_streaming_store_roundtrip() {
    let mut dst = Aligned([0.0; 8]);
    let v = DefaultLanes::from_array([4.5, -9.5]);

    unsafe { v.store_nt(dst.0.as_mut_ptr()) };
    // Streaming stores may be weakly ordered; fence before the dependent read.
    fence(Ordering::SeqCst);
    assert_eq!(&dst.0[..2], &[4.5, -9.5]);
}

#[test]
fn test_gather_law() {
    let base = [10.0, 11.0, 12.0, 13.0, 14.0];
    let offsets = [3, 1];

    let v = unsafe { DefaultLanes::gather(base.as_ptr(), &offsets) };
    for lane in 0..DefaultLanes::LANES {
        assert_eq!(v.extract(lane), base[offsets[lane] as usize]);
    }
}

#[test]
fn test_gather_duplicate_offsets_are_deterministic() {
    let base = [7.0, 8.0];
    let v = unsafe { DefaultLanes::gather(base.as_ptr(), &[1, 1]) };
    assert_eq!(v.to_array(), [8.0, 8.0]);
}

#[test]
fn test_scatter_then_gather_roundtrip_on_disjoint_offsets() {
    let v = DefaultLanes::from_array([3.25, -7.5]);
    let offsets = [4, 0];
    let mut buf = [0.0; 6];

    unsafe { v.scatter(buf.as_mut_ptr(), &offsets) };
    let back = unsafe { DefaultLanes::gather(buf.as_ptr(), &offsets) };
    assert_eq!(back.to_array(), v.to_array());

    // Untouched slots stay zero.
    assert_eq!(buf[1], 0.0);
    assert_eq!(buf[5], 0.0);
}

// Colliding scatter offsets resolve in ascending lane order, so the highest
// lane index wins. This ordering is part of the contract.
#[test]
fn test_scatter_collision_highest_lane_wins() {
    let v = DefaultLanes::from_array([1.0, 2.0]);
    let mut buf = [0.0; 3];

    unsafe { v.scatter(buf.as_mut_ptr(), &[2, 2]) };
    assert_eq!(buf, [0.0, 0.0, 2.0]);
}

#[test]
fn test_gather_negative_offsets() {
    let base = [1.0, 2.0, 3.0, 4.0];
    // Address from past the start, stepping back.
    let v = unsafe { DefaultLanes::gather(base.as_ptr().add(3), &[-3, -1]) };
    assert_eq!(v.to_array(), [1.0, 3.0]);
}

#[test]
fn test_load_preserves_bit_patterns() {
    let bits = [f64::NAN.to_bits() | 0xdead, (-0.0f64).to_bits()];
    let src = [f64::from_bits(bits[0]), f64::from_bits(bits[1])];
    let mut dst = [0.0; 2];

    unsafe {
        let v = DefaultLanes::load(src.as_ptr());
        v.store(dst.as_mut_ptr());
    }
    assert_eq!(dst[0].to_bits(), bits[0]);
    assert_eq!(dst[1].to_bits(), bits[1]);
}
