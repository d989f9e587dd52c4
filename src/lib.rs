#![no_std]
#![doc = include_str!("../README.md")]
#![warn(missing_docs)]
#![warn(clippy::all)]

//! lanevec: fixed-width SIMD lane abstraction
//!
//! This library provides a zero-cost lane vector type: two f64 elements in one
//! hardware vector register, with scalar-looking operator syntax compiling to
//! native vector instructions.
//!
//! # Features
//!
//! - **Trait-based lane abstraction**: write backend-agnostic code using the
//!   `LaneVector` and `LaneMask` traits
//! - **Compile-time backend selection**: scalar, SSE2, or NEON via cargo
//!   features; `DefaultLanes` resolves to the selected backend
//! - **Scalar-syntax arithmetic**: `+ - * /` and their in-place forms,
//!   IEEE-754 semantics throughout
//! - **Masked data movement**: comparisons produce register-shaped masks
//!   consumed by blend/select
//! - **Explicit memory transfer**: unaligned/aligned/streaming stores and
//!   strided gather/scatter with a 16-byte alignment contract
//! - **No allocations, no locks**: every instance is an independent register
//!   or stack value

// Core trait definitions
pub mod traits;

// Backend implementations
pub mod backends;

// Alignment checks for the aligned memory-transfer family
pub mod align;

// Functional-style lane operations
pub mod ops;

// Public re-exports for convenience
pub use traits::{LaneMask, LaneVector};

// Re-export backend types
pub use backends::scalar::{ScalarLanes, ScalarMask};

// Only re-export SSE2 types when both feature is enabled AND we're targeting x86/x86_64
#[cfg(all(feature = "sse2", any(target_arch = "x86", target_arch = "x86_64")))]
pub use backends::sse2::{Sse2Lanes, Sse2Mask};

// Only re-export NEON types when both feature is enabled AND we're targeting aarch64
#[cfg(all(feature = "neon", target_arch = "aarch64"))]
pub use backends::neon::{NeonLanes, NeonMask};

/// Default lane vector type based on the enabled feature
///
/// This type alias resolves to the backend selected at compile time:
/// - no backend feature (default): `ScalarLanes` (portable reference)
/// - `sse2` feature on x86/x86-64: `Sse2Lanes`
/// - `neon` feature on ARM64: `NeonLanes`
#[cfg(not(any(
    all(feature = "sse2", any(target_arch = "x86", target_arch = "x86_64")),
    all(feature = "neon", target_arch = "aarch64")
)))]
pub type DefaultLanes = ScalarLanes;

/// Default lane vector type (SSE2 backend for x86/x86-64)
#[cfg(all(feature = "sse2", any(target_arch = "x86", target_arch = "x86_64")))]
pub type DefaultLanes = Sse2Lanes;

/// Default lane vector type (NEON backend for ARM64)
#[cfg(all(feature = "neon", target_arch = "aarch64"))]
pub type DefaultLanes = NeonLanes;

/// Mask type associated with [`DefaultLanes`]
pub type DefaultMask = <DefaultLanes as LaneVector>::Mask;
