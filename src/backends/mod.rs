//! Lane vector backend implementations
//!
//! This module contains platform-specific backends selected at compile time
//! via cargo features. Only one backend is active per build; the scalar
//! backend is always compiled and serves as the portable reference.

// Scalar backend (always available as reference and fallback)
pub mod scalar;

// Platform-specific backends (feature-gated)
#[cfg(all(feature = "sse2", any(target_arch = "x86", target_arch = "x86_64")))]
pub mod sse2;

#[cfg(all(feature = "neon", target_arch = "aarch64"))]
pub mod neon;
