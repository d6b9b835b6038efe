//! # Knotstats
//!
//! Fixed-memory streaming order statistics for Rust.
//!
//! Knotstats tracks the distribution of an unbounded stream of samples in
//! a buffer whose size is fixed at construction, the way metrics and
//! observability pipelines track latency percentiles without storing raw
//! samples. At any point the digest answers approximate quantile, CDF,
//! density, and moment queries from its compressed knot set.
//!
//! ## Features
//!
//! - **Quantile Estimation**: value at any probability, or probability of
//!   any value, from a piecewise-linear reconstruction
//! - **Moments**: mean, variance, standard deviation, and arbitrary
//!   origin moments without keeping samples around
//! - **Fixed Memory**: one allocation of `2 * capacity` doubles, never
//!   resized, exact until the stream outgrows it
//! - **Zero-Copy Transfer**: the backing buffer is a flat block of
//!   doubles that can be shipped across processes and re-adopted
//!
//! ## Quick Start
//!
//! ```rust
//! use knotstats::prelude::*;
//!
//! // Track request latencies
//! let mut digest = KnotDigest::new(64);
//! for latency_ms in [12.0, 48.0, 7.0, 103.0, 41.0] {
//!     digest.push(latency_ms);
//! }
//! println!("p50: {}", digest.quantile(0.5));
//! println!("mean: {}", digest.mean());
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Standard library support; disable for `no_std`
//!   (math falls back to `libm`)
//! - `serde`: Enable serialization

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(not(feature = "std"))]
extern crate alloc;

mod math;

pub mod quantiles;
pub mod traits;

pub mod prelude {
    pub use crate::quantiles::KnotDigest;
    pub use crate::traits::*;
}

pub use quantiles::KnotDigest;
