//! Quantile estimation algorithms
//!
//! This module provides sketches for approximating order statistics of a
//! data stream in fixed memory.
//!
//! # Algorithms
//!
//! - [`KnotDigest`]: rank-conserving knot buffer answering quantile,
//!   CDF/PDF, and moment queries
//!
//! # Example
//!
//! ```
//! use knotstats::quantiles::KnotDigest;
//!
//! let mut digest = KnotDigest::new(32);
//!
//! for value in [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0] {
//!     digest.push(value);
//! }
//!
//! let median = digest.quantile(0.5);
//! println!("Median: {}", median);
//! ```

mod knot_digest;

pub use knot_digest::KnotDigest;
