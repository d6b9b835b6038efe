//! Core traits for streaming digests
//!
//! All digests implement the base [`Sketch`] trait, with specialized traits
//! for order statistics ([`QuantileSketch`]) and origin moments
//! ([`MomentSketch`]).

use core::fmt::Debug;

#[cfg(feature = "std")]
use std::{string::String, vec::Vec};

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(not(feature = "std"))]
use alloc::{string::String, vec::Vec};

/// Error while adopting a raw knot buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// Input buffer too short to hold the minimum knot count
    BufferTooShort { expected: usize, found: usize },
    /// Input buffer cannot be split into equal value/rank halves
    OddLength(usize),
    /// Buffer contents violate the digest invariants
    Corrupted(String),
}

impl core::fmt::Display for DecodeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            DecodeError::BufferTooShort { expected, found } => {
                write!(f, "buffer too short: expected {} slots, found {}", expected, found)
            }
            DecodeError::OddLength(len) => write!(f, "buffer length {} is odd", len),
            DecodeError::Corrupted(msg) => write!(f, "corrupted buffer: {}", msg),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DecodeError {}

/// Core trait for all streaming digests
pub trait Sketch: Clone + Debug {
    /// The type of item this digest processes
    type Item: ?Sized;

    /// Add an item to the digest
    fn update(&mut self, item: &Self::Item);

    /// Reset the digest to its empty state
    fn clear(&mut self);

    /// Memory usage in bytes
    fn size_bytes(&self) -> usize;

    /// Number of items processed
    fn count(&self) -> u64;

    /// Check if the digest is empty
    fn is_empty(&self) -> bool {
        self.count() == 0
    }
}

/// Quantile estimation digests
///
/// Queries on an empty digest return NaN; when the stream may not have
/// started yet, check [`Sketch::is_empty`] first.
pub trait QuantileSketch: Sketch {
    /// Add a value to the digest
    fn add(&mut self, value: f64);

    /// Get the value at probability `prob` (0.0 to 1.0)
    ///
    /// `prob = 0.5` returns the median
    fn quantile(&self, prob: f64) -> f64;

    /// Get the cumulative probability of a value (0.0 to 1.0)
    fn cdf(&self, x: f64) -> f64;

    /// Get the local probability density at a value
    fn density(&self, x: f64) -> f64;

    /// Get the median (50th percentile)
    fn median(&self) -> f64 {
        self.quantile(0.5)
    }

    /// Get the smallest tracked value
    fn min(&self) -> f64 {
        self.quantile(0.0)
    }

    /// Get the largest tracked value
    fn max(&self) -> f64 {
        self.quantile(1.0)
    }

    /// Get multiple quantiles at once
    fn quantiles(&self, probs: &[f64]) -> Vec<f64> {
        probs.iter().map(|&p| self.quantile(p)).collect()
    }
}

/// Origin moment digests
pub trait MomentSketch: Sketch {
    /// Generalized power sum Σ xᵖᵒʷ over the sample population
    fn power_sum(&self, pow: u32) -> f64;

    /// Origin moment E[xᵒʳᵈᵉʳ], i.e. `power_sum(order) / count`
    fn moment(&self, order: u32) -> f64;

    /// Mean of the samples
    fn mean(&self) -> f64;

    /// Bessel-corrected sample variance
    fn variance(&self) -> f64;

    /// Sample standard deviation
    fn stddev(&self) -> f64;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_error_display() {
        let err = DecodeError::BufferTooShort {
            expected: 6,
            found: 4,
        };
        assert_eq!(
            err.to_string(),
            "buffer too short: expected 6 slots, found 4"
        );

        let err = DecodeError::OddLength(7);
        assert_eq!(err.to_string(), "buffer length 7 is odd");

        let err = DecodeError::Corrupted(String::from("ranks not increasing"));
        assert_eq!(err.to_string(), "corrupted buffer: ranks not increasing");
    }
}
