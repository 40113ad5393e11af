//! # Random Number Generation Infrastructure
//!
//! This module provides the uniform randomness capability consumed by the
//! isotropic output sampler. Two interchangeable policies sit behind one
//! trait, [`UniformSource`]:
//!
//! - [`SeededUniform`]: a single seeded generator for reproducible runs.
//!   Safe under single-producer use only; the engine drives it from a
//!   sequential event loop.
//! - [`EntropyUniform`]: an independently OS-entropy-seeded generator created
//!   per parallel worker, enabling lock-free sampling at the cost of
//!   run-to-run irreproducibility.
//!
//! ## Design Rationale
//!
//! The generator is an explicit object passed by mutable reference into the
//! sampler rather than hidden thread-local or process-global state, so the
//! policy choice is visible at the call site.
//!
//! ## Open Interval Contract
//!
//! `draw_uniform` returns values in the open interval `(0, 1)`: draws of
//! exactly 0 are resampled so that downstream `ln` calls can never see 0.
//! See [`UniformSource::draw_uniform`].
//!
//! ## Usage Example
//!
//! ```rust
//! use rambo_engine::rng::{SeededUniform, UniformSource};
//!
//! let mut src = SeededUniform::from_seed(12345);
//! let u = src.draw_uniform();
//! assert!(u > 0.0 && u < 1.0);
//! ```

mod uniform;

// Public re-exports
pub use uniform::{EntropyUniform, SeededUniform, UniformSource};
