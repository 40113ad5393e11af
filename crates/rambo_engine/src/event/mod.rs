//! RAMBO event generation pipeline.
//!
//! This module composes the five stages of the phase-space point generator:
//!
//! 1. [`inputs`] — the fixed back-to-back beam pair per event
//! 2. [`sampler`] — isotropic massless output momenta
//! 3. kinematic aggregation — `momentum_sum` / `combined_mass` from
//!    [`rambo_core::kinematics`], applied to each side
//! 4. [`boost`] — the closed-form conservation-enforcing boost and rescale
//! 5. [`generator`] — orchestration and flat record assembly
//!
//! Data flows strictly forward; no stage depends on the driver. Events are
//! independent trials, so stage composition is per-event and the collection
//! is embarrassingly parallel across the event index.

pub mod boost;
pub mod config;
pub mod error;
pub mod generator;
pub mod inputs;
pub mod sampler;

// Re-export commonly used items at module level
pub use config::{GeneratorConfig, RandomPolicy};
pub use error::{ConfigError, GeneratorError};
pub use generator::{generate_points, PhaseSpaceGenerator};
