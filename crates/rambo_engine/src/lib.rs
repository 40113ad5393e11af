//! # Rambo Engine (Kernel Layer)
//!
//! ## Kernel Layer Role
//!
//! rambo_engine implements the RAMBO phase-space point generator: a pure
//! Monte Carlo pipeline producing random relativistic four-momenta subject to
//! exact energy-momentum conservation.
//!
//! # Architecture
//!
//! ```text
//! PhaseSpaceGenerator
//! ├── GeneratorConfig    (energy, event counts, randomness policy)
//! ├── UniformSource      (seeded or per-worker uniform draws)
//! └── Per-event pipeline
//!     ├── build_inputs()          (back-to-back beam pair)
//!     ├── sample_outputs()        (isotropic massless momenta)
//!     ├── combined_mass()         (kinematic aggregation, rambo_core)
//!     ├── enforce_conservation()  (closed-form boost + rescale)
//!     └── flat record assembly    (inputs then corrected outputs)
//! ```
//!
//! Events are fully independent trials, so the per-worker randomness policy
//! parallelises across events with Rayon without any synchronisation; the
//! seeded policy runs the event loop sequentially and is bit-reproducible.
//!
//! # Usage Example
//!
//! ```rust
//! use rambo_engine::generate_points;
//!
//! // 100 GeV centre-of-mass energy, 10 events, 4 outgoing particles each
//! let points = generate_points(100.0, 10, 4).unwrap();
//! assert_eq!(points.len(), 10 * (2 + 4) * 4);
//!
//! // Every event record starts with the fixed beam pair
//! assert_eq!(&points[..8], &[50.0, 0.0, 0.0, 50.0, 50.0, 0.0, 0.0, -50.0]);
//! ```
//!
//! # Boundary Buffer Layout
//!
//! The generator returns one flat `Vec<f64>` of length
//! `n_points * (2 + n_out) * 4`: event-major, input block first, vector
//! components in `(E, px, py, pz)` order. Inside the pipeline momenta are
//! typed [`FourVector`](rambo_core::types::FourVector)s; the flat layout
//! exists only at this boundary.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod event;
pub mod rng;

pub use event::config::{GeneratorConfig, RandomPolicy};
pub use event::error::{ConfigError, GeneratorError};
pub use event::generator::{generate_points, PhaseSpaceGenerator};
