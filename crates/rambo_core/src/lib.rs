//! # rambo_core: Kinematic Foundation for Phase-Space Generation
//!
//! ## Foundation Layer Role
//!
//! rambo_core serves as the bottom layer of the workspace, providing:
//! - Relativistic four-vector type: `FourVector` (`types::four_vector`)
//! - Kinematic aggregation: `momentum_sum`, `invariant_mass`, `combined_mass`
//!   (`kinematics`)
//! - Error types: `KinematicsError` (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! The foundation layer has no dependencies on other rambo_* crates, with
//! minimal external dependencies:
//! - num-traits: Traits for generic numerical computation
//! - thiserror: Structured error derivation
//! - serde: Serialisation support (optional)
//!
//! ## Conventions
//!
//! Four-vectors are ordered `(E, px, py, pz)` in natural units (c = 1). The
//! Minkowski metric signature is `(+, -, -, -)`, so a physical on-shell
//! particle satisfies `E² − |p|² = m² ≥ 0`.
//!
//! ## Usage Examples
//!
//! ```rust
//! use rambo_core::types::FourVector;
//! use rambo_core::kinematics::combined_mass;
//!
//! // Two back-to-back beams at 100 GeV centre-of-mass energy
//! let pa = FourVector::new(50.0, 0.0, 0.0, 50.0);
//! let pb = FourVector::new(50.0, 0.0, 0.0, -50.0);
//!
//! let mass = combined_mass(&[pa, pb]).unwrap();
//! assert_eq!(mass, 100.0);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for `FourVector`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod kinematics;
pub mod types;
