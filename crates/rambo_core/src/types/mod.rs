//! Core kinematic types.
//!
//! This module provides:
//! - `four_vector`: The relativistic `FourVector` type with Minkowski algebra
//! - `error`: Structured error types for kinematic operations
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`FourVector`] from `four_vector`
//! - [`KinematicsError`] from `error`

pub mod error;
pub mod four_vector;

// Re-export commonly used types at module level
pub use error::KinematicsError;
pub use four_vector::FourVector;
