//! Application layer - Use case implementations
//!
//! This module coordinates the domain layer into solver and analysis entry points.

pub mod analysis;
pub mod solver;
