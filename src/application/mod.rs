//! Application layer - Use cases
//!
//! This module contains the operations exposed to front ends: formatting a
//! single call and checking endpoint health.

pub mod use_cases;

pub use use_cases::*;
