//! # TreeLab Configuration Module
//!
//! This module centralizes all configuration constants for TreeLab. Constants
//! are grouped by their functional area and interdependencies are documented
//! and enforced through compile-time assertions.
//!
//! ## Why Centralization?
//!
//! The tree engine, the layout calculator, and the animation scheduler share
//! several values (degree bounds, timing, spacing). Keeping them in one place
//! prevents the mismatch bugs that scattered per-module constants invite.
//!
//! ## Module Organization
//!
//! - [`constants`]: All numeric configuration values with dependency documentation

pub mod constants;
pub use constants::*;
