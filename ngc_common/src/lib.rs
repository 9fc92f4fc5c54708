//! NGC Common Library
//!
//! This crate provides the shared interpreter types consumed by every
//! component that reports RS274/NGC modal state: the settings snapshot,
//! the parsed block, encoded code constants, state tags and the
//! configuration loading utilities.
//!
//! # Module Structure
//!
//! - [`interp`] - Interpreter snapshot types (settings, block, codes, state tag)
//! - [`consts`] - Array sizes and system-wide limits
//! - [`config`] - Configuration loading traits and types
//! - [`prelude`] - Common re-exports for convenience
//!
//! # Usage
//!
//! ```rust
//! use ngc_common::prelude::*;
//!
//! let settings = Settings::default();
//! assert_eq!(settings.plane, Plane::XY);
//! ```

pub mod config;
pub mod consts;
pub mod interp;
pub mod prelude;
