//! # Datagrid Testkit
//!
//! Test utilities for datagrid.
//!
//! This crate provides:
//! - The employee sample table and grid fixtures
//! - Property-based test generators using proptest
//! - A command-sequence harness that checks engine invariants
//!
//! ## Usage
//!
//! ```rust
//! use datagrid_testkit::prelude::*;
//!
//! let mut harness = GridHarness::new(employee_grid());
//! harness.apply(&GridCommand::Search("edinburgh".into()));
//! assert_eq!(harness.grid.view_len(), 4);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod fixtures;
pub mod generators;
pub mod harness;

#[cfg(test)]
mod scenarios;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::fixtures::*;
    pub use crate::generators::*;
    pub use crate::harness::*;
}

pub use fixtures::*;
pub use generators::*;
pub use harness::*;
