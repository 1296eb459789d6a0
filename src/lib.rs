//! Casework: a directive-driven regression harness.
//!
//! Test-case files carry their own commands as `@DO` / `@DO_FAIL` lines. The
//! harness runs those commands against an executable under test and checks
//! that each one exits with 0 or 1 as declared, stopping at the first
//! surprise.

pub use crate::diagnostics::HarnessError;

pub mod cli;
pub mod config;
pub mod diagnostics;
pub mod testing;
