//! Case file discovery and loading.

pub mod discovery;
