//! Configuration module
//!
//! Constants and the pinned artifact tables.

pub mod artifacts;
pub mod defaults;
