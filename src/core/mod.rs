//! Core business logic
//!
//! Decides what to download and where things end up. The actual network,
//! archive, and process side effects live in [`crate::infra`].

pub mod bootstrap;
pub mod plan;
pub mod platform;
pub mod toolchain;
pub mod workspace;
