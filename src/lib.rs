//! ci-bootstrap - CI toolchain bootstrapper
//!
//! This library provides the core functionality for provisioning a CI
//! worker with pinned build tools (CMake, the Android NDK, and Ninja):
//! verified downloads, archive extraction, and layout normalization.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`cli`] - Command-line interface parsing and output formatting
//! - [`core`] - Business logic (planning, workspace management)
//! - [`infra`] - Infrastructure layer (network, filesystem, processes)
//! - [`config`] - Pinned artifact tables and constants
//! - [`error`] - Error types and handling

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod infra;
