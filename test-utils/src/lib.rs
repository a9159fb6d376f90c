//! Shared test utilities for the secret store client.
//!
//! This crate provides:
//! - Proptest generators for keys, paths and JSON payloads
//! - A recording logger and an in-memory secret store
//! - Test fixtures with sample store responses

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod generators;
pub mod mocks;
pub mod fixtures;

pub use generators::*;
