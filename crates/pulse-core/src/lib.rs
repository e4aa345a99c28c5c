//! Core types and trait definitions for the Pulse report service.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! The store and API crates depend on it.

// We intentionally use native `async fn` in traits (stabilised in Rust 1.75).
// Suppress the advisory lint about `Send` bounds on the returned futures.
#![allow(async_fn_in_trait)]

pub mod error;
pub mod location;
pub mod report;
pub mod signal;
pub mod store;

pub use error::{Error, Result};
