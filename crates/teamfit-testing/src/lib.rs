//! Testing infrastructure for teamfit integration tests.
//!
//! This crate provides utilities for writing robust integration tests:
//! - `fixtures`: canned backend payloads in the shapes the API emits
//! - `server`: a minimal canned-response HTTP stub for the blocking client

pub mod fixtures;
pub mod server;

pub use server::{CannedResponse, StubApi};
