//! Presentation layer for the teamfit CLI.
//!
//! Data flows one way, and every stage is pure until the renderer prints:
//!
//! ```text
//! core state ──presenters──> view models ──renderers──> terminal
//!                                 │
//!                                 └── serde_json (for --format json)
//! ```
//!
//! Golden rules:
//! 1. View models carry raw data (scores as 0..1 floats, RFC 3339 strings),
//!    never pre-painted text. Formatting happens in views and formatters.
//! 2. JSON output serializes view models directly; it must not change when
//!    plain rendering changes.
//! 3. Presenters own presentation business logic (what to show, how many,
//!    in which order); views own layout and color only.
//! 4. The console renderer is a router: it picks JSON or a Display view per
//!    output format and never builds strings itself.

pub mod formatters;
pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use renderers::ConsoleRenderer;
