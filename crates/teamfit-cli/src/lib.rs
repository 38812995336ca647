// NOTE: teamfit Architecture Rationale
//
// Why a pure-client CLI (no local analysis)?
// - The compatibility engine and interview agents live behind one HTTP API
// - Re-implementing scoring locally would drift from what the team reviews
// - Trade-off: nothing works offline except the sample interview history
//
// Why projection-from-source (not in-place list mutation)?
// - Sort and filter always recompute from the immutable fetched dataset
// - Switching sort orders repeatedly can never compound an earlier ordering
// - Relaxing a filter restores rows exactly as the backend sent them
//
// Why a file-based analysis hand-off?
// - `interview` and `dashboard` are separate invocations of a one-shot binary
// - Selected candidates are queued in pending-analysis.json under the data
//   dir; the next dashboard consumes and deletes it (malformed files warn,
//   never crash)
//
// Why one active interview session?
// - Transcript fetches are meaningless without a session to target; they are
//   rejected client-side before any request goes out
// - Starting a new interview resets session and transcript state together

mod args;
mod commands;
pub mod config;
pub mod handoff;
pub mod presentation;
mod handlers;
pub mod types;

pub use args::{Cli, Commands, DashboardCommand, InterviewCommand};
pub use commands::run;
