pub mod dashboard;
pub mod interview;

pub use dashboard::{present_candidate_detail, present_dashboard};
pub use interview::{present_history, present_session, present_transcript};
