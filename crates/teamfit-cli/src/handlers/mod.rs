mod context;

pub mod dashboard_candidate;
pub mod dashboard_show;
pub mod dashboard_tui;
pub mod init;
pub mod interview_create;
pub mod interview_list;
pub mod interview_transcript;
pub mod interview_tui;

pub use context::HandlerContext;
