pub mod dashboard;
pub mod error;
pub mod history;
pub mod selection;
pub mod session;

pub use dashboard::{DashboardController, SortKey, TraitChart};
pub use error::{Error, Result};
pub use history::HistoryState;
pub use selection::SelectionSet;
pub use session::{SessionController, SessionStatus};
