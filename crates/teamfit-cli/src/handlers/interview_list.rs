use anyhow::Result;
use teamfit_core::HistoryState;
use teamfit_types::sample_history;

use crate::presentation::presenters::present_history;
use crate::presentation::view_models::HistorySource;
use crate::presentation::views::HistoryView;

use super::HandlerContext;

pub fn handle(ctx: &HandlerContext, search: Option<&str>, status: &str) -> Result<()> {
    let client = ctx.client()?;

    // The history endpoint is the one surface with a built-in fallback:
    // sample rows keep the command usable while the backend is down.
    let (records, source) = match client.fetch_interview_history() {
        Ok(records) => (records, HistorySource::Api),
        Err(err) => {
            ctx.renderer()
                .render_warning(&format!("interview API unreachable ({})", err));
            (sample_history(), HistorySource::Sample)
        }
    };

    let mut state = HistoryState::new();
    state.load(records);
    if let Some(search) = search {
        state.set_search(search);
    }
    if !status.eq_ignore_ascii_case("all") {
        state.set_status_filter(Some(status.to_string()));
    }

    let model = present_history(&state, source);
    ctx.renderer()
        .render(&model, HistoryView::new(&model, ctx.renderer().options()))
}
