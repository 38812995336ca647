use anyhow::Result;
use teamfit_core::DashboardController;

use crate::presentation::presenters::present_candidate_detail;
use crate::presentation::views::CandidateDetailView;

use super::HandlerContext;

pub fn handle(ctx: &HandlerContext, candidate_id: &str) -> Result<()> {
    let client = ctx.client()?;
    let mut controller = DashboardController::new();
    let token = controller.begin_load();
    controller.complete_load(token, client.fetch_dashboard_data()?);

    let model = present_candidate_detail(&controller, candidate_id)?;
    ctx.renderer().render(
        &model,
        CandidateDetailView::new(&model, ctx.renderer().options()),
    )
}
