use anyhow::Result;
use teamfit_core::DashboardController;

use crate::handoff;
use crate::presentation::presenters::present_dashboard;
use crate::presentation::views::DashboardView;
use crate::types::{RecommendationFilter, SortField};

use super::HandlerContext;

pub fn handle(ctx: &HandlerContext, sort: SortField, status: RecommendationFilter) -> Result<()> {
    // Consumed before the fetch; a failed load still clears the queue.
    let pending = handoff::take_pending(&ctx.data_dir);

    let client = ctx.client()?;
    let mut controller = DashboardController::new();
    let token = controller.begin_load();
    controller.complete_load(token, client.fetch_dashboard_data()?);
    controller.set_sort(sort.to_sort_key());
    controller.set_filter(status.to_status());

    let model = present_dashboard(&controller, pending.as_deref());
    ctx.renderer()
        .render(&model, DashboardView::new(&model, ctx.renderer().options()))
}
