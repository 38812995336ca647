use anyhow::Result;
use teamfit_core::SessionController;

use crate::presentation::presenters::present_session;
use crate::presentation::views::SessionView;

use super::HandlerContext;

pub fn handle(
    ctx: &HandlerContext,
    name: &str,
    role: &str,
    email: Option<&str>,
) -> Result<()> {
    let request = SessionController::prepare_create(name, role, email)?;

    let client = ctx.client()?;
    let session = client.create_interview(&request)?;

    let mut controller = SessionController::new();
    controller.begin(session);

    let model = present_session(&controller)?;
    ctx.renderer()
        .render(&model, SessionView::new(&model, ctx.renderer().options()))
}
