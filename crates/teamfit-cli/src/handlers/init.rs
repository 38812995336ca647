use anyhow::{bail, Result};

use crate::args::hints::cmd;
use crate::config::config_path;

use super::HandlerContext;

pub fn handle(ctx: &HandlerContext, force: bool) -> Result<()> {
    let path = config_path(&ctx.data_dir);
    if path.exists() && !force {
        bail!(
            "{} already exists (re-run with --force to overwrite)",
            path.display()
        );
    }

    ctx.config.save_to(&path)?;

    println!("Wrote {}", path.display());
    println!();
    println!("Configured endpoints:");
    println!("  api_url:            {}", ctx.config.api_url);
    println!("  interview_base_url: {}", ctx.config.interview_base_url);
    println!();
    println!("Next steps:");
    println!("  {}               # Review candidate compatibility", cmd::DASHBOARD_SHOW);
    println!("  {}               # Browse interview history", cmd::INTERVIEW_LIST);
    println!("  {}                # Run interviews interactively", cmd::INTERVIEW_TUI);
    Ok(())
}
