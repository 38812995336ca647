use std::path::Path;

use anyhow::Result;

use crate::args::{hints, Cli, Commands, DashboardCommand, InterviewCommand};
use crate::config::{self, Config};
use crate::handlers::{self, HandlerContext};

pub fn run(cli: Cli) -> Result<()> {
    let data_dir = config::resolve_data_dir(cli.data_dir.as_deref())?;
    let mut config = Config::load_from(&config::config_path(&data_dir))?;
    if let Some(api_url) = cli.api_url {
        config.api_url = api_url;
    }

    let Some(command) = cli.command else {
        show_guidance(&data_dir);
        return Ok(());
    };

    let ctx = HandlerContext::new(data_dir, config, cli.format);

    match command {
        Commands::Init { force } => handlers::init::handle(&ctx, force),

        Commands::Dashboard { command } => match command {
            DashboardCommand::Show { sort, status } => {
                handlers::dashboard_show::handle(&ctx, sort, status)
            }
            DashboardCommand::Candidate { candidate_id } => {
                handlers::dashboard_candidate::handle(&ctx, &candidate_id)
            }
            DashboardCommand::Tui { analyze } => {
                handlers::dashboard_tui::handle(&ctx, analyze.as_deref())
            }
        },

        Commands::Interview { command } => match command {
            InterviewCommand::List { search, status } => {
                handlers::interview_list::handle(&ctx, search.as_deref(), &status)
            }
            InterviewCommand::Create { name, role, email } => {
                handlers::interview_create::handle(&ctx, &name, &role, email.as_deref())
            }
            InterviewCommand::Transcript {
                agent_id,
                name,
                role,
                save,
            } => handlers::interview_transcript::handle(&ctx, &agent_id, &name, &role, save.as_deref()),
            InterviewCommand::Tui => handlers::interview_tui::handle(&ctx),
        },
    }
}

fn show_guidance(data_dir: &Path) {
    let configured = config::config_path(data_dir).exists();

    println!("teamfit - Candidate compatibility and AI interviews\n");

    if !configured {
        println!("Get started:");
        println!("  {}\n", hints::cmd::INIT);
        println!("The init command will:");
        println!("  1. Write config.toml with the analytics API endpoints");
        println!("  2. Suggest the dashboard and interview commands\n");
    } else {
        println!("Quick commands:");
        println!(
            "  {:<34} # Candidate compatibility overview",
            hints::cmd::DASHBOARD_SHOW
        );
        println!("  {:<34} # Interactive dashboard", hints::cmd::DASHBOARD_TUI);
        println!("  {:<34} # Interview history", hints::cmd::INTERVIEW_LIST);
        println!(
            "  {:<34} # Interactive interview manager",
            hints::cmd::INTERVIEW_TUI
        );
        println!();
    }

    println!("For more commands:");
    println!("  teamfit --help");
}
