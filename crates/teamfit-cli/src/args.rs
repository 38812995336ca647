use crate::types::{OutputFormat, RecommendationFilter, SortField};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod hints;

#[derive(Parser)]
#[command(name = "teamfit")]
#[command(about = "Review candidate compatibility and run AI interviews", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(
        long,
        global = true,
        help = "Data directory (defaults to $TEAMFIT_PATH, then ~/.teamfit)"
    )]
    pub data_dir: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, global = true, help = "Override the analytics API base URL")]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    Dashboard {
        #[command(subcommand)]
        command: DashboardCommand,
    },

    Interview {
        #[command(subcommand)]
        command: InterviewCommand,
    },

    Init {
        #[arg(long)]
        force: bool,
    },
}

#[derive(Subcommand)]
pub enum DashboardCommand {
    Show {
        #[arg(long, default_value = "compatibility")]
        sort: SortField,

        #[arg(long, default_value = "all")]
        status: RecommendationFilter,
    },

    Candidate {
        candidate_id: String,
    },

    Tui {
        #[arg(
            long,
            help = "Queue a JSON array of {agent_id, candidate_name, role} for analysis"
        )]
        analyze: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum InterviewCommand {
    List {
        #[arg(long, help = "Substring match on candidate name or role")]
        search: Option<String>,

        #[arg(long, default_value = "all")]
        status: String,
    },

    Create {
        #[arg(long)]
        name: String,

        #[arg(long)]
        role: String,

        #[arg(long)]
        email: Option<String>,
    },

    Transcript {
        agent_id: String,

        #[arg(long)]
        name: String,

        #[arg(long)]
        role: String,

        #[arg(long, value_name = "DIR", num_args = 0..=1, default_missing_value = ".")]
        save: Option<PathBuf>,
    },

    Tui,
}
