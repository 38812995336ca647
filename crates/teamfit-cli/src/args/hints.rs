pub mod cmd {
    // Dashboard commands
    pub const DASHBOARD_SHOW: &str = "teamfit dashboard show";
    pub const DASHBOARD_TUI: &str = "teamfit dashboard tui";

    // Interview commands
    pub const INTERVIEW_LIST: &str = "teamfit interview list";
    pub const INTERVIEW_CREATE: &str = "teamfit interview create --name <NAME> --role <ROLE>";
    pub const INTERVIEW_TUI: &str = "teamfit interview tui";

    // Init commands
    pub const INIT: &str = "teamfit init";
}

pub mod fmt {
    pub fn dashboard_candidate(candidate_id: &str) -> String {
        format!("teamfit dashboard candidate {}", candidate_id)
    }

    pub fn interview_transcript(agent_id: &str, name: &str, role: &str) -> String {
        format!(
            "teamfit interview transcript {} --name \"{}\" --role \"{}\"",
            agent_id, name, role
        )
    }
}
