use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use teamfit_types::TranscriptData;

use crate::presentation::presenters::present_transcript;
use crate::presentation::views::TranscriptView;

use super::HandlerContext;

pub fn handle(
    ctx: &HandlerContext,
    agent_id: &str,
    name: &str,
    role: &str,
    save: Option<&Path>,
) -> Result<()> {
    let client = ctx.client()?;
    let transcript = client
        .fetch_transcript(agent_id, name, role)
        .with_context(|| format!("Failed to fetch transcript for {}", agent_id))?;

    let saved_to = match save {
        Some(dir) => Some(save_transcript(&transcript, name, dir)?),
        None => None,
    };

    let model = present_transcript(&transcript, agent_id, name, saved_to);
    ctx.renderer()
        .render(&model, TranscriptView::new(&model, ctx.renderer().options()))
}

/// Writes the full transcript payload as pretty JSON, named after the
/// candidate and the capture date.
fn save_transcript(transcript: &TranscriptData, name: &str, dir: &Path) -> Result<String> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
    let filename = TranscriptData::download_filename(name, Utc::now().date_naive());
    let path = dir.join(filename);
    let content = serde_json::to_string_pretty(transcript)?;
    std::fs::write(&path, content)
        .with_context(|| format!("Failed to write file: {}", path.display()))?;
    Ok(path.display().to_string())
}
