use std::path::PathBuf;

use anyhow::{Context, Result};
use teamfit_client::ApiClient;

use crate::config::Config;
use crate::presentation::ConsoleRenderer;
use crate::types::OutputFormat;

/// Context for handler execution with consistent presentation utilities
pub struct HandlerContext {
    pub data_dir: PathBuf,
    pub config: Config,
    renderer: ConsoleRenderer,
}

impl HandlerContext {
    pub fn new(data_dir: PathBuf, config: Config, format: OutputFormat) -> Self {
        Self {
            data_dir,
            config,
            renderer: ConsoleRenderer::new(format),
        }
    }

    pub fn renderer(&self) -> &ConsoleRenderer {
        &self.renderer
    }

    pub fn client(&self) -> Result<ApiClient> {
        ApiClient::new(&self.config.api_url)
            .with_context(|| format!("failed to build HTTP client for {}", self.config.api_url))
    }
}
