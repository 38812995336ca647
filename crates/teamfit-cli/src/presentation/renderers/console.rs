use std::fmt::Display;

use anyhow::Result;
use is_terminal::IsTerminal;
use serde::Serialize;

use crate::presentation::formatters::FormatOptions;
use crate::types::OutputFormat;

/// Routes every command result to stdout.
///
/// JSON mode serializes the ViewModel as-is; plain mode prints the Display
/// view built over the same ViewModel. Color is enabled only for interactive
/// terminals, never for JSON.
pub struct ConsoleRenderer {
    format: OutputFormat,
    options: FormatOptions,
}

impl ConsoleRenderer {
    pub fn new(format: OutputFormat) -> Self {
        let enable_color = format == OutputFormat::Plain && std::io::stdout().is_terminal();
        Self {
            format,
            options: FormatOptions {
                enable_color,
                relative_time: false,
            },
        }
    }

    pub fn options(&self) -> &FormatOptions {
        &self.options
    }

    pub fn render<M, V>(&self, model: &M, view: V) -> Result<()>
    where
        M: Serialize,
        V: Display,
    {
        match self.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(model)?),
            OutputFormat::Plain => print!("{}", view),
        }
        Ok(())
    }

    /// Warnings go to stderr so JSON output stays parseable.
    pub fn render_warning(&self, message: &str) {
        eprintln!("Warning: {}", message);
    }
}
