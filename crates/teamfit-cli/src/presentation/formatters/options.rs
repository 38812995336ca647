/// Display formatting options
#[derive(Debug, Clone)]
pub struct FormatOptions {
    pub enable_color: bool,
    pub relative_time: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            enable_color: true,
            relative_time: false,
        }
    }
}
