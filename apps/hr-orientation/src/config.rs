use std::path::PathBuf;

use anyhow::{Result, anyhow};
use clap::ValueEnum;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppConfig {
    pub output_format: OutputFormat,
    pub report_path: Option<PathBuf>,
    pub log_filter: Option<String>,
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let output_format = match non_empty(lookup("HR_OUTPUT_FORMAT")) {
            Some(raw) => OutputFormat::from_str(&raw, true)
                .map_err(|_| anyhow!("invalid HR_OUTPUT_FORMAT {raw:?}, expected text or json"))?,
            None => OutputFormat::default(),
        };
        let report_path = non_empty(lookup("HR_REPORT_PATH")).map(PathBuf::from);
        let log_filter = non_empty(lookup("HR_LOG"));

        Ok(Self {
            output_format,
            report_path,
            log_filter,
        })
    }

    /// Command line flags take precedence over the environment.
    pub fn with_overrides(
        mut self,
        output_format: Option<OutputFormat>,
        report_path: Option<PathBuf>,
    ) -> Self {
        if let Some(format) = output_format {
            self.output_format = format;
        }
        if report_path.is_some() {
            self.report_path = report_path;
        }
        self
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
