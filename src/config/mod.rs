pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::domain::model::SourceFormat;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_json_suffix, validate_path, validate_required_field, validate_url, Validate,
};
use clap::Parser;
use toml_config::TomlConfig;

pub const DEFAULT_REVIEW_URL: &str = "http://localhost:3000";
pub const USAGE: &str = "Usage: review-convert <grouping_export_json_file>";

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "review-convert")]
#[command(about = "Convert a product grouping export into the review app import format")]
pub struct CliConfig {
    /// Grouping export to convert; the review file is written next to it
    pub input: Option<String>,

    /// Export format of the input file
    #[arg(long, value_enum)]
    pub format: Option<SourceFormat>,

    /// Address of the review app shown in the next steps
    #[arg(long)]
    pub review_url: Option<String>,

    /// Optional TOML settings file
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Fills options not given on the command line from the settings file.
    pub fn merge_settings(&mut self, settings: &TomlConfig) {
        if self.format.is_none() {
            self.format = settings.source_format();
        }
        if self.review_url.is_none() {
            self.review_url = settings.review_url().map(str::to_string);
        }
    }
}

impl ConfigProvider for CliConfig {
    fn input_path(&self) -> &str {
        self.input.as_deref().unwrap_or_default()
    }

    fn source_format(&self) -> SourceFormat {
        self.format.unwrap_or_default()
    }

    fn review_url(&self) -> &str {
        self.review_url.as_deref().unwrap_or(DEFAULT_REVIEW_URL)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        let input = validate_required_field("input", &self.input)?;
        validate_path("input", input)?;
        validate_json_suffix("input", input)?;
        validate_url("review_url", ConfigProvider::review_url(self))?;
        Ok(())
    }
}
