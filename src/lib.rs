#[cfg(feature = "cli")]
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{cli::LocalStorage, toml_config::TomlConfig, CliConfig};

pub use core::{
    etl::{ConversionEngine, ConversionReport},
    pipeline::ReviewPipeline,
};
pub use domain::model::{ReviewDocument, ReviewStatus, SourceFormat};
pub use domain::stats::ReviewStats;
pub use utils::error::{ConvertError, Result};
