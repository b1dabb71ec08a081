pub mod convert;
pub mod etl;
pub mod notebook;
pub mod pipeline;
pub mod source;

pub use crate::domain::model::{ReviewDocument, SourceDocument};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
