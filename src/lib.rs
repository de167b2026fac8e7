pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::api::ApiProjectSource;
pub use config::cli::LocalStorage;
pub use config::source::{AnySource, FileProjectSource};
pub use config::toml_config::TomlConfig;
pub use core::{
    engine::ExportEngine,
    writer::{restore_output, FileWriter, WriteReport},
};
pub use utils::error::{ExportError, Result};
