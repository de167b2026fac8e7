pub mod api;
pub mod cli;
pub mod source;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use self::args::CliConfig;

#[cfg(feature = "cli")]
mod args {
    use super::toml_config::{SourceKind, TomlConfig};
    use crate::utils::error::Result;
    use clap::Parser;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, Serialize, Deserialize, Parser)]
    #[command(name = "flow-export")]
    #[command(about = "Export a conversational flow project to .lu and .lg files")]
    pub struct CliConfig {
        /// Path to a TOML configuration file
        #[arg(short, long)]
        pub config: Option<String>,

        /// Project export (JSON) to read instead of the configured source
        #[arg(short, long)]
        pub input: Option<String>,

        /// Directory that receives the generated files; recreated on every run
        #[arg(short, long)]
        pub output_dir: Option<String>,

        /// Opening character used to wrap entity placeholders
        #[arg(long)]
        pub delimiter: Option<char>,

        #[arg(short, long, help = "Enable verbose output")]
        pub verbose: bool,

        #[arg(long, help = "Emit logs as JSON lines")]
        pub json_logs: bool,

        /// Render both files and report on them without writing anything
        #[arg(long)]
        pub dry_run: bool,
    }

    impl CliConfig {
        /// Loads the configuration file (if any) and applies command line overrides.
        pub fn load(&self) -> Result<TomlConfig> {
            let mut config = match &self.config {
                Some(path) => TomlConfig::from_file(path)?,
                None => TomlConfig::default(),
            };

            if let Some(input) = &self.input {
                config.source.r#type = SourceKind::File;
                config.source.path = Some(input.clone());
            }
            if let Some(output_dir) = &self.output_dir {
                config.output.dir = output_dir.clone();
            }
            if let Some(delimiter) = self.delimiter {
                config.output.entity_delimiter = Some(delimiter);
            }

            Ok(config)
        }
    }

}
