use crate::config::api::ApiProjectSource;
use crate::core::{Project, ProjectSource, Result, SourceSettings};
use crate::utils::error::ExportError;
use async_trait::async_trait;
use std::path::PathBuf;
use std::time::Duration;

/// Reads a project export saved as JSON.
#[derive(Debug, Clone)]
pub struct FileProjectSource {
    path: PathBuf,
}

impl FileProjectSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ProjectSource for FileProjectSource {
    async fn fetch(&self) -> Result<Project> {
        let content = tokio::fs::read_to_string(&self.path).await?;
        let value: serde_json::Value = serde_json::from_str(&content)?;
        if !value.is_object() {
            return Err(ExportError::ProjectError {
                message: format!(
                    "{} does not contain a project object",
                    self.path.display()
                ),
            });
        }
        Ok(serde_json::from_value(value)?)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// The project source selected by configuration.
pub enum AnySource {
    File(FileProjectSource),
    Api(ApiProjectSource),
}

impl AnySource {
    pub fn from_settings(settings: SourceSettings) -> Result<Self> {
        match settings {
            SourceSettings::File { path } => Ok(AnySource::File(FileProjectSource::new(path))),
            SourceSettings::Api {
                endpoint,
                team_id,
                project_id,
                board_id,
                token,
                timeout_seconds,
            } => Ok(AnySource::Api(ApiProjectSource::new(
                &endpoint,
                &team_id,
                &project_id,
                &board_id,
                &token,
                Duration::from_secs(timeout_seconds),
            )?)),
        }
    }
}

#[async_trait]
impl ProjectSource for AnySource {
    async fn fetch(&self) -> Result<Project> {
        match self {
            AnySource::File(source) => source.fetch().await,
            AnySource::Api(source) => source.fetch().await,
        }
    }

    fn describe(&self) -> String {
        match self {
            AnySource::File(source) => source.describe(),
            AnySource::Api(source) => source.describe(),
        }
    }
}
