use crate::core::entities::PlaceholderWrapper;
use crate::core::intent_index::FlowIntentIndexer;
use crate::core::writer::{FileWriter, RenderedFiles, WriteReport};
use crate::domain::ports::{ProjectSource, Storage};
use crate::utils::error::Result;
use chrono::Local;

#[derive(Debug, Clone)]
pub struct DryRunReport {
    pub project_name: String,
    pub intents: usize,
    pub templates: usize,
    pub files: RenderedFiles,
}

/// Fetches a project and turns it into `.lu` / `.lg` files.
pub struct ExportEngine<P: ProjectSource, S: Storage + Clone> {
    source: P,
    storage: S,
    entity_delimiter: char,
}

impl<P: ProjectSource, S: Storage + Clone> ExportEngine<P, S> {
    pub fn new(source: P, storage: S) -> Self {
        Self {
            source,
            storage,
            entity_delimiter: '{',
        }
    }

    pub fn with_entity_delimiter(mut self, delimiter: char) -> Self {
        self.entity_delimiter = delimiter;
        self
    }

    async fn prepare(&self) -> Result<FileWriter<S>> {
        tracing::info!("Fetching project from {}", self.source.describe());
        let project = self.source.fetch().await?;
        tracing::info!(
            "Fetched project '{}': {} messages, {} intents",
            project.project.name,
            project.messages().len(),
            project.intents.len()
        );

        Ok(FileWriter::with_parts(
            self.storage.clone(),
            project,
            &FlowIntentIndexer,
            Box::new(PlaceholderWrapper::new(self.entity_delimiter)),
        ))
    }

    pub async fn run(&self) -> Result<WriteReport> {
        let writer = self.prepare().await?;

        tracing::debug!("Resetting output directory {}", self.storage.root().display());
        self.storage.reset().await?;

        writer.write().await
    }

    /// Everything `run` does except touching the output directory.
    pub async fn plan(&self) -> Result<DryRunReport> {
        let writer = self.prepare().await?;
        let files = writer.render(Local::now());
        Ok(DryRunReport {
            project_name: writer.project().project.name.clone(),
            intents: writer.project().intents.len(),
            templates: writer.index().len(),
            files,
        })
    }
}
