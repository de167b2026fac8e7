use crate::core::entities::PlaceholderWrapper;
use crate::core::intent_index::{FlowIntentIndexer, IntentIndex};
use crate::core::lg::build_lg;
use crate::core::lu::build_lu;
use crate::core::sections::generation_line;
use crate::domain::model::Project;
use crate::domain::ports::{EntityWrapper, IntentIndexer, Storage};
use crate::utils::error::Result;
use chrono::{DateTime, Local};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Removes whatever sits at `output_dir` (directory, file or symlink), then
/// creates it as an empty directory.
pub async fn restore_output(output_dir: impl AsRef<Path>) -> Result<()> {
    let output_dir = output_dir.as_ref();
    match tokio::fs::symlink_metadata(output_dir).await {
        Ok(metadata) if metadata.is_dir() => {
            tokio::fs::remove_dir_all(output_dir).await?;
            tracing::debug!("Removed {}", output_dir.display());
        }
        Ok(_) => {
            tokio::fs::remove_file(output_dir).await?;
            tracing::debug!("Removed file {}", output_dir.display());
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {}
        Err(e) => return Err(e.into()),
    }
    tokio::fs::create_dir_all(output_dir).await?;
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFiles {
    pub lu_name: String,
    pub lu: String,
    pub lg_name: String,
    pub lg: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteReport {
    pub lu_path: PathBuf,
    pub lg_path: PathBuf,
    pub intents: usize,
    pub templates: usize,
}

pub struct FileWriter<S: Storage> {
    storage: S,
    project: Project,
    index: IntentIndex,
    wrapper: Box<dyn EntityWrapper>,
}

impl<S: Storage> FileWriter<S> {
    pub fn new(storage: S, project: Project) -> Self {
        Self::with_parts(
            storage,
            project,
            &FlowIntentIndexer,
            Box::new(PlaceholderWrapper::default()),
        )
    }

    /// The intent index is built here, once, and reused by every `write`.
    pub fn with_parts(
        storage: S,
        project: Project,
        indexer: &dyn IntentIndexer,
        wrapper: Box<dyn EntityWrapper>,
    ) -> Self {
        let index = indexer.build_index(project.messages(), &project.intents);
        Self {
            storage,
            project,
            index,
            wrapper,
        }
    }

    pub fn index(&self) -> &IntentIndex {
        &self.index
    }

    pub fn project(&self) -> &Project {
        &self.project
    }

    pub fn render(&self, at: DateTime<Local>) -> RenderedFiles {
        let header = generation_line(at);
        let slug = self.project.slug();
        RenderedFiles {
            lu_name: format!("{}.lu", slug),
            lu: build_lu(&header, &self.project.intents, self.wrapper.as_ref()),
            lg_name: format!("{}.lg", slug),
            lg: build_lg(&header, &self.index, &self.project, self.wrapper.as_ref()),
        }
    }

    pub async fn write(&self) -> Result<WriteReport> {
        self.write_at(Local::now()).await
    }

    pub async fn write_at(&self, at: DateTime<Local>) -> Result<WriteReport> {
        let files = self.render(at);
        tracing::debug!(
            "Writing {} ({} bytes) and {} ({} bytes)",
            files.lu_name,
            files.lu.len(),
            files.lg_name,
            files.lg.len()
        );

        let (lu_path, lg_path) = tokio::try_join!(
            self.storage.write_file(&files.lu_name, files.lu.as_bytes()),
            self.storage.write_file(&files.lg_name, files.lg.as_bytes()),
        )?;

        let report = WriteReport {
            lu_path,
            lg_path,
            intents: self.project.intents.len(),
            templates: self.index.len(),
        };
        tracing::info!(
            "Wrote {} intents to {} and {} templates to {}",
            report.intents,
            report.lu_path.display(),
            report.templates,
            report.lg_path.display()
        );
        Ok(report)
    }
}
