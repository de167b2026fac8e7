use crate::core::intent_index::IntentIndex;
use crate::domain::model::{Intent, Message, Project};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// Rewrites entity placeholders inside natural-language text.
pub trait EntityWrapper: Send + Sync {
    fn wrap(&self, text: &str) -> String;
}

/// Resolves which intents lead into which messages.
pub trait IntentIndexer: Send + Sync {
    fn build_index(&self, messages: &[Message], intents: &[Intent]) -> IntentIndex;
}

pub trait Storage: Send + Sync {
    fn root(&self) -> &Path;
    fn reset(&self) -> impl std::future::Future<Output = Result<()>> + Send;
    fn write_file(
        &self,
        name: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<PathBuf>> + Send;
}

#[async_trait]
pub trait ProjectSource: Send + Sync {
    async fn fetch(&self) -> Result<Project>;
    fn describe(&self) -> String;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceSettings {
    File {
        path: PathBuf,
    },
    Api {
        endpoint: String,
        team_id: String,
        project_id: String,
        board_id: String,
        token: String,
        timeout_seconds: u64,
    },
}

pub trait ConfigProvider: Send + Sync {
    fn output_dir(&self) -> &Path;
    fn entity_delimiter(&self) -> char;
    fn source(&self) -> Result<SourceSettings>;
}
