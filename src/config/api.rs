use crate::core::{Intent, Project, ProjectSource, Result};
use crate::domain::model::{BoardEnvelope, ProjectMeta};
use crate::utils::error::ExportError;
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;

/// Reads a project straight from the flow designer's REST API.
pub struct ApiProjectSource {
    client: Client,
    endpoint: String,
    team_id: String,
    project_id: String,
    board_id: String,
    token: String,
}

impl ApiProjectSource {
    pub fn new(
        endpoint: &str,
        team_id: &str,
        project_id: &str,
        board_id: &str,
        token: &str,
        timeout: Duration,
    ) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            team_id: team_id.to_string(),
            project_id: project_id.to_string(),
            board_id: board_id.to_string(),
            token: token.to_string(),
        })
    }

    fn project_url(&self, suffix: &str) -> String {
        format!(
            "{}/teams/{}/projects/{}{}",
            self.endpoint, self.team_id, self.project_id, suffix
        )
    }

    async fn get_json<T: DeserializeOwned>(&self, suffix: &str) -> Result<T> {
        let url = self.project_url(suffix);
        tracing::debug!("Making API request to: {}", url);

        let response = self.client.get(&url).bearer_auth(&self.token).send().await?;
        tracing::debug!("API response status: {}", response.status());

        if !response.status().is_success() {
            return Err(ExportError::ApiStatusError {
                url,
                status: response.status().as_u16(),
            });
        }

        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl ProjectSource for ApiProjectSource {
    async fn fetch(&self) -> Result<Project> {
        let board_suffix = format!("/boards/{}", self.board_id);
        let (project, board, intents, entities, variables) = tokio::try_join!(
            self.get_json::<ProjectMeta>(""),
            self.get_json::<BoardEnvelope>(&board_suffix),
            self.get_json::<Vec<Intent>>("/intents"),
            self.get_json::<Vec<Value>>("/entities"),
            self.get_json::<Vec<Value>>("/variables"),
        )?;

        Ok(Project {
            project,
            board,
            intents,
            entities,
            variables,
        })
    }

    fn describe(&self) -> String {
        self.project_url("")
    }
}
