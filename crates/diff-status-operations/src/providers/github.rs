use async_trait::async_trait;
use diff_status_core::{FilesPage, PageCursor, RepoRef, StatusUpdate};
use diff_status_github::Client;

use crate::Result;
use crate::traits::{CommitStatusWriter, PullRequestFiles};

#[derive(Clone)]
pub struct GitHubProvider {
    client: Client,
}

impl GitHubProvider {
    #[must_use]
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// # Errors
    ///
    /// Returns an error if `api_url` is not a valid URI or the client cannot be constructed.
    pub fn connect(token: &str, api_url: &str) -> Result<Self> {
        Ok(Self::new(Client::new(token, api_url)?))
    }
}

#[async_trait]
impl PullRequestFiles for GitHubProvider {
    async fn list_files_page(
        &self,
        repo: &RepoRef,
        pull_number: u64,
        cursor: Option<&PageCursor>,
    ) -> Result<FilesPage> {
        Ok(self
            .client
            .list_pull_request_files(repo, pull_number, cursor)
            .await?)
    }
}

#[async_trait]
impl CommitStatusWriter for GitHubProvider {
    async fn create_commit_status(&self, repo: &RepoRef, update: &StatusUpdate) -> Result<()> {
        Ok(self.client.create_commit_status(repo, update).await?)
    }
}
