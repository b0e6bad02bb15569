//! GitHub REST client backed by octocrab.
//!
//! The token is handed to octocrab once. It is never logged or included in
//! error messages.

use diff_status_core::{ChangedFile, FilesPage, PageCursor, RepoRef, StatusUpdate};
use octocrab::service::middleware::retry::RetryConfig;
use octocrab::{Octocrab, Page};
use serde::de::IgnoredAny;
use tracing::debug;

use crate::Result;

pub const DEFAULT_API_URL: &str = "https://api.github.com";

const FILES_PER_PAGE: u8 = 100;

#[derive(Clone)]
pub struct Client {
    octocrab: Octocrab,
}

impl Client {
    /// # Errors
    ///
    /// Returns [`crate::GitHubError::Http`] if `base_url` is not a valid URI or
    /// the client cannot be constructed.
    pub fn new(token: &str, base_url: &str) -> Result<Self> {
        let octocrab = Octocrab::builder()
            .base_uri(base_url.trim_end_matches('/'))?
            .personal_token(token.to_string())
            .add_retry_config(RetryConfig::None)
            .build()?;

        Ok(Self { octocrab })
    }

    /// Fetches one page of the files changed in a pull request. Without a
    /// cursor the first page is requested; the cursor of a page is the
    /// `rel="next"` URL GitHub returned for it.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or GitHub answers with a non-success status.
    pub async fn list_pull_request_files(
        &self,
        repo: &RepoRef,
        pull_number: u64,
        cursor: Option<&PageCursor>,
    ) -> Result<FilesPage> {
        let page: Page<ChangedFile> = match cursor {
            Some(cursor) => {
                debug!(url = cursor.as_str(), "listing pull request files");
                self.octocrab.get(cursor.as_str(), None::<&()>).await?
            }
            None => {
                let route = pull_request_files_route(repo, pull_number);
                debug!(%route, "listing pull request files");
                self.octocrab
                    .get(&route, Some(&[("per_page", FILES_PER_PAGE)]))
                    .await?
            }
        };

        Ok(FilesPage {
            files: page.items,
            next: page.next.map(|uri| PageCursor::new(uri.to_string())),
        })
    }

    /// # Errors
    ///
    /// Returns an error if the request fails or GitHub answers with a non-success status.
    pub async fn create_commit_status(&self, repo: &RepoRef, update: &StatusUpdate) -> Result<()> {
        let route = commit_status_route(repo, &update.sha);
        debug!(%route, context = %update.context, state = %update.state, "creating commit status");

        let _: IgnoredAny = self.octocrab.post(&route, Some(update)).await?;
        Ok(())
    }
}

fn pull_request_files_route(repo: &RepoRef, pull_number: u64) -> String {
    format!("/repos/{}/{}/pulls/{pull_number}/files", repo.owner, repo.name)
}

fn commit_status_route(repo: &RepoRef, sha: &str) -> String {
    format!("/repos/{}/{}/statuses/{sha}", repo.owner, repo.name)
}
