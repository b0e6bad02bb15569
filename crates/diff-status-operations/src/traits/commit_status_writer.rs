use async_trait::async_trait;
use diff_status_core::{RepoRef, StatusUpdate};

use crate::Result;

#[async_trait]
pub trait CommitStatusWriter: Send + Sync {
    /// # Errors
    ///
    /// Returns an error if the status cannot be written.
    async fn create_commit_status(&self, repo: &RepoRef, update: &StatusUpdate) -> Result<()>;
}

#[async_trait]
impl<T: CommitStatusWriter + ?Sized> CommitStatusWriter for &T {
    async fn create_commit_status(&self, repo: &RepoRef, update: &StatusUpdate) -> Result<()> {
        (**self).create_commit_status(repo, update).await
    }
}
