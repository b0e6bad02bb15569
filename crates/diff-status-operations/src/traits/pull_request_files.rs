use async_trait::async_trait;
use diff_status_core::{FilesPage, PageCursor, RepoRef};

use crate::Result;

#[async_trait]
pub trait PullRequestFiles: Send + Sync {
    /// Fetches the page at `cursor`, or the first page when `cursor` is `None`.
    /// The returned page carries the cursor of the following page, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the page cannot be fetched.
    async fn list_files_page(
        &self,
        repo: &RepoRef,
        pull_number: u64,
        cursor: Option<&PageCursor>,
    ) -> Result<FilesPage>;
}

#[async_trait]
impl<T: PullRequestFiles + ?Sized> PullRequestFiles for &T {
    async fn list_files_page(
        &self,
        repo: &RepoRef,
        pull_number: u64,
        cursor: Option<&PageCursor>,
    ) -> Result<FilesPage> {
        (**self).list_files_page(repo, pull_number, cursor).await
    }
}
