use std::sync::Mutex;

use async_trait::async_trait;
use diff_status_core::{ChangedFile, FilesPage, PageCursor, RepoRef, StatusUpdate};
use diff_status_github::GitHubError;

use crate::Result;
use crate::traits::{CommitStatusWriter, PullRequestFiles};

#[must_use]
pub fn files(names: &[&str]) -> Vec<ChangedFile> {
    names.iter().map(|name| ChangedFile::new(*name)).collect()
}

/// Serves a fixed list of pages. Page `n` (1-based) is addressed by the
/// cursor `page-n`; the first page needs no cursor.
pub struct MockFilesProvider {
    pages: Vec<Vec<ChangedFile>>,
    failure: Option<(usize, u16, String)>,
    requests: Mutex<Vec<Option<PageCursor>>>,
}

impl MockFilesProvider {
    #[must_use]
    pub fn new(pages: Vec<Vec<ChangedFile>>) -> Self {
        Self {
            pages,
            failure: None,
            requests: Mutex::new(Vec::new()),
        }
    }

    #[must_use]
    pub fn single_page(files: Vec<ChangedFile>) -> Self {
        Self::new(vec![files])
    }

    #[must_use]
    pub fn failing_at_page(mut self, page: usize, status: u16, message: &str) -> Self {
        self.failure = Some((page, status, message.to_string()));
        self
    }

    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn cursors_requested(&self) -> Vec<Option<PageCursor>> {
        self.requests.lock().expect("lock poisoned").clone()
    }

    #[must_use]
    pub fn page_requests(&self) -> usize {
        self.cursors_requested().len()
    }

    fn page_number(cursor: Option<&PageCursor>) -> usize {
        cursor
            .and_then(|c| c.as_str().strip_prefix("page-"))
            .and_then(|n| n.parse().ok())
            .unwrap_or(1)
    }
}

#[async_trait]
impl PullRequestFiles for MockFilesProvider {
    async fn list_files_page(
        &self,
        _repo: &RepoRef,
        _pull_number: u64,
        cursor: Option<&PageCursor>,
    ) -> Result<FilesPage> {
        self.requests
            .lock()
            .expect("lock poisoned")
            .push(cursor.cloned());

        let number = Self::page_number(cursor);
        if let Some((failing_page, status, message)) = &self.failure {
            if *failing_page == number {
                return Err(GitHubError::Api {
                    status: *status,
                    message: message.clone(),
                }
                .into());
            }
        }

        let files = self.pages.get(number - 1).cloned().unwrap_or_default();
        let next = (number < self.pages.len())
            .then(|| PageCursor::new(format!("page-{}", number + 1)));

        Ok(FilesPage { files, next })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenStatus {
    pub repo: RepoRef,
    pub update: StatusUpdate,
}

#[derive(Default)]
pub struct MockStatusWriter {
    fail_on: Option<String>,
    written: Mutex<Vec<WrittenStatus>>,
}

impl MockStatusWriter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn failing_on(mut self, context: &str) -> Self {
        self.fail_on = Some(context.to_string());
        self
    }

    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn written(&self) -> Vec<WrittenStatus> {
        self.written.lock().expect("lock poisoned").clone()
    }
}

#[async_trait]
impl CommitStatusWriter for MockStatusWriter {
    async fn create_commit_status(&self, repo: &RepoRef, update: &StatusUpdate) -> Result<()> {
        if self.fail_on.as_deref() == Some(update.context.as_str()) {
            return Err(GitHubError::Api {
                status: 422,
                message: "Validation Failed".to_string(),
            }
            .into());
        }

        self.written
            .lock()
            .expect("lock poisoned")
            .push(WrittenStatus {
                repo: repo.clone(),
                update: update.clone(),
            });
        Ok(())
    }
}
