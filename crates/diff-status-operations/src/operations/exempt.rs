use std::fmt;

use diff_status_core::{ChangedFile, ExecutionContext, PageCursor, RepoRef, StatusUpdate};
use tracing::debug;

use crate::Result;
use crate::matcher::ExemptPatterns;
use crate::traits::{CommitStatusWriter, PullRequestFiles};

pub struct ExemptInput {
    pub patterns: ExemptPatterns,
    pub statuses: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExemptOutcome {
    SkippedNotPullRequest,
    SkippedNoPullRequest,
    NotExempt {
        total_files: usize,
        uncovered: Vec<String>,
    },
    StatusesUpdated {
        total_files: usize,
        contexts: Vec<String>,
    },
}

impl ExemptOutcome {
    #[must_use]
    pub fn message(&self) -> &'static str {
        match self {
            Self::SkippedNotPullRequest => "Action only runs on pull requests - skipping",
            Self::SkippedNoPullRequest => {
                "Changed files are indeterminate (no pull request); skipping"
            }
            Self::NotExempt { .. } => "Changed files are not exempt from required statuses",
            Self::StatusesUpdated { .. } => "Successfully updated all status checks",
        }
    }
}

impl fmt::Display for ExemptOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

pub struct ExemptOperation<F, S> {
    files_provider: F,
    status_writer: S,
}

impl<F, S> ExemptOperation<F, S>
where
    F: PullRequestFiles,
    S: CommitStatusWriter,
{
    pub fn new(files_provider: F, status_writer: S) -> Self {
        Self {
            files_provider,
            status_writer,
        }
    }

    /// # Errors
    ///
    /// Returns the first error raised while listing files or writing statuses.
    /// Statuses written before the failure are left in place.
    pub async fn execute(
        &self,
        context: &ExecutionContext,
        input: &ExemptInput,
    ) -> Result<ExemptOutcome> {
        if !context.is_pull_request() {
            return Ok(ExemptOutcome::SkippedNotPullRequest);
        }

        let Some(pull_number) = context.pull_number() else {
            return Ok(ExemptOutcome::SkippedNoPullRequest);
        };

        let files = self.collect_files(&context.repo, pull_number).await?;

        let uncovered = input.patterns.uncovered(&files);
        if !uncovered.is_empty() {
            for file in &uncovered {
                debug!(filename = %file.filename, "file matches no exempt pattern");
            }
            return Ok(ExemptOutcome::NotExempt {
                total_files: files.len(),
                uncovered: uncovered.into_iter().map(|f| f.filename.clone()).collect(),
            });
        }

        for status in &input.statuses {
            let update = StatusUpdate::exempt(&context.sha, status);
            self.status_writer
                .create_commit_status(&context.repo, &update)
                .await?;
            debug!(context = %status, sha = %context.sha, "status marked successful");
        }

        Ok(ExemptOutcome::StatusesUpdated {
            total_files: files.len(),
            contexts: input.statuses.clone(),
        })
    }

    async fn collect_files(&self, repo: &RepoRef, pull_number: u64) -> Result<Vec<ChangedFile>> {
        let mut files = Vec::new();
        let mut cursor: Option<PageCursor> = None;
        let mut pages = 0_usize;

        loop {
            let page = self
                .files_provider
                .list_files_page(repo, pull_number, cursor.as_ref())
                .await?;
            pages += 1;
            debug!(page = pages, count = page.files.len(), "fetched changed files");

            files.extend(page.files);
            match page.next {
                Some(next) => cursor = Some(next),
                None => break,
            }
        }

        debug!(pages, total = files.len(), pull_number, "collected changed files");
        Ok(files)
    }
}
