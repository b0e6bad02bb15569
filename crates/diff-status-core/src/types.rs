use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::CoreError;

pub const PULL_REQUEST_EVENT: &str = "pull_request";

pub const EXEMPT_DESCRIPTION: &str = "Changed files are exempt from this requirement";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepoRef {
    pub owner: String,
    pub name: String,
}

impl RepoRef {
    #[must_use]
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }
}

impl FromStr for RepoRef {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CoreError::InvalidRepository {
            value: s.to_string(),
        };

        let (owner, name) = s.trim().split_once('/').ok_or_else(invalid)?;
        if owner.is_empty() || name.is_empty() || name.contains('/') {
            return Err(invalid());
        }

        Ok(Self::new(owner, name))
    }
}

impl fmt::Display for RepoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// Event metadata supplied by the host for a single run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionContext {
    pub event_name: String,
    pub repo: RepoRef,
    /// `None` when the event carries no pull request number.
    pub pull_number: Option<u64>,
    pub sha: String,
}

impl ExecutionContext {
    #[must_use]
    pub fn is_pull_request(&self) -> bool {
        self.event_name == PULL_REQUEST_EVENT
    }

    /// Zero is treated the same as a missing number.
    #[must_use]
    pub fn pull_number(&self) -> Option<u64> {
        self.pull_number.filter(|n| *n != 0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangedFile {
    pub filename: String,
}

impl ChangedFile {
    #[must_use]
    pub fn new(filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
        }
    }
}

/// Opaque position of the next page in a paginated listing.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PageCursor(String);

impl PageCursor {
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilesPage {
    pub files: Vec<ChangedFile>,
    pub next: Option<PageCursor>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommitState {
    Error,
    Failure,
    Pending,
    Success,
}

impl fmt::Display for CommitState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Error => "error",
            Self::Failure => "failure",
            Self::Pending => "pending",
            Self::Success => "success",
        };
        write!(f, "{s}")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusUpdate {
    #[serde(skip)]
    pub sha: String,
    pub state: CommitState,
    pub context: String,
    pub description: String,
}

impl StatusUpdate {
    #[must_use]
    pub fn exempt(sha: impl Into<String>, context: impl Into<String>) -> Self {
        Self {
            sha: sha.into(),
            state: CommitState::Success,
            context: context.into(),
            description: EXEMPT_DESCRIPTION.to_string(),
        }
    }
}
