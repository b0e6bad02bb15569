use std::path::Path;

use diff_status_core::{ExecutionContext, PULL_REQUEST_EVENT, RepoRef};
use serde::Deserialize;
use tracing::warn;

use crate::args::ContextArgs;
use crate::error::{CliError, Result};

#[derive(Debug, Deserialize)]
struct EventPayload {
    issue: Option<NumberedItem>,
    pull_request: Option<NumberedItem>,
    number: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct NumberedItem {
    number: Option<u64>,
}

impl EventPayload {
    fn pull_number(&self) -> Option<u64> {
        self.issue
            .as_ref()
            .and_then(|i| i.number)
            .or_else(|| self.pull_request.as_ref().and_then(|p| p.number))
            .or(self.number)
    }
}

/// Whether the triggering event is a pull request, decided from the event name
/// alone so other events skip before the rest of the context is read.
pub(crate) fn is_pull_request_event(args: &ContextArgs) -> bool {
    args.event_name.as_deref() == Some(PULL_REQUEST_EVENT)
}

pub(crate) fn resolve_context(args: &ContextArgs) -> Result<ExecutionContext> {
    let repository = args
        .repository
        .as_deref()
        .ok_or(CliError::MissingContext {
            name: "GITHUB_REPOSITORY",
        })?;
    let repo: RepoRef = repository.parse()?;

    let sha = args
        .sha
        .clone()
        .ok_or(CliError::MissingContext { name: "GITHUB_SHA" })?;

    let pull_number = match args.pull_number {
        Some(number) => Some(number),
        None => match &args.event_path {
            Some(path) => read_pull_number(path)?,
            None => None,
        },
    };

    Ok(ExecutionContext {
        event_name: args.event_name.clone().unwrap_or_default(),
        repo,
        pull_number,
        sha,
    })
}

/// Reads the pull request number from an event payload file. A missing file
/// yields `None`.
pub(crate) fn read_pull_number(path: &Path) -> Result<Option<u64>> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            warn!(path = %path.display(), "event payload does not exist");
            return Ok(None);
        }
        Err(source) => {
            return Err(CliError::EventPayloadRead {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let payload: EventPayload =
        serde_json::from_str(&content).map_err(|source| CliError::EventPayloadParse {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(payload.pull_number())
}
