use std::path::PathBuf;

use clap::Args;
use diff_status_core::ActionInputs;
use diff_status_github::DEFAULT_API_URL;

use crate::error::Result;

#[derive(Args, Debug)]
pub(crate) struct InputArgs {
    /// Token used to call the GitHub API
    #[arg(long, env = "INPUT_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Newline-separated glob patterns; every changed file must match one
    #[arg(long, env = "INPUT_GLOBS")]
    pub globs: Option<String>,

    /// Newline-separated status contexts to mark successful
    #[arg(long, env = "INPUT_STATUSES")]
    pub statuses: Option<String>,
}

impl InputArgs {
    pub(crate) fn resolve(&self) -> Result<ActionInputs> {
        Ok(ActionInputs::new(
            self.token.as_deref(),
            self.globs.as_deref(),
            self.statuses.as_deref(),
        )?)
    }
}

#[derive(Args, Debug)]
pub(crate) struct ContextArgs {
    /// Name of the event that triggered the run
    #[arg(long, env = "GITHUB_EVENT_NAME")]
    pub event_name: Option<String>,

    /// Repository in `owner/name` form
    #[arg(long, env = "GITHUB_REPOSITORY")]
    pub repository: Option<String>,

    /// Commit SHA that receives the statuses
    #[arg(long, env = "GITHUB_SHA")]
    pub sha: Option<String>,

    /// Path to the JSON payload of the triggering event
    #[arg(long, env = "GITHUB_EVENT_PATH")]
    pub event_path: Option<PathBuf>,

    /// Pull request number (default: read from the event payload)
    #[arg(long)]
    pub pull_number: Option<u64>,

    /// Base URL of the GitHub REST API
    #[arg(long, env = "GITHUB_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,
}
