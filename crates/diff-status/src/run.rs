use diff_status_operations::matcher::ExemptPatterns;
use diff_status_operations::operations::{ExemptInput, ExemptOperation, ExemptOutcome};
use diff_status_operations::providers::GitHubProvider;
use tracing::debug;

use crate::args::{ContextArgs, InputArgs};
use crate::environment::{is_pull_request_event, resolve_context};
use crate::error::Result;

pub(crate) async fn run(inputs: &InputArgs, context_args: &ContextArgs) -> Result<ExemptOutcome> {
    let inputs = inputs.resolve()?;
    debug!(?inputs, "resolved inputs");

    if !is_pull_request_event(context_args) {
        return Ok(ExemptOutcome::SkippedNotPullRequest);
    }

    let patterns = ExemptPatterns::new(inputs.globs())?;
    let provider = GitHubProvider::connect(inputs.token(), &context_args.api_url)?;

    let context = resolve_context(context_args)?;
    debug!(
        event = %context.event_name,
        repository = %context.repo,
        pull_number = ?context.pull_number,
        sha = %context.sha,
        "resolved execution context"
    );

    let operation = ExemptOperation::new(&provider, &provider);
    let input = ExemptInput {
        patterns,
        statuses: inputs.statuses().to_vec(),
    };

    Ok(operation.execute(&context, &input).await?)
}
