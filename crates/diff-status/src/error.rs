use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] diff_status_core::CoreError),

    #[error(transparent)]
    Operation(#[from] diff_status_operations::OperationError),

    #[error("required environment variable '{name}' is not set")]
    MissingContext { name: &'static str },

    #[error("failed to read event payload '{path}'")]
    EventPayloadRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse event payload '{path}'")]
    EventPayloadParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, CliError>;

const UNKNOWN_ERROR: &str = "An unknown error occurred";

/// Message reported to the runner for a failed run: the error followed by its
/// causes, joined with `: `.
pub(crate) fn failure_message(error: &(dyn std::error::Error + 'static)) -> String {
    let mut parts = Vec::new();
    let mut current = Some(error);
    while let Some(err) = current {
        let text = err.to_string();
        if !text.trim().is_empty() && parts.last() != Some(&text) {
            parts.push(text);
        }
        current = err.source();
    }

    if parts.is_empty() {
        UNKNOWN_ERROR.to_string()
    } else {
        parts.join(": ")
    }
}

#[cfg(test)]
mod tests {
    use std::fmt;
    use std::path::PathBuf;

    use diff_status_core::CoreError;
    use diff_status_github::GitHubError;
    use diff_status_operations::OperationError;

    use super::*;

    #[derive(Debug)]
    struct Silent;

    impl fmt::Display for Silent {
        fn fmt(&self, _f: &mut fmt::Formatter<'_>) -> fmt::Result {
            Ok(())
        }
    }

    impl std::error::Error for Silent {}

    #[test]
    fn missing_input_surfaces_unchanged() {
        let err: CliError = CoreError::MissingInput { name: "token" }.into();

        assert_eq!(
            failure_message(&err),
            "Input required and not supplied: token"
        );
    }

    #[test]
    fn api_error_surfaces_unchanged() {
        let err: CliError = OperationError::from(GitHubError::Api {
            status: 401,
            message: "Bad credentials".to_string(),
        })
        .into();

        assert_eq!(failure_message(&err), "Bad credentials");
    }

    #[test]
    fn causes_are_appended() {
        let err = CliError::EventPayloadRead {
            path: PathBuf::from("/tmp/event.json"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };

        let message = failure_message(&err);

        assert!(message.starts_with("failed to read event payload '/tmp/event.json'"));
        assert!(message.ends_with(": denied"));
    }

    #[test]
    fn error_without_message_reports_unknown_error() {
        assert_eq!(failure_message(&Silent), "An unknown error occurred");
    }

    #[test]
    fn missing_context_names_variable() {
        let err = CliError::MissingContext {
            name: "GITHUB_REPOSITORY",
        };

        assert!(err.to_string().contains("GITHUB_REPOSITORY"));
    }
}
