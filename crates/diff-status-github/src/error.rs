use thiserror::Error;

#[derive(Debug, Error)]
pub enum GitHubError {
    #[error("request to GitHub failed")]
    Http(#[source] octocrab::Error),

    #[error("{message}")]
    Api { status: u16, message: String },
}

impl From<octocrab::Error> for GitHubError {
    fn from(err: octocrab::Error) -> Self {
        match err {
            octocrab::Error::GitHub { source, .. } => Self::Api {
                status: source.status_code.as_u16(),
                message: source.message.clone(),
            },
            other => Self::Http(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_displays_message_verbatim() {
        let err = GitHubError::Api {
            status: 403,
            message: "Resource not accessible by integration".to_string(),
        };

        assert_eq!(err.to_string(), "Resource not accessible by integration");
    }
}
