use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Input required and not supplied: {name}")]
    MissingInput { name: &'static str },

    #[error("invalid repository '{value}', expected 'owner/name'")]
    InvalidRepository { value: String },
}

pub type Result<T> = std::result::Result<T, CoreError>;
