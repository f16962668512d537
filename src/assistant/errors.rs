use thiserror::Error;

/// Errors from the prompt subsystem.
#[derive(Debug, Error)]
pub enum PromptError {
    #[error("unknown prompt template: {0}")]
    UnknownTemplate(String),

    #[error("template `{template}` is missing variable `{variable}`")]
    MissingVariable { template: String, variable: String },
}

pub type PromptResult<T> = Result<T, PromptError>;
