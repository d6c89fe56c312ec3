pub type StaggerResult<T> = Result<T, StaggerError>;

#[derive(thiserror::Error, Debug)]
pub enum StaggerError {
    #[error("invalid preset: unknown animation preset '{0}'")]
    InvalidPreset(String),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("serialization error: {0}")]
    Serde(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl StaggerError {
    pub fn invalid_preset(name: impl Into<String>) -> Self {
        Self::InvalidPreset(name.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}
