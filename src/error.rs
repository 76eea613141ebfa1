pub type CueResult<T> = Result<T, CueError>;

#[derive(thiserror::Error, Debug)]
pub enum CueError {
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("state error: {0}")]
    State(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CueError {
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    pub fn state(msg: impl Into<String>) -> Self {
        Self::State(msg.into())
    }
}
