use thiserror::Error;

pub type Result<T> = std::result::Result<T, GraphError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("Type not found: {0}")]
    TypeNotFound(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl GraphError {
    /// Create a type-not-found error
    pub fn type_not_found(what: impl Into<String>) -> Self {
        Self::TypeNotFound(what.into())
    }

    /// Create an invalid config error
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }
}
