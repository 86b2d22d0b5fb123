/// Domain-level errors shared by the repository and HTTP layers.
///
/// Every variant carries the exact client-facing message; the HTTP layer
/// only decides the status code.
#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    /// A referenced entity does not exist (maps to 404).
    #[error("{entity} does not exist")]
    NotFound { entity: &'static str },

    /// Malformed client input, rejected before any storage access (maps to 400).
    #[error("{0}")]
    Validation(String),
}

impl DomainError {
    /// Shorthand for a validation failure with a fixed message.
    pub fn validation(msg: impl Into<String>) -> Self {
        DomainError::Validation(msg.into())
    }
}
