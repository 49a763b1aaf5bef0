use crate::domain::validation::FormField;

/// Failure reported by the remote mutation collaborator.
///
/// The service's error wording is classified into these variants at the
/// gateway boundary; nothing downstream inspects message text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MutationError {
    /// A unique field is already taken by another project.
    Conflict { field: FormField },
    /// The service supplied a human-readable failure message.
    Message(String),
    /// The request failed in a way that cannot be presented per field.
    Unexpected(String),
}

impl std::fmt::Display for MutationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MutationError::Conflict { field } => {
                write!(f, "unique constraint violated on {}", field)
            }
            MutationError::Message(message) => write!(f, "{}", message),
            MutationError::Unexpected(detail) => {
                write!(f, "unexpected service failure: {}", detail)
            }
        }
    }
}

impl std::error::Error for MutationError {}

pub type MutationResult<T> = Result<T, MutationError>;
