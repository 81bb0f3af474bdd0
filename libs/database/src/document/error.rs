use std::fmt::Display;

/// Longest diagnostic carried by [`StoreError::Fault`], in characters.
pub const MAX_DIAGNOSTIC_LEN: usize = 200;

/// Failure of a document store operation.
///
/// Driver errors are flattened into a truncated message so callers never see
/// raw internal error types.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// No connection was established at startup.
    #[error("Database not configured")]
    Unavailable,

    #[error("{0}")]
    Fault(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

impl StoreError {
    /// Build a [`StoreError::Fault`] from any displayable cause.
    pub fn fault(cause: impl Display) -> Self {
        StoreError::Fault(truncate(&cause.to_string()))
    }
}

impl From<mongodb::error::Error> for StoreError {
    fn from(err: mongodb::error::Error) -> Self {
        StoreError::fault(err)
    }
}

fn truncate(message: &str) -> String {
    match message.char_indices().nth(MAX_DIAGNOSTIC_LEN) {
        Some((cut, _)) => format!("{}...", &message[..cut]),
        None => message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fault_keeps_short_messages() {
        assert_eq!(
            StoreError::fault("connection refused"),
            StoreError::Fault("connection refused".to_string())
        );
    }

    #[test]
    fn test_fault_truncates_long_messages() {
        let long = "é".repeat(MAX_DIAGNOSTIC_LEN + 50);
        let StoreError::Fault(message) = StoreError::fault(&long) else {
            panic!("expected a fault");
        };
        assert_eq!(message.chars().count(), MAX_DIAGNOSTIC_LEN + 3);
        assert!(message.ends_with("..."));
    }

    #[test]
    fn test_unavailable_message() {
        assert_eq!(StoreError::Unavailable.to_string(), "Database not configured");
    }
}
