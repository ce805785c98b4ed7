use thiserror::Error;

pub type Result<T> = std::result::Result<T, LeagueError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LeagueError {
    #[error("invalid input for `{field}`: {reason}")]
    InvalidInput { field: &'static str, reason: String },

    #[error("cannot {operation} while lottery is {state}")]
    InvalidState {
        state: &'static str,
        operation: &'static str,
    },
}

impl LeagueError {
    pub fn invalid_input(field: &'static str, reason: impl Into<String>) -> Self {
        LeagueError::InvalidInput {
            field,
            reason: reason.into(),
        }
    }

    pub fn invalid_state(state: &'static str, operation: &'static str) -> Self {
        LeagueError::InvalidState { state, operation }
    }

    /// Name of the offending field for `InvalidInput`, if any.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            LeagueError::InvalidInput { field, .. } => Some(*field),
            LeagueError::InvalidState { .. } => None,
        }
    }
}
