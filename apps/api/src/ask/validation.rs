//! Query validation shared by the server handler and the client controller.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("query must not be empty")]
    EmptyQuery,

    #[error("profile must not be empty")]
    EmptyProfile,

    #[error("query and profile must not be empty")]
    EmptyQueryAndProfile,
}

/// A query/profile pair that passed validation. Both values are trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedQuery {
    pub query: String,
    pub profile: String,
}

/// Trims both inputs and rejects the pair if either ends up empty.
pub fn validate_query(query: &str, profile: &str) -> Result<ValidatedQuery, ValidationError> {
    let query = query.trim();
    let profile = profile.trim();

    match (query.is_empty(), profile.is_empty()) {
        (true, true) => Err(ValidationError::EmptyQueryAndProfile),
        (true, false) => Err(ValidationError::EmptyQuery),
        (false, true) => Err(ValidationError::EmptyProfile),
        (false, false) => Ok(ValidatedQuery {
            query: query.to_string(),
            profile: profile.to_string(),
        }),
    }
}
