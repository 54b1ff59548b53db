//! Domain errors

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid route pattern for {name}: {reason}")]
    InvalidRoutePattern { name: String, reason: String },

    #[error("Menu catalog error: {0}")]
    MenuCatalogError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Directory error: {0}")]
    DirectoryError(String),
}

impl From<validator::ValidationErrors> for DomainError {
    fn from(errors: validator::ValidationErrors) -> Self {
        DomainError::ValidationError(errors.to_string())
    }
}
