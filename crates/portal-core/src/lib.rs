//! # Portal Core
//! 
//! Domain entities, navigation resolution, services, and repository traits
//! for the campus portal.

pub mod domain;
pub mod navigation;
pub mod services;
pub mod repositories;
pub mod error;

// Re-export domain entities
pub use domain::*;
pub use error::DomainError;
