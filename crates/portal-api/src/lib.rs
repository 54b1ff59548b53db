//! # Portal API
//! 
//! HTTP handlers exposing navigation data to the rendering layer.

pub mod handlers;
pub mod response;
pub mod router;
pub mod state;

pub use router::app_router;
pub use state::AppState;
