//! Domain records and DTOs for the recipes API
//!
//! Defines the persistent record types plus the request/response bodies
//! used by the HTTP surface.

pub mod recipe;
pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use recipe::{Recipe, UserRecord};
pub use requests::{Credentials, RecipeDraft, RecipePatch};
pub use responses::{
    CacheStatsResponse, CreatedResponse, ErrorResponse, HealthResponse, MessageResponse,
};
