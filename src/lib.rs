pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;

// Re-export main items
pub use auth::{issue_token, BearerToken, Credentials};
pub use config::Config;
pub use error::ApiError;
pub use handlers::{app, AppState};
pub use models::{
    CreateItemParams, CreateItemResponse, ItemsResponse, LoginParams, ProfileResponse,
    StatusResponse, TokenResponse,
};
