//! HTTP inbound adapter exposing the registration form as REST endpoints.

pub mod courses;
pub mod error;
pub mod health;
pub mod registration;
pub mod state;

pub use error::ApiResult;
