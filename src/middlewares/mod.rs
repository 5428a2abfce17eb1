pub mod auth;

pub use auth::{AdminJson, AdminQuery, AuthAdmin, Credentials};
