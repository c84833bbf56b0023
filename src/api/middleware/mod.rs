//! Request middleware

mod auth;

pub use auth::{RequirePrincipal, extract_jwt_token};
