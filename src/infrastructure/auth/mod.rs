//! Authentication infrastructure

mod jwt;

pub use jwt::{JwtClaims, JwtConfig, JwtService, TokenService};
