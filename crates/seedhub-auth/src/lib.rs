//! # seedhub-auth
//!
//! Access tokens for SeedHub. Every API request carries a signed HS256 JWT
//! in the `X-Access-Token` header; [`TokenDecoder`] verifies it and
//! [`TokenEncoder`] mints tokens for the admin CLI and tests.

pub mod jwt;

pub use jwt::{Claims, TokenDecoder, TokenEncoder};

/// Name of the request header carrying the access token (`X-Access-Token`),
/// in the lowercase form `http::HeaderName` requires.
pub const ACCESS_TOKEN_HEADER: &str = "x-access-token";
