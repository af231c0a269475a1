//! # seedhub-client
//!
//! Client-side shell for the SeedHub API. On startup the shell restores the
//! access token and user profile saved by a previous run, keeps them on disk
//! whenever they change, and sends the token as `X-Access-Token` on every
//! request.

pub mod api;
pub mod session;
pub mod shell;

pub use api::ApiClient;
pub use session::{ClientSession, SessionStore};
pub use shell::Shell;
