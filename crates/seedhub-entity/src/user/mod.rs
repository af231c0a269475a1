//! User domain entities.

pub mod model;
pub mod role;
pub mod view;

pub use model::{CreateUser, User};
pub use role::UserRole;
pub use view::UserView;
