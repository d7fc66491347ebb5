// lib/src/auth/mod.rs

pub mod identity;
pub mod password;
pub mod session;

pub use identity::{resolve_current_user, CurrentUser};
pub use password::{hash_password, verify_password};
pub use session::SessionStore;
