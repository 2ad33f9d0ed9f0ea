//! Settings: types, environment loader, validation.

pub mod types;
pub mod loader;
pub mod validator;

pub use types::*;
pub use validator::*;
