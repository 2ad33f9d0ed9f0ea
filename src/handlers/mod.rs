//! HTTP handlers for the developer resource.

pub mod developer;
pub use developer::*;
