//! Request extractors for the developer resource.

pub mod body;
pub mod id;
pub use body::DeveloperBody;
pub use id::DeveloperId;
