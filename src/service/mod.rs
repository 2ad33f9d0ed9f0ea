//! DeveloperService and request validation.

mod crud;
mod validation;
pub use crud::DeveloperService;
pub use validation::RequestValidator;
