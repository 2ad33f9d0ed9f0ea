//! Route builders.

mod common;
mod developer;
pub use common::common_routes_with_ready;
pub use developer::developer_routes;
