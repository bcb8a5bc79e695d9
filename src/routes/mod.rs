//! Routers: common probes, question endpoints, API document.

pub mod common;
pub mod questions;

pub use common::{common_routes, common_routes_with_ready};
pub use questions::question_routes;
