//! HTTP handlers for question create and read.

pub mod questions;
pub use questions::*;
