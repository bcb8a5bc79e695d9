//! Stored records and the JSON shapes exchanged over HTTP.

pub mod api;
pub mod record;

pub use api::*;
pub use record::*;
