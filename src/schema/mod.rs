//! API definition loading

pub mod loader;
pub mod types;

pub use loader::SchemaFormat;
pub use types::{Attr, Endpoint, Schema};
