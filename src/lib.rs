//! echo-scaffold library
//!
//! Generates echo handler stubs and JSON binding structs from a small API
//! description. See [`generate`] for the one-call entry point.
#![deny(unsafe_code)]

pub mod core;
pub mod generation;
pub mod output;
pub mod schema;

pub use crate::{
    core::{Config, Error, Result},
    generation::{GenerationOrchestrator, GenerationSummary, generate},
    schema::{Attr, Endpoint, Schema},
};
