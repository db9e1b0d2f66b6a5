//! Configuration and error types shared by every stage of a run.

pub mod config;
pub mod error;

pub use config::Config;
pub use error::{Error, Result};
