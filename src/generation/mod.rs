//! Generation domain module - turns endpoints into generated files
//!
//! Rendering is done against a fixed, embedded template set; writing is
//! delegated to an [`OutputService`](crate::output::OutputService).

pub mod emitter;
pub mod orchestrator;
pub mod templates;
pub mod types;

pub use emitter::*;
pub use orchestrator::*;
pub use templates::*;
pub use types::*;
