//! Generation orchestrator - runs the whole workflow for one schema

use tracing::info;

use super::emitter::EndpointEmitter;
use super::types::GenerationSummary;
use crate::core::{Config, Result};
use crate::output::{FileSystemOutputService, OutputService};
use crate::schema::Schema;

/// Loads the schema, prepares the output directories and emits every
/// endpoint in schema order
pub struct GenerationOrchestrator<O: OutputService = FileSystemOutputService> {
    emitter: EndpointEmitter,
    output: O,
}

impl GenerationOrchestrator<FileSystemOutputService> {
    /// Orchestrator writing to the local filesystem
    pub fn new() -> Result<Self> {
        Self::with_output(FileSystemOutputService::new())
    }
}

impl<O: OutputService> GenerationOrchestrator<O> {
    pub fn with_output(output: O) -> Result<Self> {
        Ok(Self {
            emitter: EndpointEmitter::new()?,
            output,
        })
    }

    pub fn output(&self) -> &O {
        &self.output
    }

    /// Run a full generation. The first error aborts the remaining endpoints.
    pub fn run(&self, config: &Config) -> Result<GenerationSummary> {
        info!("Processing {}", config.schema_path.display());

        let schema = Schema::load(&config.schema_path)?;

        self.output.ensure_directory(&config.binding_dir())?;
        self.output.ensure_directory(&config.handler_dir())?;

        let mut summary = GenerationSummary::default();
        for endpoint in &schema.endpoints {
            let report = self.emitter.emit(endpoint, config, &self.output)?;
            summary.absorb(report);
        }

        Ok(summary)
    }
}

/// Generate scaffolding for every endpoint described by `config.schema_path`.
///
/// # Examples
/// ```no_run
/// use echo_scaffold::{Config, generate};
///
/// # fn example() -> echo_scaffold::Result<()> {
/// let config = Config::new("api.json", "myapp").with_output_dir("./generated");
/// let summary = generate(&config)?;
/// println!("{} endpoints, {} files written", summary.endpoints, summary.written.len());
/// # Ok(())
/// # }
/// ```
pub fn generate(config: &Config) -> Result<GenerationSummary> {
    GenerationOrchestrator::new()?.run(config)
}
