//! Per-endpoint emission of binding, handler and implementation files

use std::path::Path;

use tracing::info;

use super::templates::{TemplateKind, TemplateRenderer};
use super::types::{Artifact, EmitReport, WritePolicy};
use crate::core::{Config, Result};
use crate::output::{OutputService, WriteOutcome};
use crate::schema::Endpoint;

/// Turns one endpoint into up to four generated files
pub struct EndpointEmitter {
    renderer: TemplateRenderer,
}

impl EndpointEmitter {
    pub fn new() -> Result<Self> {
        Ok(Self::with_renderer(TemplateRenderer::new()?))
    }

    pub fn with_renderer(renderer: TemplateRenderer) -> Self {
        Self { renderer }
    }

    /// Render the artifacts for `endpoint` without touching the filesystem.
    ///
    /// Artifacts come back in write order: parameters, results, handler,
    /// implementation stub. Bindings need a non-empty attribute list and the
    /// handler pair needs a route. Only the stub is create-only.
    pub fn plan(&self, endpoint: &Endpoint, config: &Config) -> Result<Vec<Artifact>> {
        let binding_dir = config.binding_dir();
        let handler_dir = config.handler_dir();
        let mut artifacts = Vec::with_capacity(TemplateKind::ALL.len());

        let mut push = |kind: TemplateKind, dir: &Path, policy: WritePolicy| -> Result<()> {
            artifacts.push(Artifact {
                path: dir.join(kind.file_name(&endpoint.prefix)),
                content: self.renderer.render(kind, endpoint, &config.app_name)?,
                policy,
            });
            Ok(())
        };

        if endpoint.has_params() {
            push(TemplateKind::Parameters, binding_dir.as_path(), WritePolicy::Overwrite)?;
        }
        if endpoint.has_results() {
            push(TemplateKind::Results, binding_dir.as_path(), WritePolicy::Overwrite)?;
        }
        if endpoint.route().is_some() {
            push(TemplateKind::Handler, handler_dir.as_path(), WritePolicy::Overwrite)?;
            push(TemplateKind::HandlerImpl, handler_dir.as_path(), WritePolicy::CreateOnly)?;
        }

        Ok(artifacts)
    }

    /// Render and write the files for `endpoint`, stopping at the first
    /// failed write
    pub fn emit<O: OutputService + ?Sized>(
        &self,
        endpoint: &Endpoint,
        config: &Config,
        output: &O,
    ) -> Result<EmitReport> {
        info!("Processing {}", endpoint.name);

        let mut report = EmitReport::default();
        for artifact in self.plan(endpoint, config)? {
            match output.write_artifact(&artifact)? {
                WriteOutcome::Written => report.written.push(artifact.path),
                WriteOutcome::Kept => {
                    info!("Keeping existing {}", artifact.path.display());
                    report.kept.push(artifact.path);
                }
            }
        }
        Ok(report)
    }
}
