//! Embedded Go/echo templates and their Tera renderer.
//!
//! The template set is fixed: the files under `templates/go_echo/` are
//! compiled into the binary and registered with a single `Tera` instance.

use rust_embed::RustEmbed;
use tera::{Context, Tera};
use tracing::debug;

use crate::core::{Error, Result};
use crate::schema::Endpoint;

/// Container for all templates embedded at compile time
#[derive(RustEmbed)]
#[folder = "templates/"]
struct EmbeddedTemplates;

/// The four files that can be generated for an endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateKind {
    Parameters,
    Results,
    Handler,
    HandlerImpl,
}

impl TemplateKind {
    pub const ALL: [TemplateKind; 4] = [
        TemplateKind::Parameters,
        TemplateKind::Results,
        TemplateKind::Handler,
        TemplateKind::HandlerImpl,
    ];

    /// Path of the template inside the embedded folder
    pub fn template_name(&self) -> &'static str {
        match self {
            TemplateKind::Parameters => "go_echo/parameters.go.tera",
            TemplateKind::Results => "go_echo/results.go.tera",
            TemplateKind::Handler => "go_echo/handler.go.tera",
            TemplateKind::HandlerImpl => "go_echo/handler_impl.go.tera",
        }
    }

    /// Name of the generated file for an endpoint with the given prefix
    pub fn file_name(&self, prefix: &str) -> String {
        match self {
            TemplateKind::Parameters => format!("{prefix}_parameters.go"),
            TemplateKind::Results => format!("{prefix}_results.go"),
            TemplateKind::Handler => format!("{prefix}.go"),
            TemplateKind::HandlerImpl => format!("{prefix}Impl.go"),
        }
    }
}

/// Renders endpoint files from the embedded templates
pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    /// Register every embedded template with a fresh Tera instance
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();
        for kind in TemplateKind::ALL {
            let name = kind.template_name();
            let file = EmbeddedTemplates::get(name)
                .ok_or_else(|| Error::template(format!("Embedded template {name} not found")))?;
            let content = std::str::from_utf8(&file.data)
                .map_err(|e| Error::template(format!("Template {name} is not UTF-8: {e}")))?;
            tera.add_raw_template(name, content)?;
            debug!(template = name, "Registered template");
        }
        Ok(Self { tera })
    }

    /// Render one file for `endpoint`
    pub fn render(
        &self,
        kind: TemplateKind,
        endpoint: &Endpoint,
        app_name: &str,
    ) -> Result<String> {
        let context = Self::context(endpoint, app_name);
        Ok(self.tera.render(kind.template_name(), &context)?)
    }

    fn context(endpoint: &Endpoint, app_name: &str) -> Context {
        let mut context = Context::new();
        context.insert("app_name", app_name);
        context.insert("name", &endpoint.name);
        context.insert("prefix", &endpoint.prefix);
        context.insert("url", endpoint.route().unwrap_or_default());
        context.insert("has_url", &endpoint.route().is_some());
        context.insert("params", &endpoint.params);
        context.insert("has_params", &endpoint.has_params());
        context.insert("results", &endpoint.results);
        context
    }
}
