//! Renders configuration file content with Handlebars

use handlebars::Handlebars;
use serde_json::Value;
use thiserror::Error;

use super::handlebars_helpers::{default_helper, equality_helper, ini_bool_helper};
use super::loader::TemplateLoader;

#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("Template not found: {template} (looked in {location})")]
    NotFound { template: String, location: String },

    #[error("Invalid template identifier {template}: {reason}")]
    InvalidIdentifier { template: String, reason: String },

    #[error("Template rendering failed for {template}: {message}")]
    RenderingFailed { template: String, message: String },
}

impl TemplateError {
    pub fn template(&self) -> &str {
        match self {
            TemplateError::NotFound { template, .. }
            | TemplateError::InvalidIdentifier { template, .. }
            | TemplateError::RenderingFailed { template, .. } => template,
        }
    }
}

/// Strict-mode renderer: a reference to missing data is an error, not an empty string
pub struct TemplateProcessor {
    handlebars: Handlebars<'static>,
    loader: Box<dyn TemplateLoader>,
}

impl TemplateProcessor {
    pub fn new(loader: Box<dyn TemplateLoader>) -> Self {
        let mut handlebars = Handlebars::new();
        handlebars.set_strict_mode(true);
        // Configuration files are not HTML
        handlebars.register_escape_fn(handlebars::no_escape);

        handlebars.register_helper("default", Box::new(default_helper));
        handlebars.register_helper("ini_bool", Box::new(ini_bool_helper));
        handlebars.register_helper("eq", Box::new(equality_helper));

        Self { handlebars, loader }
    }

    /// Load `template` and render it against `context`
    pub fn render(&self, template: &str, context: &Value) -> Result<String, TemplateError> {
        let body = self.loader.load(template)?;
        self.render_str(template, &body, context)
    }

    pub fn render_str(
        &self,
        template: &str,
        body: &str,
        context: &Value,
    ) -> Result<String, TemplateError> {
        self.handlebars
            .render_template(body, context)
            .map_err(|e| TemplateError::RenderingFailed {
                template: template.to_string(),
                message: e.to_string(),
            })
    }
}

impl std::fmt::Debug for TemplateProcessor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TemplateProcessor")
            .field("strict_mode", &self.handlebars.strict_mode())
            .finish_non_exhaustive()
    }
}
