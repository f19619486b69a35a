//! Resolution of template identifiers to template text

use std::collections::HashMap;
use std::path::{Component, Path, PathBuf};
use tracing::debug;

use super::template_processor::TemplateError;

/// Source of template text keyed by identifier (e.g. `sssd/sssd.conf.erb`)
pub trait TemplateLoader: Send + Sync {
    fn load(&self, template: &str) -> Result<String, TemplateError>;
}

/// Loads `module/rest` from `<root>/module/templates/rest`
#[derive(Debug, Clone)]
pub struct DirectoryLoader {
    root: PathBuf,
}

impl DirectoryLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn resolve(&self, template: &str) -> Result<PathBuf, TemplateError> {
        let relative = Path::new(template);
        if relative.as_os_str().is_empty() {
            return Err(TemplateError::InvalidIdentifier {
                template: template.to_string(),
                reason: "identifier is empty".to_string(),
            });
        }

        let mut components = Vec::new();
        for component in relative.components() {
            match component {
                Component::Normal(part) => components.push(part),
                _ => {
                    return Err(TemplateError::InvalidIdentifier {
                        template: template.to_string(),
                        reason: "only relative, normalized paths are allowed".to_string(),
                    })
                }
            }
        }

        let mut path = self.root.clone();
        match components.split_first() {
            Some((module, rest)) if !rest.is_empty() => {
                path.push(module);
                path.push("templates");
                path.extend(rest);
            }
            _ => path.extend(components),
        }
        Ok(path)
    }
}

impl TemplateLoader for DirectoryLoader {
    fn load(&self, template: &str) -> Result<String, TemplateError> {
        let path = self.resolve(template)?;
        debug!(template, path = %path.display(), "Loading template");

        std::fs::read_to_string(&path).map_err(|e| TemplateError::NotFound {
            template: template.to_string(),
            location: format!("{} ({e})", path.display()),
        })
    }
}

/// In-memory templates, used for embedded defaults and tests
#[derive(Debug, Clone, Default)]
pub struct MemoryLoader {
    templates: HashMap<String, String>,
}

impl MemoryLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_template(mut self, template: impl Into<String>, body: impl Into<String>) -> Self {
        self.insert(template, body);
        self
    }

    pub fn insert(&mut self, template: impl Into<String>, body: impl Into<String>) {
        self.templates.insert(template.into(), body.into());
    }
}

impl TemplateLoader for MemoryLoader {
    fn load(&self, template: &str) -> Result<String, TemplateError> {
        self.templates
            .get(template)
            .cloned()
            .ok_or_else(|| TemplateError::NotFound {
                template: template.to_string(),
                location: "memory".to_string(),
            })
    }
}
