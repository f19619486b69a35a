//! Main configuration file: ensure, permissions and content selection

use serde_json::{json, Value};
use tracing::debug;

use crate::catalog::{Resource, ResourceKind};
use crate::modules::error::ConvergeError;
use crate::modules::files::template_engine::TemplateProcessor;
use crate::modules::interface::ModuleParameters;
use crate::runtime::NodeFacts;

pub const CONFIG_FILE_TITLE: &str = "sssd.conf";

/// Where the configuration file's content comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileContent {
    /// Content is left alone
    Unmanaged,
    Rendered { template: String, content: String },
    Source(String),
}

/// Variables visible to the configuration template
pub fn template_context(params: &ModuleParameters, facts: &NodeFacts) -> Value {
    let mut context = facts.to_template_value();
    if let Value::Object(map) = &mut context {
        map.insert("options".to_string(), json!(params.options));
        map.insert(
            "module".to_string(),
            json!({
                "package": params.package,
                "service": params.service,
                "config_dir": params.config_dir,
                "config_file": params.config_file,
            }),
        );
    }
    context
}

/// Pick between template and source; both at once is a conflict
pub fn resolve_content(
    params: &ModuleParameters,
    facts: &NodeFacts,
    templates: &TemplateProcessor,
) -> Result<FileContent, ConvergeError> {
    match (&params.template, &params.source) {
        (Some(template), Some(source)) => Err(ConvergeError::ConflictingSource {
            file: CONFIG_FILE_TITLE.to_string(),
            template: template.clone(),
            source_ref: source.clone(),
        }),
        (Some(template), None) => {
            let content = templates.render(template, &template_context(params, facts))?;
            debug!(template, bytes = content.len(), "Rendered configuration template");
            Ok(FileContent::Rendered {
                template: template.clone(),
                content,
            })
        }
        (None, Some(source)) => Ok(FileContent::Source(source.clone())),
        (None, None) => Ok(FileContent::Unmanaged),
    }
}

pub fn declare_config_file(params: &ModuleParameters, content: FileContent) -> Resource {
    let mut resource = Resource::new(ResourceKind::File, CONFIG_FILE_TITLE)
        .with_ensure(params.ensure.to_string())
        .with_path(params.config_file.clone());

    let attributes = &mut resource.attributes;
    attributes.mode = Some(params.config_file_mode.clone());
    attributes.owner = Some(params.config_file_owner.clone());
    attributes.group = Some(params.config_file_group.clone());
    if params.audit_only {
        attributes.replace = Some(false);
    }

    match content {
        FileContent::Unmanaged => {}
        FileContent::Rendered { content, .. } => attributes.content = Some(content),
        FileContent::Source(source) => attributes.source = Some(source),
    }
    resource
}
