use thiserror::Error;

use crate::catalog::ResourceRef;
use crate::modules::files::template_engine::TemplateError;

/// Errors that can occur while resolving the module's desired state
#[derive(Error, Debug)]
pub enum ConvergeError {
    #[error("Invalid parameter: {param} = {value} - {reason}")]
    InvalidParameter {
        param: String,
        value: String,
        reason: String,
    },

    #[error("Template rendering failed for {template}: {reason}")]
    TemplateRender { template: String, reason: String },

    #[error("Conflicting content sources for {file}: template {template} and source {source_ref}")]
    ConflictingSource {
        file: String,
        template: String,
        source_ref: String,
    },

    #[error("Duplicate declaration: {resource} is already declared")]
    DuplicateDeclaration { resource: ResourceRef },

    #[error("Relationship references undeclared resource: {resource}")]
    UndeclaredResource { resource: ResourceRef },
}

impl ConvergeError {
    pub fn invalid(param: &str, value: impl ToString, reason: impl Into<String>) -> Self {
        ConvergeError::InvalidParameter {
            param: param.to_string(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}

impl From<TemplateError> for ConvergeError {
    fn from(err: TemplateError) -> Self {
        ConvergeError::TemplateRender {
            template: err.template().to_string(),
            reason: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_parameter_message() {
        let err = ConvergeError::invalid("status", "sleeping", "expected enabled, disabled or unmanaged");
        assert_eq!(
            err.to_string(),
            "Invalid parameter: status = sleeping - expected enabled, disabled or unmanaged"
        );
    }

    #[test]
    fn test_template_error_conversion() {
        let err: ConvergeError = TemplateError::RenderingFailed {
            template: "sssd/sssd.conf.erb".to_string(),
            message: "Variable \"domain\" not found in strict mode".to_string(),
        }
        .into();
        match err {
            ConvergeError::TemplateRender { template, reason } => {
                assert_eq!(template, "sssd/sssd.conf.erb");
                assert!(reason.contains("domain"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
