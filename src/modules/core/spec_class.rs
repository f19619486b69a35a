use crate::catalog::{Resource, ResourceKind};
use crate::modules::error::ConvergeError;
use crate::modules::registry::{ClassContext, CustomClass};

/// Site customization class `sssd::spec`: drops an extra file next to sssd.conf
#[derive(Debug, Default, Clone, Copy)]
pub struct SpecClass;

impl CustomClass for SpecClass {
    fn name(&self) -> &str {
        "sssd::spec"
    }

    fn declare(&self, context: &ClassContext<'_>) -> Result<Vec<Resource>, ConvergeError> {
        let path = format!("{}/my_config", context.params.config_dir.trim_end_matches('/'));

        Ok(vec![Resource::new(ResourceKind::File, "my_config")
            .with_ensure(context.params.ensure.to_string())
            .with_path(path)
            .with_content("my_content")])
    }
}
