use crate::catalog::{Resource, ResourceKind};
use crate::modules::interface::{Ensure, ModuleParameters};

pub const CONFIG_DIR_TITLE: &str = "sssd.dir";

/// Configuration directory, declared only when its content is sourced
pub fn declare_config_dir(params: &ModuleParameters) -> Option<Resource> {
    let source = params.dir_source.as_ref()?;

    let ensure = match params.ensure {
        Ensure::Present => "directory",
        Ensure::Absent => "absent",
    };
    let mut resource = Resource::new(ResourceKind::Directory, CONFIG_DIR_TITLE)
        .with_ensure(ensure)
        .with_path(params.config_dir.clone())
        .with_source(source.clone());

    resource.attributes.recurse = Some(true);
    if params.dir_purge {
        // force lets purge remove unmanaged subdirectories
        resource.attributes.purge = Some(true);
        resource.attributes.force = Some(true);
    }
    if params.audit_only {
        resource.attributes.replace = Some(false);
    }
    Some(resource)
}
