//! Module convergence descriptor: parameters and node facts in, catalog out

use std::path::PathBuf;
use tracing::{debug, info};

use crate::catalog::{Catalog, RelationshipKind, ResourceRef};
use crate::modules::core::{declare_package, declare_service};
use crate::modules::error::ConvergeError;
use crate::modules::files::template_engine::{DirectoryLoader, TemplateLoader, TemplateProcessor};
use crate::modules::files::{declare_config_dir, declare_config_file, resolve_content};
use crate::modules::interface::ModuleParameters;
use crate::modules::registry::{ClassContext, ClassRegistry};
use crate::runtime::NodeFacts;

/// Stateless convergence for the sssd package, service and configuration.
///
/// Holds only immutable collaborators, so one instance can serve any number
/// of runs; identical inputs always yield an identical [`Catalog`].
pub struct SssdModule {
    registry: ClassRegistry,
    templates: TemplateProcessor,
}

impl SssdModule {
    pub fn new(loader: Box<dyn TemplateLoader>) -> Self {
        Self::with_registry(loader, ClassRegistry::with_core_classes())
    }

    pub fn with_registry(loader: Box<dyn TemplateLoader>, registry: ClassRegistry) -> Self {
        Self {
            registry,
            templates: TemplateProcessor::new(loader),
        }
    }

    /// Templates are read from `<root>/<module>/templates/...`
    pub fn with_template_dir(root: impl Into<PathBuf>) -> Self {
        Self::new(Box::new(DirectoryLoader::new(root)))
    }

    pub fn registry(&self) -> &ClassRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut ClassRegistry {
        &mut self.registry
    }

    pub fn converge(
        &self,
        params: &ModuleParameters,
        facts: &NodeFacts,
    ) -> Result<Catalog, ConvergeError> {
        params.validate()?;
        facts
            .validate()
            .map_err(|e| ConvergeError::invalid("fqdn", &facts.fqdn, e.to_string()))?;

        let mut catalog = Catalog::new();

        let package = catalog.declare(declare_package(params))?;
        let service = catalog.declare(declare_service(params))?;

        let content = resolve_content(params, facts, &self.templates)?;
        let config_file = catalog.declare(declare_config_file(params, content))?;

        let config_dir = match declare_config_dir(params) {
            Some(directory) => Some(catalog.declare(directory)?),
            None => None,
        };

        if params.is_present() {
            let mut managed: Vec<&ResourceRef> = vec![&service, &config_file];
            managed.extend(config_dir.as_ref());
            for dependent in managed {
                catalog.relate(RelationshipKind::Require, &package, dependent)?;
            }

            if params.autorestart {
                let mut triggers: Vec<&ResourceRef> = vec![&config_file];
                triggers.extend(config_dir.as_ref());
                for trigger in triggers {
                    catalog.relate(RelationshipKind::Notify, trigger, &service)?;
                }
            }
        }

        if let Some(class) = &params.my_class {
            let context = ClassContext {
                params,
                facts,
                templates: &self.templates,
            };
            let resources = self.registry.declare_class(class, &context)?;
            debug!(class, count = resources.len(), "Merging custom class resources");
            for resource in resources {
                catalog.declare(resource)?;
            }
        }

        if params.noops {
            catalog.mark_noop();
        }

        info!(
            node = %facts.fqdn,
            ensure = %params.ensure,
            status = %params.status,
            resources = catalog.len(),
            relationships = catalog.relationship_count(),
            "Converged sssd module"
        );
        Ok(catalog)
    }
}
