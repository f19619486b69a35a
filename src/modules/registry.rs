//! Registry of custom classes merged into the catalog through `my_class`

use std::collections::BTreeMap;

use crate::catalog::Resource;
use crate::modules::error::ConvergeError;
use crate::modules::files::template_engine::TemplateProcessor;
use crate::modules::interface::ModuleParameters;
use crate::runtime::NodeFacts;

/// What a custom class can see while declaring its resources
pub struct ClassContext<'a> {
    pub params: &'a ModuleParameters,
    pub facts: &'a NodeFacts,
    pub templates: &'a TemplateProcessor,
}

/// Site-specific extension point returning additional declarations
pub trait CustomClass: Send + Sync {
    fn name(&self) -> &str;

    fn declare(&self, context: &ClassContext<'_>) -> Result<Vec<Resource>, ConvergeError>;
}

struct FnClass<F> {
    name: String,
    declare: F,
}

impl<F> CustomClass for FnClass<F>
where
    F: Fn(&ClassContext<'_>) -> Result<Vec<Resource>, ConvergeError> + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn declare(&self, context: &ClassContext<'_>) -> Result<Vec<Resource>, ConvergeError> {
        (self.declare)(context)
    }
}

/// Central registry for all custom classes
pub struct ClassRegistry {
    classes: BTreeMap<String, Box<dyn CustomClass>>,
}

impl ClassRegistry {
    pub fn new() -> Self {
        Self {
            classes: BTreeMap::new(),
        }
    }

    /// Create a registry with the classes shipped by the module
    pub fn with_core_classes() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(crate::modules::core::SpecClass));
        registry
    }

    pub fn register(&mut self, class: Box<dyn CustomClass>) {
        self.classes.insert(class.name().to_string(), class);
    }

    pub fn register_fn<F>(&mut self, name: impl Into<String>, declare: F)
    where
        F: Fn(&ClassContext<'_>) -> Result<Vec<Resource>, ConvergeError> + Send + Sync + 'static,
    {
        self.register(Box::new(FnClass {
            name: name.into(),
            declare,
        }));
    }

    pub fn get_class(&self, name: &str) -> Option<&dyn CustomClass> {
        self.classes.get(name).map(|c| c.as_ref())
    }

    pub fn list_classes(&self) -> Vec<&str> {
        self.classes.keys().map(|s| s.as_str()).collect()
    }

    pub fn declare_class(
        &self,
        name: &str,
        context: &ClassContext<'_>,
    ) -> Result<Vec<Resource>, ConvergeError> {
        let class = self.get_class(name).ok_or_else(|| {
            ConvergeError::invalid(
                "my_class",
                name,
                format!("no such class (registered: {})", self.list_classes().join(", ")),
            )
        })?;
        class.declare(context)
    }
}

impl Default for ClassRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ResourceKind;
    use crate::modules::files::template_engine::MemoryLoader;

    #[test]
    fn test_core_classes_registered() {
        let registry = ClassRegistry::with_core_classes();
        assert_eq!(registry.list_classes(), vec!["sssd::spec"]);
    }

    #[test]
    fn test_closure_class() {
        let mut registry = ClassRegistry::new();
        registry.register_fn("site::motd", |ctx| {
            Ok(vec![Resource::new(ResourceKind::File, "motd")
                .with_path("/etc/motd")
                .with_content(format!("Managed host {}", ctx.facts.fqdn))])
        });

        let params = ModuleParameters::default();
        let facts = NodeFacts::from_fqdn("rspec.example42.com");
        let templates = TemplateProcessor::new(Box::new(MemoryLoader::new()));
        let context = ClassContext {
            params: &params,
            facts: &facts,
            templates: &templates,
        };

        let resources = registry.declare_class("site::motd", &context).unwrap();
        assert_eq!(resources.len(), 1);
        assert_eq!(
            resources[0].attributes.content.as_deref(),
            Some("Managed host rspec.example42.com")
        );

        assert!(matches!(
            registry.declare_class("site::missing", &context),
            Err(ConvergeError::InvalidParameter { .. })
        ));
    }
}
