use crate::catalog::{Catalog, RelationshipKind, Resource};
use crate::cli::options::OutputFormat;

/// Render a catalog in the requested format
pub fn render_catalog(catalog: &Catalog, format: OutputFormat) -> anyhow::Result<String> {
    let rendered = match format {
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(catalog)?;
            json.push('\n');
            json
        }
        OutputFormat::Yaml => serde_yaml::to_string(catalog)?,
        OutputFormat::Summary => summarize_catalog(catalog),
    };
    Ok(rendered)
}

/// Human-readable listing: one line per resource, then one per edge
pub fn summarize_catalog(catalog: &Catalog) -> String {
    let mut lines = Vec::with_capacity(catalog.len() + catalog.relationship_count());

    for resource in catalog.resources() {
        lines.push(format!("{} {}", resource.reference(), describe(resource)));
    }
    for relationship in catalog.relationships() {
        let arrow = match relationship.kind {
            RelationshipKind::Require => "->",
            RelationshipKind::Notify => "~>",
        };
        lines.push(format!(
            "{} {} {}",
            relationship.source, arrow, relationship.target
        ));
    }

    let mut summary = lines.join("\n");
    summary.push('\n');
    summary
}

fn describe(resource: &Resource) -> String {
    let attributes = &resource.attributes;
    let mut parts = Vec::new();

    parts.push(format!(
        "ensure={}",
        attributes.ensure.as_deref().unwrap_or("unmanaged")
    ));
    if let Some(enable) = attributes.enable {
        parts.push(format!("enable={enable}"));
    }
    if let Some(path) = &attributes.path {
        parts.push(format!("path={path}"));
    }
    if let Some(source) = &attributes.source {
        parts.push(format!("source={source}"));
    }
    if let Some(content) = &attributes.content {
        parts.push(format!("content=<{} bytes>", content.len()));
    }
    for (name, flag) in [
        ("purge", attributes.purge),
        ("force", attributes.force),
        ("noop", attributes.noop),
    ] {
        if flag == Some(true) {
            parts.push(name.to_string());
        }
    }
    if attributes.replace == Some(false) {
        parts.push("audit-only".to_string());
    }

    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{ResourceKind, ResourceRef};

    fn catalog() -> Catalog {
        let mut catalog = Catalog::new();
        let package = catalog
            .declare(Resource::new(ResourceKind::Package, "sssd").with_ensure("present"))
            .unwrap();
        let mut service = Resource::new(ResourceKind::Service, "sssd");
        service.attributes.enable = Some(false);
        let service = catalog.declare(service).unwrap();
        catalog
            .relate(RelationshipKind::Notify, &package, &service)
            .unwrap();
        catalog
    }

    #[test]
    fn test_summary() {
        let summary = summarize_catalog(&catalog());
        assert_eq!(
            summary,
            "Package[sssd] ensure=present\n\
             Service[sssd] ensure=unmanaged enable=false\n\
             Package[sssd] ~> Service[sssd]\n"
        );
    }

    #[test]
    fn test_json_output() {
        let json = render_catalog(&catalog(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["resources"].as_array().unwrap().len(), 2);
        assert_eq!(value["relationships"][0]["kind"], "notify");
        assert_eq!(
            value["relationships"][0]["target"],
            serde_json::to_value(ResourceRef::service("sssd")).unwrap()
        );
    }

    #[test]
    fn test_yaml_output() {
        let yaml = render_catalog(&catalog(), OutputFormat::Yaml).unwrap();
        assert!(yaml.contains("kind: package"));
        assert!(yaml.contains("enable: false"));
    }
}
