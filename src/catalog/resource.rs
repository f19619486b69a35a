//! Resource declarations handed to the catalog compiler

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Package,
    Service,
    File,
    Directory,
}

impl ResourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::Package => "package",
            ResourceKind::Service => "service",
            ResourceKind::File => "file",
            ResourceKind::Directory => "directory",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.as_str();
        // Package[sssd], Service[sssd], ...
        let mut chars = name.chars();
        if let Some(first) = chars.next() {
            write!(f, "{}{}", first.to_ascii_uppercase(), chars.as_str())?;
        }
        Ok(())
    }
}

/// Exact-match key of a declaration: `(kind, title)`
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ResourceRef {
    pub kind: ResourceKind,
    pub title: String,
}

impl ResourceRef {
    pub fn new(kind: ResourceKind, title: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
        }
    }

    pub fn package(title: impl Into<String>) -> Self {
        Self::new(ResourceKind::Package, title)
    }

    pub fn service(title: impl Into<String>) -> Self {
        Self::new(ResourceKind::Service, title)
    }

    pub fn file(title: impl Into<String>) -> Self {
        Self::new(ResourceKind::File, title)
    }

    pub fn directory(title: impl Into<String>) -> Self {
        Self::new(ResourceKind::Directory, title)
    }
}

impl fmt::Display for ResourceRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]", self.kind, self.title)
    }
}

/// Desired-state attributes. Unset attributes are left unmanaged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attributes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ensure: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replace: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recurse: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purge: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub force: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub noop: Option<bool>,
}

/// A single declared resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    pub kind: ResourceKind,
    pub title: String,
    pub attributes: Attributes,
}

impl Resource {
    pub fn new(kind: ResourceKind, title: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            attributes: Attributes::default(),
        }
    }

    pub fn reference(&self) -> ResourceRef {
        ResourceRef::new(self.kind, self.title.clone())
    }

    pub fn with_ensure(mut self, ensure: impl Into<String>) -> Self {
        self.attributes.ensure = Some(ensure.into());
        self
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.attributes.path = Some(path.into());
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.attributes.content = Some(content.into());
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.attributes.source = Some(source.into());
        self
    }

    pub fn ensure(&self) -> Option<&str> {
        self.attributes.ensure.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_display() {
        assert_eq!(ResourceRef::package("sssd").to_string(), "Package[sssd]");
        assert_eq!(ResourceRef::directory("sssd.dir").to_string(), "Directory[sssd.dir]");
    }

    #[test]
    fn test_unset_attributes_are_omitted() {
        let resource = Resource::new(ResourceKind::File, "sssd.conf").with_ensure("present");
        let json = serde_json::to_value(&resource).unwrap();

        assert_eq!(json["kind"], "file");
        assert_eq!(json["attributes"]["ensure"], "present");
        assert!(json["attributes"].get("content").is_none());
        assert!(json["attributes"].get("noop").is_none());
    }
}
