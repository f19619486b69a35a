//! Declaration set produced by a convergence run

pub mod resource;

pub use resource::{Attributes, Resource, ResourceKind, ResourceRef};

use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

use crate::modules::error::ConvergeError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RelationshipKind {
    /// `source` is applied before `target`
    Require,
    /// Like `Require`, and a change to `source` refreshes `target`
    Notify,
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Relationship {
    pub kind: RelationshipKind,
    pub source: ResourceRef,
    pub target: ResourceRef,
}

/// Resources keyed by `(kind, title)` plus the edges declared between them
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    resources: BTreeMap<ResourceRef, Resource>,
    relationships: BTreeSet<Relationship>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn declare(&mut self, resource: Resource) -> Result<ResourceRef, ConvergeError> {
        let reference = resource.reference();
        if self.resources.contains_key(&reference) {
            return Err(ConvergeError::DuplicateDeclaration {
                resource: reference,
            });
        }
        self.resources.insert(reference.clone(), resource);
        Ok(reference)
    }

    pub fn relate(
        &mut self,
        kind: RelationshipKind,
        source: &ResourceRef,
        target: &ResourceRef,
    ) -> Result<(), ConvergeError> {
        for reference in [source, target] {
            if !self.resources.contains_key(reference) {
                return Err(ConvergeError::UndeclaredResource {
                    resource: reference.clone(),
                });
            }
        }
        self.relationships.insert(Relationship {
            kind,
            source: source.clone(),
            target: target.clone(),
        });
        Ok(())
    }

    pub fn resource(&self, kind: ResourceKind, title: &str) -> Option<&Resource> {
        self.resources.get(&ResourceRef::new(kind, title))
    }

    pub fn contains(&self, reference: &ResourceRef) -> bool {
        self.resources.contains_key(reference)
    }

    pub fn resources(&self) -> impl Iterator<Item = &Resource> {
        self.resources.values()
    }

    pub fn relationships(&self) -> impl Iterator<Item = &Relationship> {
        self.relationships.iter()
    }

    /// Targets refreshed when `source` changes
    pub fn notify_targets(&self, source: &ResourceRef) -> Vec<&ResourceRef> {
        self.relationships
            .iter()
            .filter(|r| r.kind == RelationshipKind::Notify && &r.source == source)
            .map(|r| &r.target)
            .collect()
    }

    pub fn requirements_of(&self, target: &ResourceRef) -> Vec<&ResourceRef> {
        self.relationships
            .iter()
            .filter(|r| &r.target == target)
            .map(|r| &r.source)
            .collect()
    }

    pub fn mark_noop(&mut self) {
        for resource in self.resources.values_mut() {
            resource.attributes.noop = Some(true);
        }
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    pub fn relationship_count(&self) -> usize {
        self.relationships.len()
    }
}

#[derive(Serialize)]
struct CatalogDocument<'a> {
    resources: Vec<&'a Resource>,
    relationships: Vec<&'a Relationship>,
}

impl Serialize for Catalog {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        CatalogDocument {
            resources: self.resources.values().collect(),
            relationships: self.relationships.iter().collect(),
        }
        .serialize(serializer)
    }
}
