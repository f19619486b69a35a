//! sssd-module - convergence descriptor for the sssd daemon
//!
//! Given module parameters and the identity of a node, this crate computes the
//! declarative desired state of the sssd package, service and configuration
//! file. Applying that state is left to an external catalog compiler.

pub mod catalog;
pub mod cli;
pub mod modules;
pub mod runtime;

pub use catalog::{Catalog, Relationship, RelationshipKind, Resource, ResourceKind, ResourceRef};
pub use modules::{
    ClassRegistry, ConvergeError, CustomClass, Ensure, ModuleParameters, ServiceStatus, SssdModule,
};
pub use runtime::NodeFacts;
