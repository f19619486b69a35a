//! Core declarations: the package, its service and the site customization class

pub mod package;
pub mod service;
pub mod spec_class;

pub use package::{declare_package, package_ensure};
pub use service::{declare_service, service_state, ServiceState};
pub use spec_class::SpecClass;
