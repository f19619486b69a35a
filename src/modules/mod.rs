//! The sssd module: parameters, declarations and the convergence descriptor

pub mod core;
pub mod descriptor;
pub mod error;
pub mod files;
pub mod interface;
pub mod params;
pub mod registry;

// Re-export commonly used types
pub use descriptor::SssdModule;
pub use error::*;
pub use interface::*;
pub use registry::{ClassContext, ClassRegistry, CustomClass};
