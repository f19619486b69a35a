//! Template loading and rendering for managed file content

pub mod handlebars_helpers;
pub mod loader;
pub mod template_processor;

pub use handlebars_helpers::*;
pub use loader::{DirectoryLoader, MemoryLoader, TemplateLoader};
pub use template_processor::{TemplateError, TemplateProcessor};
