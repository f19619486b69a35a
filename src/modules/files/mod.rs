//! Configuration file and directory declarations

pub mod directory;
pub mod file;
pub mod template_engine;

pub use directory::{declare_config_dir, CONFIG_DIR_TITLE};
pub use file::{declare_config_file, resolve_content, template_context, FileContent, CONFIG_FILE_TITLE};
