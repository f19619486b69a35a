use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Compile the sssd module's catalog for one node
#[derive(Debug, Parser)]
#[command(name = "sssd-module")]
#[command(about = "Resolve the desired state of the sssd package, service and configuration")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct SssdModuleCli {
    /// Parameter file (YAML or JSON mapping); defaults apply when omitted
    pub params: Option<PathBuf>,

    /// Fully-qualified name of the node (auto-detected when omitted)
    #[arg(long)]
    pub fqdn: Option<String>,

    /// Short hostname override
    #[arg(long)]
    pub hostname: Option<String>,

    /// IP address exposed to templates
    #[arg(long)]
    pub ipaddress: Option<String>,

    /// Root of the template tree (`<dir>/<module>/templates/...`)
    #[arg(long, default_value = ".")]
    pub template_dir: PathBuf,

    /// Output format for the catalog
    #[arg(long, value_enum, default_value = "json")]
    pub format: OutputFormat,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Yaml,
    /// One line per resource and relationship
    Summary,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = SssdModuleCli::try_parse_from(["sssd-module"]).unwrap();
        assert!(cli.params.is_none());
        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.template_dir, PathBuf::from("."));
        assert!(!cli.verbose);
    }

    #[test]
    fn test_full_invocation() {
        let cli = SssdModuleCli::try_parse_from([
            "sssd-module",
            "params.yaml",
            "--fqdn",
            "rspec.example42.com",
            "--template-dir",
            "/srv/modules",
            "--format",
            "summary",
            "-v",
        ])
        .unwrap();
        assert_eq!(cli.params, Some(PathBuf::from("params.yaml")));
        assert_eq!(cli.fqdn.as_deref(), Some("rspec.example42.com"));
        assert_eq!(cli.format, OutputFormat::Summary);
        assert!(cli.verbose);
    }

    #[test]
    fn test_unknown_format_rejected() {
        assert!(SssdModuleCli::try_parse_from(["sssd-module", "--format", "xml"]).is_err());
    }
}
