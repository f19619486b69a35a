use anyhow::{Context, Result};
use clap::Parser;
use sssd_module::cli::{render_catalog, SssdModuleCli};
use sssd_module::{ModuleParameters, NodeFacts, SssdModule};
use std::io::Write;
use tracing::{debug, error};

fn main() {
    let cli = SssdModuleCli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(&cli) {
        error!("{e:#}");
        std::process::exit(1);
    }
}

fn run(cli: &SssdModuleCli) -> Result<()> {
    let params = match &cli.params {
        Some(path) => {
            let input = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read parameters from {}", path.display()))?;
            ModuleParameters::from_yaml_str(&input)
                .with_context(|| format!("Invalid parameters in {}", path.display()))?
        }
        None => ModuleParameters::default(),
    };
    debug!(?params, "Loaded module parameters");

    let facts = node_facts(cli)?;
    let module = SssdModule::with_template_dir(&cli.template_dir);
    let catalog = module
        .converge(&params, &facts)
        .context("Failed to converge the sssd module")?;

    let rendered = render_catalog(&catalog, cli.format)?;
    std::io::stdout()
        .write_all(rendered.as_bytes())
        .context("Failed to write catalog")?;
    Ok(())
}

fn node_facts(cli: &SssdModuleCli) -> Result<NodeFacts> {
    let mut facts = match &cli.fqdn {
        Some(fqdn) => NodeFacts::from_fqdn(fqdn.clone()),
        None => NodeFacts::detect().context("Failed to detect node facts")?,
    };
    if let Some(hostname) = &cli.hostname {
        facts.hostname = hostname.clone();
    }
    if let Some(ipaddress) = &cli.ipaddress {
        facts.ipaddress = Some(ipaddress.clone());
    }
    Ok(facts)
}
