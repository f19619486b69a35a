use crate::runtime::FactsError;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::collections::BTreeMap;
use std::process::Command;
use tracing::debug;

/// Identity of the node a catalog is compiled for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeFacts {
    pub fqdn: String,
    pub hostname: String,
    pub ipaddress: Option<String>,
    #[serde(default)]
    pub extra: BTreeMap<String, String>,
}

impl NodeFacts {
    /// Facts for a node known only by its fully-qualified name
    pub fn from_fqdn(fqdn: impl Into<String>) -> Self {
        let fqdn = fqdn.into();
        let hostname = fqdn.split('.').next().unwrap_or_default().to_string();
        Self {
            fqdn,
            hostname,
            ipaddress: None,
            extra: BTreeMap::new(),
        }
    }

    pub fn with_ipaddress(mut self, ipaddress: impl Into<String>) -> Self {
        self.ipaddress = Some(ipaddress.into());
        self
    }

    pub fn with_fact(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.insert(name.into(), value.into());
        self
    }

    /// Collect the local host's identity
    pub fn detect() -> Result<Self, FactsError> {
        let hostname = hostname::get()
            .ok()
            .and_then(|h| h.into_string().ok())
            .unwrap_or_else(|| "localhost".to_string());

        let fqdn = match Self::run_command("hostname", &["-f"]) {
            Ok(fqdn) if !fqdn.is_empty() => fqdn,
            _ => hostname.clone(),
        };

        debug!(%fqdn, %hostname, "Detected node identity");

        let mut facts = Self {
            fqdn,
            hostname,
            ipaddress: None,
            extra: BTreeMap::new(),
        };
        facts
            .extra
            .insert("os".to_string(), std::env::consts::OS.to_string());
        facts
            .extra
            .insert("architecture".to_string(), std::env::consts::ARCH.to_string());
        Ok(facts)
    }

    pub fn validate(&self) -> Result<(), FactsError> {
        if self.fqdn.trim().is_empty() {
            return Err(FactsError::InvalidFact {
                name: "fqdn".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        if self.fqdn.chars().any(char::is_whitespace) {
            return Err(FactsError::InvalidFact {
                name: "fqdn".to_string(),
                reason: "must not contain whitespace".to_string(),
            });
        }
        Ok(())
    }

    /// Template-facing view of the facts
    /// An unknown ipaddress is left out, so strict templates referencing it fail
    pub fn to_template_value(&self) -> serde_json::Value {
        let mut value = json!({
            "fqdn": self.fqdn,
            "hostname": self.hostname,
            "facts": self.extra,
        });
        if let Some(ipaddress) = &self.ipaddress {
            value["ipaddress"] = json!(ipaddress);
        }
        value
    }

    fn run_command(cmd: &str, args: &[&str]) -> Result<String, FactsError> {
        let output = Command::new(cmd).args(args).output()?;

        if output.status.success() {
            Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
        } else {
            Err(FactsError::CommandFailed {
                command: format!("{cmd} {}", args.join(" ")),
                error: String::from_utf8_lossy(&output.stderr).to_string(),
            })
        }
    }
}
