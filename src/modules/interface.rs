//! Module parameters and their enumerated values

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::modules::error::ConvergeError;

/// Whether the module's resources should exist at all
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ensure {
    #[default]
    Present,
    Absent,
}

impl FromStr for Ensure {
    type Err = ConvergeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "present" => Ok(Ensure::Present),
            "absent" => Ok(Ensure::Absent),
            other => Err(ConvergeError::invalid(
                "ensure",
                other,
                "expected present or absent",
            )),
        }
    }
}

impl fmt::Display for Ensure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ensure::Present => write!(f, "present"),
            Ensure::Absent => write!(f, "absent"),
        }
    }
}

/// Run and boot state of the service, independent of package presence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceStatus {
    #[default]
    Enabled,
    Disabled,
    Unmanaged,
}

impl FromStr for ServiceStatus {
    type Err = ConvergeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "enabled" => Ok(ServiceStatus::Enabled),
            "disabled" => Ok(ServiceStatus::Disabled),
            "unmanaged" => Ok(ServiceStatus::Unmanaged),
            other => Err(ConvergeError::invalid(
                "status",
                other,
                "expected enabled, disabled or unmanaged",
            )),
        }
    }
}

impl fmt::Display for ServiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceStatus::Enabled => write!(f, "enabled"),
            ServiceStatus::Disabled => write!(f, "disabled"),
            ServiceStatus::Unmanaged => write!(f, "unmanaged"),
        }
    }
}

/// Input of a convergence run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleParameters {
    pub ensure: Ensure,
    pub status: ServiceStatus,
    /// Package version, or the `present`/`latest` sentinels
    pub version: Option<String>,
    pub template: Option<String>,
    pub source: Option<String>,
    pub dir_source: Option<String>,
    pub dir_purge: bool,
    pub options: BTreeMap<String, String>,
    pub my_class: Option<String>,
    pub autorestart: bool,
    pub noops: bool,
    pub audit_only: bool,
    pub package: String,
    pub service: String,
    pub config_dir: String,
    pub config_file: String,
    pub config_file_mode: String,
    pub config_file_owner: String,
    pub config_file_group: String,
}

impl Default for ModuleParameters {
    fn default() -> Self {
        Self {
            ensure: Ensure::Present,
            status: ServiceStatus::Enabled,
            version: None,
            template: None,
            source: None,
            dir_source: None,
            dir_purge: false,
            options: BTreeMap::new(),
            my_class: None,
            autorestart: true,
            noops: false,
            audit_only: false,
            package: "sssd".to_string(),
            service: "sssd".to_string(),
            config_dir: "/etc/sssd".to_string(),
            config_file: "/etc/sssd/sssd.conf".to_string(),
            config_file_mode: "0600".to_string(),
            config_file_owner: "root".to_string(),
            config_file_group: "root".to_string(),
        }
    }
}

impl ModuleParameters {
    pub fn is_present(&self) -> bool {
        self.ensure == Ensure::Present
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = ModuleParameters::default();
        assert_eq!(params.ensure, Ensure::Present);
        assert_eq!(params.status, ServiceStatus::Enabled);
        assert!(params.autorestart);
        assert!(!params.noops);
        assert_eq!(params.config_file, "/etc/sssd/sssd.conf");
    }

    #[test]
    fn test_enum_parsing() {
        assert_eq!("absent".parse::<Ensure>().unwrap(), Ensure::Absent);
        assert_eq!(
            "unmanaged".parse::<ServiceStatus>().unwrap(),
            ServiceStatus::Unmanaged
        );
        assert!("purged".parse::<Ensure>().is_err());
        assert!("Enabled".parse::<ServiceStatus>().is_err());
    }
}
