//! Package declaration

use tracing::{debug, warn};

use crate::catalog::{Resource, ResourceKind};
use crate::modules::interface::{Ensure, ModuleParameters};

/// Effective package ensure: `absent`, the requested version, or `present`
pub fn package_ensure(params: &ModuleParameters) -> String {
    match (params.ensure, params.version.as_deref()) {
        (Ensure::Absent, version) => {
            if let Some(version) = version {
                warn!(version, "Ignoring version because ensure is absent");
            }
            "absent".to_string()
        }
        (Ensure::Present, Some(version)) => version.to_string(),
        (Ensure::Present, None) => "present".to_string(),
    }
}

pub fn declare_package(params: &ModuleParameters) -> Resource {
    let ensure = package_ensure(params);
    debug!(package = %params.package, %ensure, "Resolved package state");

    Resource::new(ResourceKind::Package, params.package.clone()).with_ensure(ensure)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_present() {
        let resource = declare_package(&ModuleParameters::default());
        assert_eq!(resource.title, "sssd");
        assert_eq!(resource.ensure(), Some("present"));
    }

    #[test]
    fn test_version_passed_through() {
        let params = ModuleParameters {
            version: Some("1.0.42".to_string()),
            ..Default::default()
        };
        assert_eq!(package_ensure(&params), "1.0.42");

        let params = ModuleParameters {
            version: Some("latest".to_string()),
            ..Default::default()
        };
        assert_eq!(package_ensure(&params), "latest");
    }

    #[test]
    fn test_absent_wins_over_version() {
        let params = ModuleParameters {
            ensure: Ensure::Absent,
            version: Some("1.0.42".to_string()),
            ..Default::default()
        };
        assert_eq!(package_ensure(&params), "absent");
    }

    #[test]
    fn test_custom_package_name() {
        let params = ModuleParameters {
            package: "sssd-common".to_string(),
            ..Default::default()
        };
        assert_eq!(declare_package(&params).title, "sssd-common");
    }
}
