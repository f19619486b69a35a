//! Service declaration

use tracing::debug;

use crate::catalog::{Resource, ResourceKind};
use crate::modules::interface::{Ensure, ModuleParameters, ServiceStatus};

/// Run and boot state of the service; `None` leaves the attribute unmanaged
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceState {
    pub ensure: Option<&'static str>,
    pub enable: Option<bool>,
}

impl ServiceState {
    const UNMANAGED: Self = Self {
        ensure: None,
        enable: None,
    };
    const STOPPED: Self = Self {
        ensure: Some("stopped"),
        enable: Some(false),
    };
    const RUNNING: Self = Self {
        ensure: Some("running"),
        enable: Some(true),
    };
}

pub fn service_state(params: &ModuleParameters) -> ServiceState {
    match (params.status, params.ensure) {
        (ServiceStatus::Unmanaged, _) => ServiceState::UNMANAGED,
        (_, Ensure::Absent) => ServiceState::STOPPED,
        (ServiceStatus::Disabled, Ensure::Present) => ServiceState::STOPPED,
        (ServiceStatus::Enabled, Ensure::Present) => ServiceState::RUNNING,
    }
}

pub fn declare_service(params: &ModuleParameters) -> Resource {
    let state = service_state(params);
    debug!(
        service = %params.service,
        status = %params.status,
        ensure = ?state.ensure,
        enable = ?state.enable,
        "Resolved service state"
    );

    let mut resource = Resource::new(ResourceKind::Service, params.service.clone());
    resource.attributes.ensure = state.ensure.map(str::to_string);
    resource.attributes.enable = state.enable;
    resource
}
