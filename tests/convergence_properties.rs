//! Property-based checks of the convergence invariants

use proptest::prelude::*;
use sssd_module::modules::files::template_engine::MemoryLoader;
use sssd_module::{
    Ensure, ModuleParameters, NodeFacts, ResourceKind, ResourceRef, ServiceStatus, SssdModule,
};
use std::collections::BTreeMap;

fn arb_ensure() -> impl Strategy<Value = Ensure> {
    prop_oneof![Just(Ensure::Present), Just(Ensure::Absent)]
}

fn arb_status() -> impl Strategy<Value = ServiceStatus> {
    prop_oneof![
        Just(ServiceStatus::Enabled),
        Just(ServiceStatus::Disabled),
        Just(ServiceStatus::Unmanaged),
    ]
}

fn arb_params() -> impl Strategy<Value = ModuleParameters> {
    (
        arb_ensure(),
        arb_status(),
        proptest::option::of("[0-9]\\.[0-9]{1,2}\\.[0-9]{1,2}"),
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        proptest::option::of(Just("sssd::spec".to_string())),
        proptest::collection::btree_map("[a-z_]{1,8}", "[a-zA-Z0-9 ,]{0,12}", 0..4),
        0u8..3,
    )
        .prop_map(
            |(ensure, status, version, autorestart, noops, with_dir, dir_purge, my_class, options, content)| {
                let (template, source) = match content {
                    0 => (None, None),
                    1 => (Some("sssd/test.erb".to_string()), None),
                    _ => (None, Some("puppet:///modules/sssd/sssd.conf".to_string())),
                };
                ModuleParameters {
                    ensure,
                    status,
                    version,
                    template,
                    source,
                    dir_source: with_dir.then(|| "puppet:///modules/sssd/conf.d/".to_string()),
                    dir_purge,
                    options: options.into_iter().collect::<BTreeMap<_, _>>(),
                    my_class,
                    autorestart,
                    noops,
                    ..Default::default()
                }
            },
        )
}

fn module() -> SssdModule {
    SssdModule::new(Box::new(MemoryLoader::new().with_template(
        "sssd/test.erb",
        "fqdn: {{fqdn}}\n{{#each options}}{{@key}} = {{this}}\n{{/each}}",
    )))
}

fn node() -> NodeFacts {
    NodeFacts::from_fqdn("rspec.example42.com")
}

proptest! {
    #[test]
    fn absent_removes_everything(params in arb_params()) {
        let params = ModuleParameters { ensure: Ensure::Absent, ..params };
        let catalog = module().converge(&params, &node()).unwrap();

        let package = catalog.resource(ResourceKind::Package, "sssd").unwrap();
        prop_assert_eq!(package.ensure(), Some("absent"));
        let file = catalog.resource(ResourceKind::File, "sssd.conf").unwrap();
        prop_assert_eq!(file.ensure(), Some("absent"));

        let service = catalog.resource(ResourceKind::Service, "sssd").unwrap();
        if params.status == ServiceStatus::Unmanaged {
            prop_assert_eq!(service.ensure(), None);
            prop_assert_eq!(service.attributes.enable, None);
        } else {
            prop_assert_eq!(service.ensure(), Some("stopped"));
            prop_assert_eq!(service.attributes.enable, Some(false));
        }
    }

    #[test]
    fn disabled_keeps_package(params in arb_params()) {
        let params = ModuleParameters { status: ServiceStatus::Disabled, ..params };
        let catalog = module().converge(&params, &node()).unwrap();

        let service = catalog.resource(ResourceKind::Service, "sssd").unwrap();
        prop_assert_eq!(service.ensure(), Some("stopped"));
        prop_assert_eq!(service.attributes.enable, Some(false));

        if params.ensure == Ensure::Present {
            let expected = params.version.clone().unwrap_or_else(|| "present".to_string());
            let package = catalog.resource(ResourceKind::Package, "sssd").unwrap();
            prop_assert_eq!(package.ensure(), Some(expected.as_str()));
        }
    }

    #[test]
    fn unmanaged_never_touches_service(params in arb_params()) {
        let params = ModuleParameters { status: ServiceStatus::Unmanaged, ..params };
        let catalog = module().converge(&params, &node()).unwrap();

        let service = catalog.resource(ResourceKind::Service, "sssd").unwrap();
        prop_assert_eq!(service.ensure(), None);
        prop_assert_eq!(service.attributes.enable, None);
    }

    #[test]
    fn noops_mark_every_resource(params in arb_params()) {
        let params = ModuleParameters { noops: true, ..params };
        let catalog = module().converge(&params, &node()).unwrap();

        for resource in catalog.resources() {
            prop_assert_eq!(resource.attributes.noop, Some(true));
        }
    }

    #[test]
    fn notify_iff_autorestart_and_present(params in arb_params()) {
        let catalog = module().converge(&params, &node()).unwrap();
        let notified = !catalog.notify_targets(&ResourceRef::file("sssd.conf")).is_empty();

        prop_assert_eq!(notified, params.autorestart && params.ensure == Ensure::Present);
    }

    #[test]
    fn content_and_source_are_exclusive(params in arb_params()) {
        let catalog = module().converge(&params, &node()).unwrap();
        let file = catalog.resource(ResourceKind::File, "sssd.conf").unwrap();

        prop_assert!(file.attributes.content.is_none() || file.attributes.source.is_none());
    }

    #[test]
    fn resolution_is_idempotent(params in arb_params()) {
        let module = module();
        let first = serde_json::to_string(&module.converge(&params, &node()).unwrap()).unwrap();
        let second = serde_json::to_string(&module.converge(&params, &node()).unwrap()).unwrap();

        prop_assert_eq!(first, second);
    }
}
