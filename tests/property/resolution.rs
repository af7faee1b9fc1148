//! Host path resolution and namespace selection properties

use proptest::prelude::*;
use registry_admin::endpoint::EndpointConfig;
use registry_admin::namespace::NamespaceSelection;

fn app_name() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9-]{0,30}"
}

fn url_prefix() -> impl Strategy<Value = String> {
    prop_oneof![Just(String::new()), "(/[a-z][a-z0-9-]{0,10}){1,3}"]
}

proptest! {
    #[test]
    fn test_resolve_is_deterministic(
        prefix in url_prefix(),
        version in "v[1-9]",
        name in app_name(),
    ) {
        let endpoint = EndpointConfig::new(prefix.clone(), version.clone());
        let first = endpoint.resolve(Some(&name));
        let second = endpoint.resolve(Some(&name));
        prop_assert_eq!(&first, &second);

        let host_path = first.unwrap();
        prop_assert_eq!(
            host_path.as_str(),
            format!("{}/api/{}/app/{}", prefix, version, name)
        );
        prop_assert!(host_path.as_str().starts_with(&endpoint.bff_root()));
    }

    #[test]
    fn test_distinct_names_resolve_to_distinct_paths(a in app_name(), b in app_name()) {
        let endpoint = EndpointConfig::default();
        let pa = endpoint.resolve(Some(&a));
        let pb = endpoint.resolve(Some(&b));
        prop_assert_eq!(a == b, pa == pb);
    }

    #[test]
    fn test_selection_ignores_order_and_duplicates(
        names in prop::collection::vec("[a-z][a-z0-9-]{0,12}", 0..8),
    ) {
        let forward = NamespaceSelection::from_names(names.iter().cloned());
        let mut reversed_names = names.clone();
        reversed_names.reverse();
        reversed_names.extend(names.iter().cloned());
        let reversed = NamespaceSelection::from_names(reversed_names);
        prop_assert_eq!(&forward, &reversed);

        let query: Vec<String> = forward
            .query_pairs()
            .into_iter()
            .map(|(key, value)| format!("{}={}", key, value))
            .collect();
        prop_assert_eq!(NamespaceSelection::from_query(&query.join("&")), forward.clone());
        prop_assert_eq!(NamespaceSelection::parse_list(&forward.to_string()), forward);
    }
}

#[test]
fn test_absent_application_never_resolves() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&(url_prefix(), "v[1-9]"), |(prefix, version)| {
            let endpoint = EndpointConfig::new(prefix, version);
            assert!(endpoint.resolve(None).is_none());
            assert!(endpoint.resolve(Some("")).is_none());
            Ok(())
        })
        .unwrap();
}
