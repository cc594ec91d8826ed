use moonbase_page_context as mbc;
use mbc::{FetchResponse, PageContext};
use proptest::prelude::*;
use serde_json::{json, Value};

fn arb_json() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| json!(n)),
        "[a-zA-Z0-9 ⚖️]{0,12}".prop_map(Value::String),
    ];
    leaf.prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::btree_map("[a-z]{1,6}", inner, 0..4)
                .prop_map(|m| Value::Object(m.into_iter().collect())),
        ]
    })
}

fn load_once(features: Value, instances: Value) -> PageContext {
    let fetch = mbc::from_fn(move |path: String| {
        let body = if path == "/rest/features" { features.clone() } else { instances.clone() };
        async move { Ok(FetchResponse::json(&body)) }
    });
    let rt = tokio::runtime::Builder::new_current_thread().build().unwrap();
    rt.block_on(mbc::load(&fetch)).unwrap()
}

proptest! {
    #[test]
    fn payloads_pass_through_and_metadata_is_fixed(f in arb_json(), i in arb_json()) {
        let ctx = load_once(f.clone(), i.clone());
        prop_assert_eq!(&ctx.features, &f);
        prop_assert_eq!(&ctx.instances, &i);
        prop_assert_eq!(ctx.title.as_str(), "MoonBase");
        prop_assert_eq!(ctx.github.as_str(), "ewowi/MoonBase");
        prop_assert_eq!(ctx.copyright.as_str(), "2025 MoonModules⚖️GPLv3");
        prop_assert_eq!(ctx.app_name.as_str(), "MoonBase");
    }

    #[test]
    fn later_loads_see_only_their_own_bodies(a in arb_json(), b in arb_json()) {
        let first = load_once(a.clone(), a.clone());
        let second = load_once(b.clone(), b.clone());
        prop_assert_eq!(first, PageContext::compose(a.clone(), a));
        prop_assert_eq!(second, PageContext::compose(b.clone(), b));
    }
}
