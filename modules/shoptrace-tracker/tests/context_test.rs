//! Sticky context registries and the host hooks.

use std::sync::Arc;

use serde_json::json;
use shoptrace_events::schema;
use shoptrace_events::{Page, Product, User};
use shoptrace_tracker::{
    with_recommend_id_ctx, CommonEventProps, EcommercePlugin, ProductViewEvent, RecordingTracker,
    TrackerSelection,
};

fn page(page_type: &str) -> Page {
    Page {
        page_type: page_type.into(),
        language: None,
        locale: None,
    }
}

// =========================================================================
// Activation and the context-supplier hook
// =========================================================================

#[test]
fn activation_starts_with_an_empty_sticky_sequence() {
    let plugin = EcommercePlugin::new();
    plugin.activate(Arc::new(RecordingTracker::new("t1")));

    assert!(plugin.contexts("t1").is_empty());
}

#[test]
fn contexts_for_an_unknown_id_are_empty() {
    let plugin = EcommercePlugin::new();
    assert!(plugin.contexts("nobody").is_empty());
}

// =========================================================================
// Sticky setters
// =========================================================================

#[test]
fn set_page_type_twice_keeps_only_the_second_entity() {
    let plugin = EcommercePlugin::new();
    plugin.activate(Arc::new(RecordingTracker::new("t1")));

    plugin.set_page_type(page("plp"), TrackerSelection::default());
    plugin.set_page_type(
        Page {
            page_type: "pdp".into(),
            language: Some("en".into()),
            locale: None,
        },
        TrackerSelection::default(),
    );

    let contexts = plugin.contexts("t1");
    let pages: Vec<_> = contexts
        .iter()
        .filter(|c| c.schema == schema::PAGE_SCHEMA)
        .collect();
    assert_eq!(pages.len(), 1);
    assert_eq!(pages[0].data, json!({"type": "pdp", "language": "en"}));
}

#[test]
fn set_ecommerce_user_stores_defined_falsy_fields() {
    let plugin = EcommercePlugin::new();
    plugin.activate(Arc::new(RecordingTracker::new("t1")));

    plugin.set_ecommerce_user(
        User {
            id: "u1".into(),
            is_guest: Some(false),
            email: None,
        },
        TrackerSelection::only(["t1"]),
    );

    let contexts = plugin.contexts("t1");
    assert_eq!(contexts.len(), 1);
    assert_eq!(contexts[0].schema, schema::USER_SCHEMA);
    assert_eq!(contexts[0].data, json!({"id": "u1", "is_guest": false}));
}

#[test]
fn setters_ignore_unregistered_target_ids() {
    let plugin = EcommercePlugin::new();
    plugin.activate(Arc::new(RecordingTracker::new("t1")));

    plugin.set_page_type(page("plp"), TrackerSelection::only(["ghost"]));

    assert!(plugin.contexts("t1").is_empty());
    assert!(plugin.contexts("ghost").is_empty());
}

#[test]
fn sticky_context_is_isolated_per_tracker() {
    let plugin = EcommercePlugin::new();
    plugin.activate(Arc::new(RecordingTracker::new("t1")));
    plugin.activate(Arc::new(RecordingTracker::new("t2")));

    plugin.set_page_type(page("plp"), TrackerSelection::only(["t1"]));

    assert_eq!(plugin.contexts("t1").len(), 1);
    assert!(plugin.contexts("t2").is_empty());
}

#[test]
fn page_and_user_entities_coexist() {
    let plugin = EcommercePlugin::new();
    plugin.activate(Arc::new(RecordingTracker::new("t1")));

    plugin.set_page_type(page("checkout"), TrackerSelection::default());
    plugin.set_ecommerce_user(
        User {
            id: "u1".into(),
            is_guest: None,
            email: None,
        },
        TrackerSelection::default(),
    );

    let schemas: Vec<_> = plugin
        .contexts("t1")
        .into_iter()
        .map(|c| c.schema)
        .collect();
    assert_eq!(schemas, vec![schema::PAGE_SCHEMA, schema::USER_SCHEMA]);
}

#[test]
fn tracking_calls_do_not_prepend_sticky_context() {
    let plugin = EcommercePlugin::new();
    let tracker = Arc::new(RecordingTracker::new("t1"));
    plugin.activate(tracker.clone());

    plugin.set_ecommerce_user(
        User {
            id: "u1".into(),
            is_guest: Some(false),
            email: None,
        },
        TrackerSelection::only(["t1"]),
    );
    plugin.track_product_view(
        ProductViewEvent {
            product: Product {
                product_id: Some("p1".into()),
                price: Some(9.99),
                ..Default::default()
            },
            common: CommonEventProps::default(),
        },
        TrackerSelection::only(["t1"]),
    );

    // The sticky user entity reaches events via the contexts() hook, which
    // the host merges at send time — never via the tracking call itself.
    let call = &tracker.calls()[0];
    assert_eq!(call.event.data, json!({"type": "product_view"}));
    assert_eq!(call.context.len(), 1);
    assert_eq!(call.context[0].schema, schema::PRODUCT_SCHEMA);
    assert_eq!(plugin.contexts("t1")[0].schema, schema::USER_SCHEMA);
}

// =========================================================================
// Recommendation attribution
// =========================================================================

#[test]
fn with_recommend_id_ctx_builds_the_entity_and_nothing_else() {
    let plugin = EcommercePlugin::new();
    plugin.activate(Arc::new(RecordingTracker::new("t1")));

    let ctx = with_recommend_id_ctx("abc123");

    assert_eq!(ctx.schema, schema::RECOMMENDATIONS_SCHEMA);
    assert_eq!(ctx.data, json!({"id": "abc123"}));
    assert!(plugin.contexts("t1").is_empty());
}
