//! Tests for the event builders and the null-stripping they rely on.

use serde_json::json;
use shoptrace_events::{
    build_dwell_time_event, build_ecommerce_action_event, context_entity,
    remove_empty_properties, schema, Action, ActionType, DwellAction, PageType, Product,
};

// =========================================================================
// remove_empty_properties
// =========================================================================

#[test]
fn null_keys_are_removed() {
    let object = json!({"a": null, "b": "kept"});
    let cleaned = remove_empty_properties(object.as_object().unwrap().clone());
    assert!(!cleaned.contains_key("a"));
    assert_eq!(cleaned.get("b"), Some(&json!("kept")));
}

#[test]
fn falsy_but_defined_values_are_preserved() {
    let object = json!({
        "zero": 0,
        "empty_string": "",
        "false": false,
        "empty_array": [],
        "empty_object": {},
    });
    let cleaned = remove_empty_properties(object.as_object().unwrap().clone());
    assert_eq!(cleaned.get("zero"), Some(&json!(0)));
    assert_eq!(cleaned.get("empty_string"), Some(&json!("")));
    assert_eq!(cleaned.get("false"), Some(&json!(false)));
    assert_eq!(cleaned.get("empty_array"), Some(&json!([])));
    assert_eq!(cleaned.get("empty_object"), Some(&json!({})));
}

#[test]
fn empty_object_stays_empty() {
    let cleaned = remove_empty_properties(serde_json::Map::new());
    assert!(cleaned.is_empty());
}

// =========================================================================
// Envelope builders
// =========================================================================

#[test]
fn action_event_without_name_omits_the_field() {
    let event = build_ecommerce_action_event(&Action::new(ActionType::ProductView)).unwrap();
    assert_eq!(event.schema, schema::ECOMMERCE_ACTION_SCHEMA);
    assert_eq!(event.data, json!({"type": "product_view"}));
}

#[test]
fn action_event_carries_the_list_name() {
    let action = Action::new(ActionType::ListView).with_name("shop the look");
    let event = build_ecommerce_action_event(&action).unwrap();
    assert_eq!(
        event.data,
        json!({"type": "list_view", "name": "shop the look"})
    );
}

#[test]
fn dwell_time_event_tags_page_type_and_duration() {
    let event = build_dwell_time_event(&DwellAction {
        page_type: PageType::Pdp,
        duration: 12_500,
    })
    .unwrap();
    assert_eq!(event.schema, schema::PRODUCT_DWELL_TIME_SCHEMA);
    assert_eq!(event.data, json!({"type": "pdp", "duration": 12_500}));
}

// =========================================================================
// Context entities
// =========================================================================

#[test]
fn product_entity_skips_unset_fields() {
    let product = Product {
        product_id: Some("p1".into()),
        price: Some(9.99),
        ..Default::default()
    };
    let entity = context_entity(schema::PRODUCT_SCHEMA, &product).unwrap();
    assert_eq!(entity.schema, schema::PRODUCT_SCHEMA);
    assert_eq!(entity.data, json!({"product_id": "p1", "price": 9.99}));
}

#[test]
fn non_object_payload_is_rejected() {
    let err = context_entity(schema::PRODUCT_SCHEMA, &"just a string").unwrap_err();
    assert!(err.to_string().contains("not a JSON object"));
}

// =========================================================================
// Tags
// =========================================================================

#[test]
fn action_type_display_matches_serialized_tag() {
    for action in [
        ActionType::AddToCart,
        ActionType::RemoveFromCart,
        ActionType::ProductView,
        ActionType::ListClick,
        ActionType::ListView,
        ActionType::PromoClick,
        ActionType::PromoView,
        ActionType::CheckoutStep,
        ActionType::Transaction,
        ActionType::Refund,
        ActionType::SiteSearch,
    ] {
        let serialized = serde_json::to_value(action).unwrap();
        assert_eq!(serialized, json!(action.to_string()));
    }
}

#[test]
fn page_type_display_matches_serialized_tag() {
    assert_eq!(serde_json::to_value(PageType::Plp).unwrap(), json!("plp"));
    assert_eq!(PageType::Plp.to_string(), "plp");
    assert_eq!(PageType::Pdp.to_string(), "pdp");
}
