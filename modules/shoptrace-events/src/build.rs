//! Pure builders: action descriptor in, dispatch-ready envelope out.

use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::schema::{ECOMMERCE_ACTION_SCHEMA, PRODUCT_DWELL_TIME_SCHEMA};
use crate::types::{Action, DwellAction, SelfDescribingJson};

#[derive(Error, Debug)]
pub enum EventError {
    #[error("payload serialization failed: {0}")]
    Payload(#[from] serde_json::Error),

    #[error("payload for schema {0} is not a JSON object")]
    NonObjectPayload(String),
}

/// Build an ecommerce action event envelope.
///
/// The returned envelope is what gets handed to a tracker's `track` entry
/// point, alongside the context array assembled by the facade.
pub fn build_ecommerce_action_event(action: &Action) -> Result<SelfDescribingJson, EventError> {
    tagged_payload(ECOMMERCE_ACTION_SCHEMA, action)
}

/// Build a product dwell-time event envelope.
pub fn build_dwell_time_event(event: &DwellAction) -> Result<SelfDescribingJson, EventError> {
    tagged_payload(PRODUCT_DWELL_TIME_SCHEMA, event)
}

/// Build a context entity: serialize `data`, strip null fields, tag it with
/// `schema`. Every kind-specific entity the facade appends goes through here.
pub fn context_entity<T: Serialize>(
    schema: &str,
    data: &T,
) -> Result<SelfDescribingJson, EventError> {
    tagged_payload(schema, data)
}

fn tagged_payload<T: Serialize>(schema: &str, data: &T) -> Result<SelfDescribingJson, EventError> {
    match serde_json::to_value(data)? {
        Value::Object(map) => Ok(SelfDescribingJson::new(
            schema,
            Value::Object(remove_empty_properties(map)),
        )),
        _ => Err(EventError::NonObjectPayload(schema.to_string())),
    }
}

/// Returns a copy of the object with all null-valued keys removed.
///
/// Downstream schema validation rejects an explicit null where a field is
/// merely optional-absent, so nulls must never reach the wire. Falsy but
/// defined values (`0`, `""`, `false`, `[]`) are kept unchanged.
pub fn remove_empty_properties(object: Map<String, Value>) -> Map<String, Value> {
    object.into_iter().filter(|(_, v)| !v.is_null()).collect()
}
