//! Ecommerce event shapes for the shoptrace tracking plugin.
//!
//! Self-describing envelopes, the entity types attached to them (product,
//! cart, transaction, ...), and the pure builders that turn an action
//! descriptor into a dispatch-ready event. No transport, no state — the
//! tracker facade in `shoptrace-tracker` owns both.

pub mod build;
pub mod schema;
pub mod types;

pub use build::{
    build_dwell_time_event, build_ecommerce_action_event, context_entity,
    remove_empty_properties, EventError,
};
pub use types::{
    Action, ActionType, Cart, CheckoutStep, DwellAction, Page, PageType, Product, Refund, Search,
    SelfDescribingJson, Transaction, User,
};
