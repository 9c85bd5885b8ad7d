//! The ecommerce tracking plugin: registries plus one method per event kind.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::json;
use tracing::{debug, warn};

use shoptrace_events::schema::{
    CART_SCHEMA, CHECKOUT_STEP_SCHEMA, PAGE_SCHEMA, PRODUCT_SCHEMA, RECOMMENDATIONS_SCHEMA,
    REFUND_SCHEMA, SEARCH_SCHEMA, TRANSACTION_SCHEMA, USER_SCHEMA,
};
use shoptrace_events::{
    build_dwell_time_event, build_ecommerce_action_event, context_entity, Action, ActionType,
    DwellAction, Page, SelfDescribingJson, User,
};

use crate::events::{
    CartEvent, CheckoutStepEvent, ListClickEvent, ListViewEvent, ProductDwellEvent,
    ProductViewEvent, RefundEvent, SiteSearchEvent, TransactionEvent,
};
use crate::tracker::{Tracker, TrackerSelection};

/// Both registries live behind one lock so a registered tracker id always
/// has a sticky-context entry.
#[derive(Default)]
struct State {
    trackers: HashMap<String, Arc<dyn Tracker>>,
    sticky: HashMap<String, Vec<SelfDescribingJson>>,
}

/// Ecommerce tracking for a collection of tracker instances.
///
/// Construct one per process and activate each tracker against it. Every
/// `track_*` method assembles a context array — the caller-supplied entities
/// first, then the kind-specific ones in a fixed order — and fans the event
/// out to the targeted trackers registered at that moment.
///
/// Sticky Page/User context set via [`set_page_type`](Self::set_page_type)
/// and [`set_ecommerce_user`](Self::set_ecommerce_user) is *not* prepended
/// by the tracking methods; the host merges it into every outgoing event
/// through the [`contexts`](Self::contexts) supplier hook.
#[derive(Default)]
pub struct EcommercePlugin {
    state: RwLock<State>,
}

impl EcommercePlugin {
    pub fn new() -> Self {
        Self::default()
    }

    // -----------------------------------------------------------------------
    // Host hooks
    // -----------------------------------------------------------------------

    /// Activation hook: register a tracker under its id and give it an empty
    /// sticky-context sequence. Trackers are never unregistered.
    pub fn activate(&self, tracker: Arc<dyn Tracker>) {
        let id = tracker.id().to_string();
        let mut state = self.state.write().unwrap();
        debug!(tracker = %id, "activating ecommerce plugin");
        state.sticky.entry(id.clone()).or_default();
        state.trackers.insert(id, tracker);
    }

    /// Context-supplier hook: the sticky entities the host merges into every
    /// event the given tracker sends. Empty for unknown ids.
    pub fn contexts(&self, tracker_id: &str) -> Vec<SelfDescribingJson> {
        let state = self.state.read().unwrap();
        state.sticky.get(tracker_id).cloned().unwrap_or_default()
    }

    // -----------------------------------------------------------------------
    // Tracking
    // -----------------------------------------------------------------------

    /// Track a checkout step.
    pub fn track_checkout_step(&self, event: CheckoutStepEvent, targets: TrackerSelection) {
        let CheckoutStepEvent {
            checkout_step,
            common,
        } = event;
        let mut context = common.context;
        push_entity(&mut context, CHECKOUT_STEP_SCHEMA, &checkout_step);

        self.dispatch_action(
            Action::new(ActionType::CheckoutStep),
            context,
            common.timestamp,
            &targets,
        );
    }

    /// Track a product list view. One product entity per listed product, in
    /// input order; the list name rides on the action.
    pub fn track_product_list_view(&self, event: ListViewEvent, targets: TrackerSelection) {
        let ListViewEvent {
            name,
            products,
            common,
        } = event;
        let mut context = common.context;
        for product in &products {
            push_entity(&mut context, PRODUCT_SCHEMA, product);
        }

        self.dispatch_action(
            Action::new(ActionType::ListView).with_name(name),
            context,
            common.timestamp,
            &targets,
        );
    }

    /// Track a product view/detail.
    pub fn track_product_view(&self, event: ProductViewEvent, targets: TrackerSelection) {
        let ProductViewEvent { product, common } = event;
        let mut context = common.context;
        push_entity(&mut context, PRODUCT_SCHEMA, &product);

        self.dispatch_action(
            Action::new(ActionType::ProductView),
            context,
            common.timestamp,
            &targets,
        );
    }

    /// Track a click on a product inside a named list.
    pub fn track_list_click(&self, event: ListClickEvent, targets: TrackerSelection) {
        let ListClickEvent {
            product_list,
            product,
            common,
        } = event;
        let mut context = common.context;
        push_entity(&mut context, PRODUCT_SCHEMA, &product);

        self.dispatch_action(
            Action::new(ActionType::ListClick).with_name(product_list),
            context,
            common.timestamp,
            &targets,
        );
    }

    /// Track a site search. Result products first, then the search entity.
    pub fn track_site_search(&self, event: SiteSearchEvent, targets: TrackerSelection) {
        let SiteSearchEvent {
            search,
            result_products,
            common,
        } = event;
        let mut context = common.context;
        for product in &result_products {
            push_entity(&mut context, PRODUCT_SCHEMA, product);
        }
        push_entity(&mut context, SEARCH_SCHEMA, &search);

        self.dispatch_action(
            Action::new(ActionType::SiteSearch),
            context,
            common.timestamp,
            &targets,
        );
    }

    /// Track products added to the cart. Product entities first, then the
    /// cart after the addition.
    pub fn track_add_to_cart(&self, event: CartEvent, targets: TrackerSelection) {
        self.track_cart_event(ActionType::AddToCart, event, targets);
    }

    /// Track products removed from the cart. Same entity order as add.
    pub fn track_remove_from_cart(&self, event: CartEvent, targets: TrackerSelection) {
        self.track_cart_event(ActionType::RemoveFromCart, event, targets);
    }

    fn track_cart_event(&self, action: ActionType, event: CartEvent, targets: TrackerSelection) {
        let CartEvent {
            cart,
            products,
            common,
        } = event;
        let mut context = common.context;
        for product in &products {
            push_entity(&mut context, PRODUCT_SCHEMA, product);
        }
        push_entity(&mut context, CART_SCHEMA, &cart);

        self.dispatch_action(Action::new(action), context, common.timestamp, &targets);
    }

    /// Track a transaction. When the transaction carries no explicit
    /// `total_quantity`, it is computed by summing the product quantities;
    /// a sum of zero leaves the field absent rather than written as 0.
    pub fn track_transaction(&self, event: TransactionEvent, targets: TrackerSelection) {
        let TransactionEvent {
            mut transaction,
            products,
            common,
        } = event;
        if transaction.total_quantity.is_none() {
            let summed: u32 = products.iter().filter_map(|p| p.quantity).sum();
            if summed > 0 {
                transaction.total_quantity = Some(summed);
            }
        }

        let mut context = common.context;
        for product in &products {
            push_entity(&mut context, PRODUCT_SCHEMA, product);
        }
        push_entity(&mut context, TRANSACTION_SCHEMA, &transaction);

        self.dispatch_action(
            Action::new(ActionType::Transaction),
            context,
            common.timestamp,
            &targets,
        );
    }

    /// Track a refund. One entity per refunded product, then the refund.
    pub fn track_refund(&self, event: RefundEvent, targets: TrackerSelection) {
        let RefundEvent {
            refund,
            products,
            common,
        } = event;
        let mut context = common.context;
        for product in &products {
            push_entity(&mut context, PRODUCT_SCHEMA, product);
        }
        push_entity(&mut context, REFUND_SCHEMA, &refund);

        self.dispatch_action(
            Action::new(ActionType::Refund),
            context,
            common.timestamp,
            &targets,
        );
    }

    /// Track how long the visitor dwelled on a product.
    pub fn track_product_dwell_time(&self, event: ProductDwellEvent, targets: TrackerSelection) {
        let ProductDwellEvent {
            product,
            page_type,
            duration,
            common,
        } = event;
        let mut context = common.context;
        push_entity(&mut context, PRODUCT_SCHEMA, &product);

        let envelope = match build_dwell_time_event(&DwellAction {
            page_type,
            duration,
        }) {
            Ok(envelope) => envelope,
            Err(err) => {
                warn!(%err, "dropping dwell-time event");
                return;
            }
        };
        self.dispatch(envelope, context, common.timestamp, &targets);
    }

    // -----------------------------------------------------------------------
    // Sticky context
    // -----------------------------------------------------------------------

    /// Replace the sticky Page entity for the targeted registered trackers.
    /// At most one Page entity per tracker; last writer wins.
    pub fn set_page_type(&self, page: Page, targets: TrackerSelection) {
        match context_entity(PAGE_SCHEMA, &page) {
            Ok(entity) => self.replace_sticky(PAGE_SCHEMA, entity, &targets),
            Err(err) => warn!(schema = PAGE_SCHEMA, %err, "dropping page context"),
        }
    }

    /// Replace the sticky User entity for the targeted registered trackers.
    /// At most one User entity per tracker; last writer wins.
    pub fn set_ecommerce_user(&self, user: User, targets: TrackerSelection) {
        match context_entity(USER_SCHEMA, &user) {
            Ok(entity) => self.replace_sticky(USER_SCHEMA, entity, &targets),
            Err(err) => warn!(schema = USER_SCHEMA, %err, "dropping user context"),
        }
    }

    fn replace_sticky(&self, schema: &str, entity: SelfDescribingJson, targets: &TrackerSelection) {
        let mut state = self.state.write().unwrap();
        let ids: Vec<String> = match targets {
            TrackerSelection::All => state.sticky.keys().cloned().collect(),
            TrackerSelection::Only(ids) => ids.clone(),
        };
        for id in ids {
            // Ids without a registered tracker are skipped, same as dispatch.
            if let Some(entities) = state.sticky.get_mut(&id) {
                entities.retain(|e| e.schema != schema);
                entities.push(entity.clone());
            }
        }
    }

    // -----------------------------------------------------------------------
    // Dispatch
    // -----------------------------------------------------------------------

    fn dispatch_action(
        &self,
        action: Action,
        context: Vec<SelfDescribingJson>,
        timestamp: Option<DateTime<Utc>>,
        targets: &TrackerSelection,
    ) {
        match build_ecommerce_action_event(&action) {
            Ok(envelope) => self.dispatch(envelope, context, timestamp, targets),
            Err(err) => warn!(action = %action.action, %err, "dropping ecommerce action event"),
        }
    }

    fn dispatch(
        &self,
        envelope: SelfDescribingJson,
        context: Vec<SelfDescribingJson>,
        timestamp: Option<DateTime<Utc>>,
        targets: &TrackerSelection,
    ) {
        for tracker in self.snapshot(targets) {
            debug!(tracker = tracker.id(), schema = %envelope.schema, "dispatching event");
            tracker.track(envelope.clone(), context.clone(), timestamp);
        }
    }

    /// Resolve the target selection against the registry, at call time.
    fn snapshot(&self, targets: &TrackerSelection) -> Vec<Arc<dyn Tracker>> {
        let state = self.state.read().unwrap();
        match targets {
            TrackerSelection::All => state.trackers.values().cloned().collect(),
            TrackerSelection::Only(ids) => ids
                .iter()
                .filter_map(|id| state.trackers.get(id).cloned())
                .collect(),
        }
    }
}

/// Build an entity and append it, or drop it with a warning. Dispatch is
/// best-effort; a payload that cannot serialize never aborts the call.
fn push_entity<T: Serialize>(context: &mut Vec<SelfDescribingJson>, schema: &str, data: &T) {
    match context_entity(schema, data) {
        Ok(entity) => context.push(entity),
        Err(err) => warn!(schema, %err, "dropping context entity"),
    }
}

/// Attribution context for interactions with recommendation-sourced
/// products. Include the returned entity in the `context` of the tracking
/// call it should attribute.
pub fn with_recommend_id_ctx(recommendation_id: impl Into<String>) -> SelfDescribingJson {
    SelfDescribingJson::new(
        RECOMMENDATIONS_SCHEMA,
        json!({ "id": recommendation_id.into() }),
    )
}
