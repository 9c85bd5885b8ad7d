//! Per-kind event inputs for the tracking facade.
//!
//! Each input is an explicit split: the entity payload(s) that become
//! context entities, plus the cross-cutting `CommonEventProps` control
//! fields. The facade consumes the control fields and repackages the rest.

use chrono::{DateTime, Utc};
use shoptrace_events::{Cart, CheckoutStep, PageType, Product, Refund, Search, SelfDescribingJson, Transaction};

/// Cross-cutting fields every tracking call accepts: caller-supplied
/// context entities (prepended to the kind-specific ones) and an optional
/// event timestamp (absent: the dispatch boundary assigns one).
#[derive(Debug, Clone, Default)]
pub struct CommonEventProps {
    pub context: Vec<SelfDescribingJson>,
    pub timestamp: Option<DateTime<Utc>>,
}

impl CommonEventProps {
    pub fn with_context(mut self, context: Vec<SelfDescribingJson>) -> Self {
        self.context = context;
        self
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }
}

/// A checkout step the user reached, with whatever they filled in.
#[derive(Debug, Clone)]
pub struct CheckoutStepEvent {
    pub checkout_step: CheckoutStep,
    pub common: CommonEventProps,
}

/// A product list presented to the visitor.
#[derive(Debug, Clone, Default)]
pub struct ListViewEvent {
    /// Name of the list, e.g. "product list", "frequently bought with".
    pub name: String,
    pub products: Vec<Product>,
    pub common: CommonEventProps,
}

/// A product viewed on a product detail page.
#[derive(Debug, Clone, Default)]
pub struct ProductViewEvent {
    pub product: Product,
    pub common: CommonEventProps,
}

/// A click on a product inside a named list.
#[derive(Debug, Clone, Default)]
pub struct ListClickEvent {
    pub product_list: String,
    pub product: Product,
    pub common: CommonEventProps,
}

/// A site search and the products it returned.
#[derive(Debug, Clone)]
pub struct SiteSearchEvent {
    pub search: Search,
    pub result_products: Vec<Product>,
    pub common: CommonEventProps,
}

/// Products added to or removed from the cart, and the cart afterwards.
#[derive(Debug, Clone)]
pub struct CartEvent {
    pub cart: Cart,
    pub products: Vec<Product>,
    pub common: CommonEventProps,
}

/// A completed transaction and the products on it.
#[derive(Debug, Clone)]
pub struct TransactionEvent {
    pub transaction: Transaction,
    pub products: Vec<Product>,
    pub common: CommonEventProps,
}

/// A refund and the specific products refunded. An empty product list marks
/// the whole transaction as refunded.
#[derive(Debug, Clone)]
pub struct RefundEvent {
    pub refund: Refund,
    pub products: Vec<Product>,
    pub common: CommonEventProps,
}

/// How long the visitor dwelled on a product.
#[derive(Debug, Clone)]
pub struct ProductDwellEvent {
    pub product: Product,
    pub page_type: PageType,
    /// Duration in ms.
    pub duration: u64,
    pub common: CommonEventProps,
}
