//! Entity and action types attached to ecommerce events.
//!
//! Every optional field is skipped when absent so the serialized payload
//! only carries what the caller set — downstream schema validation rejects
//! explicit nulls on merely-optional fields.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A schema-tagged payload: the shape of both event envelopes and context
/// entities handed to the dispatch boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelfDescribingJson {
    pub schema: String,
    pub data: serde_json::Value,
}

impl SelfDescribingJson {
    pub fn new(schema: impl Into<String>, data: serde_json::Value) -> Self {
        Self {
            schema: schema.into(),
            data,
        }
    }
}

// ---------------------------------------------------------------------------
// Ecommerce actions
// ---------------------------------------------------------------------------

/// The standard ecommerce action kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ActionType {
    AddToCart,
    RemoveFromCart,
    ProductView,
    ListClick,
    ListView,
    PromoClick,
    PromoView,
    CheckoutStep,
    Transaction,
    Refund,
    SiteSearch,
}

impl std::fmt::Display for ActionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActionType::AddToCart => write!(f, "add_to_cart"),
            ActionType::RemoveFromCart => write!(f, "remove_from_cart"),
            ActionType::ProductView => write!(f, "product_view"),
            ActionType::ListClick => write!(f, "list_click"),
            ActionType::ListView => write!(f, "list_view"),
            ActionType::PromoClick => write!(f, "promo_click"),
            ActionType::PromoView => write!(f, "promo_view"),
            ActionType::CheckoutStep => write!(f, "checkout_step"),
            ActionType::Transaction => write!(f, "transaction"),
            ActionType::Refund => write!(f, "refund"),
            ActionType::SiteSearch => write!(f, "site_search"),
        }
    }
}

/// An ecommerce action descriptor: the kind tag plus an optional name for
/// the list presented to the user (e.g. "search results", "shop the look").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Action {
    #[serde(rename = "type")]
    pub action: ActionType,
    pub name: Option<String>,
}

impl Action {
    pub fn new(action: ActionType) -> Self {
        Self { action, name: None }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// The page kinds dwell time is measured on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum PageType {
    /// Product list page / collection page.
    Plp,
    /// Product detail page.
    Pdp,
}

impl std::fmt::Display for PageType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PageType::Plp => write!(f, "plp"),
            PageType::Pdp => write!(f, "pdp"),
        }
    }
}

/// A dwell-time descriptor: which page kind, and how long in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DwellAction {
    #[serde(rename = "type")]
    pub page_type: PageType,
    /// Duration in ms.
    pub duration: u64,
}

// ---------------------------------------------------------------------------
// Context entities
// ---------------------------------------------------------------------------

/// A product taking part in an ecommerce interaction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Product {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Category path with a consistent separator, e.g. `Woman/Shoes/Sneakers`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Price at the time of the interaction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    /// Recommended or list price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list_price: Option<f64>,
    /// Quantity taking part in the action. Used for cart events.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    /// e.g. in stock, out of stock, preorder, backorder.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inventory_status: Option<String>,
    /// Position the product was presented at in a list (search results,
    /// product list page, ...).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<u32>,
    /// ISO 4217 currency code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// Identifier/name/url of the creative presented on a list or product view.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creative_id: Option<String>,
}

/// The cart after an add/remove interaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Cart {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cart_id: Option<String>,
    /// Total value of the cart after this interaction.
    pub total_value: f64,
    /// ISO 4217 currency code.
    pub currency: String,
}

/// A checkout step and the attributes the user filled in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CheckoutStep {
    /// Checkout step index.
    pub step: u32,
    /// Selection of "existing user" or "guest checkout".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_type: Option<String>,
    /// Whether the email address opted in to marketing campaigns.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marketing_opt_in: Option<bool>,
}

/// The page the visitor is on. Sticky context, set via the facade.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Page {
    /// Page kind: homepage, product page, cart, checkout page, ...
    #[serde(rename = "type")]
    pub page_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
}

/// A site search as requested by the visitor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Search {
    pub query: String,
    /// Number of results returned by the search.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub results_count: Option<u32>,
}

/// A completed transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Transaction {
    pub transaction_id: String,
    /// Total value of the transaction.
    pub revenue: f64,
    /// ISO 4217 currency code.
    pub currency: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,
    /// Total quantity of items. Computed from product quantities when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_quantity: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_amount: Option<f64>,
    /// Whether the transaction is a credit order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credit_order: Option<bool>,
}

/// A full or partial refund of a transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Refund {
    pub transaction_id: String,
    /// ISO 4217 currency code.
    pub currency: String,
    /// Monetary amount refunded.
    pub refund_amount: f64,
    /// Reason for refunding the whole or part of the transaction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refund_reason: Option<String>,
}

/// The signed-in (or guest) user. Sticky context, set via the facade.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct User {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_guest: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}
