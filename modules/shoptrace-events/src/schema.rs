//! Schema identifiers for every entity and event this plugin emits.
//!
//! Each identifier names the JSON schema a downstream consumer resolves the
//! payload against. The model number (`1` in `1-0-0`) is a compatibility
//! contract: bumping it breaks consumers, revision/addition bumps are
//! additive. Never change an existing constant's value.

pub const CART_SCHEMA: &str = "iglu:com.shoptrace/cart/jsonschema/1-0-0";

pub const ECOMMERCE_ACTION_SCHEMA: &str = "iglu:com.shoptrace/ecommerce_action/jsonschema/1-0-0";

pub const CHECKOUT_STEP_SCHEMA: &str = "iglu:com.shoptrace/checkout_step/jsonschema/1-0-0";

pub const PRODUCT_SCHEMA: &str = "iglu:com.shoptrace/product/jsonschema/1-0-0";

pub const PAGE_SCHEMA: &str = "iglu:com.shoptrace/page/jsonschema/1-0-0";

pub const SEARCH_SCHEMA: &str = "iglu:com.shoptrace/search/jsonschema/1-0-0";

pub const USER_SCHEMA: &str = "iglu:com.shoptrace/user/jsonschema/1-0-0";

pub const TRANSACTION_SCHEMA: &str = "iglu:com.shoptrace/transaction/jsonschema/1-0-0";

pub const REFUND_SCHEMA: &str = "iglu:com.shoptrace/refund/jsonschema/1-0-0";

/// Attribution context for interactions sourced from recommendations.
pub const RECOMMENDATIONS_SCHEMA: &str = "iglu:com.shoptrace/recommendations/jsonschema/1-0-0";

pub const PRODUCT_DWELL_TIME_SCHEMA: &str =
    "iglu:com.shoptrace/product_dwell_time/jsonschema/1-0-0";
