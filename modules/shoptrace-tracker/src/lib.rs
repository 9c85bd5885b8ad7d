//! Ecommerce tracking facade.
//!
//! Owns the per-tracker registries (tracker handles + sticky context) and
//! exposes one operation per ecommerce event kind. Each operation assembles
//! a context array in a fixed order, builds the envelope via
//! `shoptrace-events`, and fans it out to the targeted trackers. Delivery,
//! batching and transport belong to the `Tracker` implementations, not here.

pub mod events;
pub mod plugin;
pub mod tracker;

pub use events::{
    CartEvent, CheckoutStepEvent, CommonEventProps, ListClickEvent, ListViewEvent,
    ProductDwellEvent, ProductViewEvent, RefundEvent, SiteSearchEvent, TransactionEvent,
};
pub use plugin::{with_recommend_id_ctx, EcommercePlugin};
pub use tracker::{RecordingTracker, TrackCall, Tracker, TrackerSelection};
