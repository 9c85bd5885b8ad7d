//! The dispatch boundary and tracker targeting.

use std::sync::Mutex;

use chrono::{DateTime, Utc};
use shoptrace_events::SelfDescribingJson;

// ---------------------------------------------------------------------------
// Tracker (dispatch boundary)
// ---------------------------------------------------------------------------

/// A tracker instance supplied by the host runtime at plugin activation.
///
/// `track` is fire-and-forget from the plugin's point of view: delivery,
/// retries and transport are the implementation's job. When `timestamp` is
/// `None` the tracker assigns one.
pub trait Tracker: Send + Sync {
    /// The identifier this tracker is registered under.
    fn id(&self) -> &str;

    fn track(
        &self,
        event: SelfDescribingJson,
        context: Vec<SelfDescribingJson>,
        timestamp: Option<DateTime<Utc>>,
    );
}

// ---------------------------------------------------------------------------
// Targeting
// ---------------------------------------------------------------------------

/// Which registered trackers a call fans out to.
///
/// `All` is a snapshot of the registry taken at call entry. `Only` ids that
/// are not registered are silently skipped — trackers may be named before
/// or without ever activating.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TrackerSelection {
    #[default]
    All,
    Only(Vec<String>),
}

impl TrackerSelection {
    pub fn only<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        TrackerSelection::Only(ids.into_iter().map(Into::into).collect())
    }
}

impl<S: Into<String>> From<Vec<S>> for TrackerSelection {
    fn from(ids: Vec<S>) -> Self {
        TrackerSelection::only(ids)
    }
}

// ---------------------------------------------------------------------------
// RecordingTracker (tests — no host runtime required)
// ---------------------------------------------------------------------------

/// Everything a tracker was asked to dispatch, for test assertions.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackCall {
    pub event: SelfDescribingJson,
    pub context: Vec<SelfDescribingJson>,
    pub timestamp: Option<DateTime<Utc>>,
}

/// In-memory tracker for testing. Records every `track` call. Thread-safe.
pub struct RecordingTracker {
    id: String,
    calls: Mutex<Vec<TrackCall>>,
}

impl RecordingTracker {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Read all recorded calls (for test assertions).
    pub fn calls(&self) -> Vec<TrackCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl Tracker for RecordingTracker {
    fn id(&self) -> &str {
        &self.id
    }

    fn track(
        &self,
        event: SelfDescribingJson,
        context: Vec<SelfDescribingJson>,
        timestamp: Option<DateTime<Utc>>,
    ) {
        self.calls.lock().unwrap().push(TrackCall {
            event,
            context,
            timestamp,
        });
    }
}
