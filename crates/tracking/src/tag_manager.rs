//! Tag manager push queue.
//!
//! Payloads are queued in-process and flushed into the page's data layer by
//! whoever renders the response. Queue order is the order in which Google Tag
//! Manager sees the pushes, which matters for GA4: the `{ecommerce: null}`
//! reset must land before the event it clears for.

use std::sync::{Mutex, MutexGuard, PoisonError};

use serde_json::Value;

/// Sink for data layer pushes.
pub trait TagManager: Send + Sync {
    /// Queue a payload. Fire-and-forget: no delivery is attempted here.
    fn add_push(&self, payload: Value);
}

/// Append-only, ordered data layer queue.
#[derive(Debug, Default)]
pub struct DataLayer {
    pushes: Mutex<Vec<Value>>,
}

impl DataLayer {
    /// Create an empty data layer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the queued pushes, in push order.
    #[must_use]
    pub fn pushes(&self) -> Vec<Value> {
        self.lock().clone()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Drain the queue, returning its pushes in order.
    pub fn take(&self) -> Vec<Value> {
        std::mem::take(&mut *self.lock())
    }

    /// Render the queue as a script body for the page.
    ///
    /// `name` must be a plain JavaScript identifier; [`TrackingConfig`]
    /// validates the configured name. Every `<` in a payload is written as the
    /// JSON escape `\u003c`, so no string value can open or close a tag or
    /// comment inside the enclosing `<script>`. `<` only occurs inside JSON
    /// strings, so the escaped text still parses to the same value.
    ///
    /// [`TrackingConfig`]: crate::config::TrackingConfig
    #[must_use]
    pub fn render_script(&self, name: &str) -> String {
        let mut script = format!("window.{name} = window.{name} || [];\n");
        for push in self.lock().iter() {
            let json = push.to_string().replace('<', "\\u003c");
            script.push_str(&format!("window.{name}.push({json});\n"));
        }
        script
    }

    // Lock poisoning cannot leave the Vec half-written, so recover the guard.
    fn lock(&self) -> MutexGuard<'_, Vec<Value>> {
        self.pushes.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl TagManager for DataLayer {
    fn add_push(&self, payload: Value) {
        let event = payload
            .get("event")
            .and_then(Value::as_str)
            .map(String::from);
        let mut pushes = self.lock();
        pushes.push(payload);
        tracing::debug!(event = ?event, queued = pushes.len(), "Data layer push queued");
    }
}
