//! Feature flags selecting which Google implementations receive events.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::config::TrackingConfig;

/// Reports which analytics implementations are enabled.
///
/// Implementations are queried on every tracked step, so a provider backed
/// by runtime settings takes effect without rebuilding the tracker.
pub trait ImplementationFlags: Send + Sync {
    /// Whether Universal Analytics events should be pushed.
    fn is_ua_enabled(&self) -> bool;

    /// Whether GA4 events should be pushed.
    fn is_ga4_enabled(&self) -> bool;
}

impl ImplementationFlags for TrackingConfig {
    fn is_ua_enabled(&self) -> bool {
        self.ua_enabled
    }

    fn is_ga4_enabled(&self) -> bool {
        self.ga4_enabled
    }
}

/// Flags that can be toggled while the tracker is in use.
#[derive(Debug, Default)]
pub struct RuntimeFlags {
    ua: AtomicBool,
    ga4: AtomicBool,
}

impl RuntimeFlags {
    /// Create flags with explicit initial values.
    #[must_use]
    pub const fn new(ua_enabled: bool, ga4_enabled: bool) -> Self {
        Self {
            ua: AtomicBool::new(ua_enabled),
            ga4: AtomicBool::new(ga4_enabled),
        }
    }

    /// Seed runtime flags from loaded configuration.
    #[must_use]
    pub const fn from_config(config: &TrackingConfig) -> Self {
        Self::new(config.ua_enabled, config.ga4_enabled)
    }

    pub fn set_ua_enabled(&self, enabled: bool) {
        self.ua.store(enabled, Ordering::Relaxed);
    }

    pub fn set_ga4_enabled(&self, enabled: bool) {
        self.ga4.store(enabled, Ordering::Relaxed);
    }
}

impl ImplementationFlags for RuntimeFlags {
    fn is_ua_enabled(&self) -> bool {
        self.ua.load(Ordering::Relaxed)
    }

    fn is_ga4_enabled(&self) -> bool {
        self.ga4.load(Ordering::Relaxed)
    }
}
