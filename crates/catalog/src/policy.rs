//! Filter policy configuration.

use chrono::Duration;
use serde::{Deserialize, Serialize};

pub const DEFAULT_LOW_QUANTITY_THRESHOLD: u64 = 20;
pub const DEFAULT_EXPIRATION_WINDOW_DAYS: u32 = 30;

pub const LOW_QUANTITY_THRESHOLD_ENV: &str = "SHELFWISE_LOW_QUANTITY_THRESHOLD";
pub const EXPIRATION_WINDOW_DAYS_ENV: &str = "SHELFWISE_EXPIRATION_WINDOW_DAYS";

/// Thresholds used by the `lowQuantity` and `expirationDate` criteria.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterPolicy {
    /// Products with total stock strictly below this count as low.
    pub low_quantity_threshold: u64,
    /// Products expiring within this many days from "now" count as expiring.
    pub expiration_window_days: u32,
}

impl Default for FilterPolicy {
    fn default() -> Self {
        Self {
            low_quantity_threshold: DEFAULT_LOW_QUANTITY_THRESHOLD,
            expiration_window_days: DEFAULT_EXPIRATION_WINDOW_DAYS,
        }
    }
}

impl FilterPolicy {
    pub fn with_low_quantity_threshold(mut self, threshold: u64) -> Self {
        self.low_quantity_threshold = threshold;
        self
    }

    pub fn with_expiration_window_days(mut self, days: u32) -> Self {
        self.expiration_window_days = days;
        self
    }

    pub fn expiration_window(&self) -> Duration {
        Duration::days(i64::from(self.expiration_window_days))
    }

    /// Load overrides from the process environment.
    ///
    /// Unset variables keep their defaults; unparsable values are logged and ignored.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load overrides through an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut policy = Self::default();

        if let Some(raw) = lookup(LOW_QUANTITY_THRESHOLD_ENV) {
            match raw.trim().parse() {
                Ok(v) => policy.low_quantity_threshold = v,
                Err(e) => tracing::warn!(
                    key = LOW_QUANTITY_THRESHOLD_ENV,
                    value = %raw,
                    "ignoring invalid low quantity threshold: {e}"
                ),
            }
        }

        if let Some(raw) = lookup(EXPIRATION_WINDOW_DAYS_ENV) {
            match raw.trim().parse() {
                Ok(v) => policy.expiration_window_days = v,
                Err(e) => tracing::warn!(
                    key = EXPIRATION_WINDOW_DAYS_ENV,
                    value = %raw,
                    "ignoring invalid expiration window: {e}"
                ),
            }
        }

        policy
    }
}
