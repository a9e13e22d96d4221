use chrono::{DateTime, FixedOffset, Offset, Utc};
use serde::{Deserialize, Serialize};

use crate::values::Timestamp;

/// How the API reports a price when there is no quote
pub const API_EMPTY_PRICE: f64 = -1.0;

/// How the API reports a size when there is no quote
pub const API_EMPTY_SIZE: f64 = 0.0;

/// Values used when populating records from API data
///
/// Missing keys take their defaults when deserialized.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiDefaults {
    /// Replaces the API's -1 "no quote" price
    pub empty_price: f64,
    /// Replaces the API's 0 "no quote" size
    pub empty_size: f64,
    /// Initial value of float fields not yet populated
    pub unset: f64,
    /// Offset from UTC for log-history timestamps
    pub utc_offset_secs: i32,
}

impl Default for ApiDefaults {
    fn default() -> Self {
        Self {
            empty_price: API_EMPTY_PRICE,
            empty_size: API_EMPTY_SIZE,
            unset: f64::NAN,
            utc_offset_secs: 0,
        }
    }
}

impl ApiDefaults {
    pub fn with_empty_price(mut self, empty_price: f64) -> Self {
        self.empty_price = empty_price;
        self
    }

    pub fn with_empty_size(mut self, empty_size: f64) -> Self {
        self.empty_size = empty_size;
        self
    }

    pub fn with_unset(mut self, unset: f64) -> Self {
        self.unset = unset;
        self
    }

    pub fn with_utc_offset_secs(mut self, secs: i32) -> Self {
        self.utc_offset_secs = secs;
        self
    }

    /// Map a raw API price, substituting `empty_price` for "no quote"
    pub fn price(&self, raw: f64) -> f64 {
        if raw == API_EMPTY_PRICE {
            self.empty_price
        } else {
            raw
        }
    }

    /// Map a raw API size, substituting `empty_size` for "no quote"
    pub fn size(&self, raw: f64) -> f64 {
        if raw == API_EMPTY_SIZE {
            self.empty_size
        } else {
            raw
        }
    }

    /// Configured timezone; out-of-range offsets fall back to UTC
    pub fn timezone(&self) -> FixedOffset {
        FixedOffset::east_opt(self.utc_offset_secs).unwrap_or_else(|| Utc.fix())
    }

    pub fn localize(&self, time: Timestamp) -> DateTime<FixedOffset> {
        time.with_timezone(&self.timezone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_pass_through() {
        let defaults = ApiDefaults::default();
        assert_eq!(defaults.price(-1.0), -1.0);
        assert_eq!(defaults.size(0.0), 0.0);
        assert_eq!(defaults.price(101.5), 101.5);
        assert!(defaults.unset.is_nan());
    }

    #[test]
    fn test_empty_quote_replacement() {
        let defaults = ApiDefaults::default()
            .with_empty_price(f64::NAN)
            .with_empty_size(f64::NAN);

        assert!(defaults.price(-1.0).is_nan());
        assert!(defaults.size(0.0).is_nan());
        assert_eq!(defaults.price(0.0), 0.0);
        assert_eq!(defaults.size(300.0), 300.0);
    }

    #[test]
    fn test_timezone() {
        let defaults = ApiDefaults::default().with_utc_offset_secs(9 * 3600);
        assert_eq!(defaults.timezone().local_minus_utc(), 9 * 3600);

        let invalid = ApiDefaults::default().with_utc_offset_secs(200_000);
        assert_eq!(invalid.timezone().local_minus_utc(), 0);
    }

    #[test]
    fn test_deserialize_partial() {
        let defaults: ApiDefaults =
            serde_json::from_str(r#"{"empty_price": 0.0, "utc_offset_secs": 3600}"#).unwrap();

        assert_eq!(defaults.empty_price, 0.0);
        assert_eq!(defaults.empty_size, API_EMPTY_SIZE);
        assert!(defaults.unset.is_nan());
        assert_eq!(defaults.utc_offset_secs, 3600);
    }
}
