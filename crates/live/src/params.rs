//! Subscription parameter sets stamped onto live lists

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use tws_core::{BarDate, Contract, ScannerSubscription, TagValue, Timestamp};

/// Metadata every subscription carries
pub trait SubscriptionParams {
    /// Request id used to correlate updates with the subscription
    fn req_id(&self) -> i32;

    /// Target contract, for subscriptions that have one
    fn contract(&self) -> Option<&Contract> {
        None
    }
}

/// End of a historical bars request window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EndDateTime {
    /// A date or a timestamp
    At(BarDate),
    /// Passed through as given, e.g. "20240603 16:00:00 US/Eastern"
    Text(String),
}

impl From<BarDate> for EndDateTime {
    fn from(date: BarDate) -> Self {
        EndDateTime::At(date)
    }
}

impl From<NaiveDate> for EndDateTime {
    fn from(day: NaiveDate) -> Self {
        EndDateTime::At(BarDate::Day(day))
    }
}

impl From<Timestamp> for EndDateTime {
    fn from(time: Timestamp) -> Self {
        EndDateTime::At(BarDate::Time(time))
    }
}

impl From<&str> for EndDateTime {
    fn from(text: &str) -> Self {
        EndDateTime::Text(text.to_string())
    }
}

impl From<String> for EndDateTime {
    fn from(text: String) -> Self {
        EndDateTime::Text(text)
    }
}

impl fmt::Display for EndDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EndDateTime::At(date) => write!(f, "{}", date),
            EndDateTime::Text(text) => write!(f, "{}", text),
        }
    }
}

/// Parameters of a historical bars request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarDataParams {
    pub req_id: i32,
    pub contract: Contract,
    /// None = up to now
    pub end_date_time: Option<EndDateTime>,
    /// e.g. "1 D"
    pub duration_str: String,
    /// e.g. "5 secs", "1 min"
    pub bar_size_setting: String,
    /// TRADES, MIDPOINT, BID, ASK, ...
    pub what_to_show: String,
    /// Regular trading hours only
    pub use_rth: bool,
    /// 1 = string dates, 2 = epoch seconds
    pub format_date: i32,
    pub keep_up_to_date: bool,
    pub chart_options: Vec<TagValue>,
}

impl Default for BarDataParams {
    fn default() -> Self {
        Self {
            req_id: 0,
            contract: Contract::default(),
            end_date_time: None,
            duration_str: String::new(),
            bar_size_setting: String::new(),
            what_to_show: String::new(),
            use_rth: false,
            format_date: 1,
            keep_up_to_date: false,
            chart_options: Vec::new(),
        }
    }
}

impl BarDataParams {
    pub fn new(
        req_id: i32,
        contract: Contract,
        duration_str: impl Into<String>,
        bar_size_setting: impl Into<String>,
        what_to_show: impl Into<String>,
    ) -> Self {
        Self {
            req_id,
            contract,
            duration_str: duration_str.into(),
            bar_size_setting: bar_size_setting.into(),
            what_to_show: what_to_show.into(),
            ..Default::default()
        }
    }

    pub fn with_end_date_time(mut self, end: impl Into<EndDateTime>) -> Self {
        self.end_date_time = Some(end.into());
        self
    }

    pub fn with_use_rth(mut self, use_rth: bool) -> Self {
        self.use_rth = use_rth;
        self
    }

    pub fn with_format_date(mut self, format_date: i32) -> Self {
        self.format_date = format_date;
        self
    }

    pub fn with_keep_up_to_date(mut self, keep_up_to_date: bool) -> Self {
        self.keep_up_to_date = keep_up_to_date;
        self
    }

    pub fn with_chart_options(mut self, options: Vec<TagValue>) -> Self {
        self.chart_options = options;
        self
    }
}

impl SubscriptionParams for BarDataParams {
    fn req_id(&self) -> i32 {
        self.req_id
    }

    fn contract(&self) -> Option<&Contract> {
        Some(&self.contract)
    }
}

/// Parameters of a real-time bars subscription
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RealTimeBarParams {
    pub req_id: i32,
    pub contract: Contract,
    /// Bar size in seconds (the API only supports 5)
    pub bar_size: i32,
    pub what_to_show: String,
    pub use_rth: bool,
    pub real_time_bars_options: Vec<TagValue>,
}

impl Default for RealTimeBarParams {
    fn default() -> Self {
        Self {
            req_id: 0,
            contract: Contract::default(),
            bar_size: 5,
            what_to_show: String::new(),
            use_rth: false,
            real_time_bars_options: Vec::new(),
        }
    }
}

impl RealTimeBarParams {
    pub fn new(
        req_id: i32,
        contract: Contract,
        bar_size: i32,
        what_to_show: impl Into<String>,
    ) -> Self {
        Self {
            req_id,
            contract,
            bar_size,
            what_to_show: what_to_show.into(),
            ..Default::default()
        }
    }

    pub fn with_use_rth(mut self, use_rth: bool) -> Self {
        self.use_rth = use_rth;
        self
    }

    pub fn with_options(mut self, options: Vec<TagValue>) -> Self {
        self.real_time_bars_options = options;
        self
    }
}

impl SubscriptionParams for RealTimeBarParams {
    fn req_id(&self) -> i32 {
        self.req_id
    }

    fn contract(&self) -> Option<&Contract> {
        Some(&self.contract)
    }
}

/// Parameters of a market scanner subscription
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScanDataParams {
    pub req_id: i32,
    pub subscription: ScannerSubscription,
    pub scanner_subscription_options: Vec<TagValue>,
    pub scanner_subscription_filter_options: Vec<TagValue>,
}

impl ScanDataParams {
    pub fn new(req_id: i32, subscription: ScannerSubscription) -> Self {
        Self {
            req_id,
            subscription,
            ..Default::default()
        }
    }

    pub fn with_options(mut self, options: Vec<TagValue>) -> Self {
        self.scanner_subscription_options = options;
        self
    }

    pub fn with_filter_options(mut self, options: Vec<TagValue>) -> Self {
        self.scanner_subscription_filter_options = options;
        self
    }
}

impl SubscriptionParams for ScanDataParams {
    fn req_id(&self) -> i32 {
        self.req_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_bar_params_defaults() {
        let contract = Contract::stock("AAPL", "SMART", "USD");
        let params = BarDataParams::new(7, contract, "1 D", "5 secs", "TRADES");
        assert_eq!(params.req_id(), 7);
        assert_eq!(params.format_date, 1);
        assert!(params.end_date_time.is_none());
        assert!(!params.keep_up_to_date);
        assert_eq!(params.contract().map(|c| c.symbol.as_str()), Some("AAPL"));
    }

    #[test]
    fn test_end_date_time_keeps_its_kind() {
        let contract = Contract::stock("AAPL", "SMART", "USD");
        let base = BarDataParams::new(7, contract, "1 D", "5 secs", "TRADES");

        let day = NaiveDate::from_ymd_opt(2024, 6, 3).unwrap();
        let by_day = base.clone().with_end_date_time(day);
        assert_eq!(by_day.end_date_time, Some(EndDateTime::At(BarDate::Day(day))));

        let time = Utc.with_ymd_and_hms(2024, 6, 3, 20, 0, 0).unwrap();
        let by_time = base.clone().with_end_date_time(time);
        assert_eq!(by_time.end_date_time, Some(EndDateTime::At(BarDate::Time(time))));

        let by_text = base.with_end_date_time("20240603 16:00:00 US/Eastern");
        assert_eq!(
            by_text.end_date_time.map(|end| end.to_string()),
            Some("20240603 16:00:00 US/Eastern".to_string())
        );
    }

    #[test]
    fn test_scan_params_have_no_contract() {
        let params = ScanDataParams::new(3, ScannerSubscription::default())
            .with_filter_options(vec![TagValue::new("priceAbove", "5")]);
        assert_eq!(params.req_id(), 3);
        assert!(params.contract().is_none());
        assert_eq!(params.scanner_subscription_filter_options.len(), 1);
    }

    #[test]
    fn test_real_time_defaults() {
        assert_eq!(RealTimeBarParams::default().bar_size, 5);
    }
}
