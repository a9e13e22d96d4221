use serde::{Deserialize, Serialize};

use crate::values::{UNSET_DOUBLE, UNSET_INTEGER};

/// Parameters of a market scanner subscription
///
/// Float thresholds default to `UNSET_DOUBLE` and integer thresholds to
/// `UNSET_INTEGER`, which the API reads as "no filter".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScannerSubscription {
    /// Maximum rows to return (-1 = server default)
    pub number_of_rows: i32,
    pub instrument: String,
    pub location_code: String,
    pub scan_code: String,
    pub above_price: f64,
    pub below_price: f64,
    pub above_volume: i32,
    pub market_cap_above: f64,
    pub market_cap_below: f64,
    pub moody_rating_above: String,
    pub moody_rating_below: String,
    pub sp_rating_above: String,
    pub sp_rating_below: String,
    pub maturity_date_above: String,
    pub maturity_date_below: String,
    pub coupon_rate_above: f64,
    pub coupon_rate_below: f64,
    pub exclude_convertible: bool,
    pub average_option_volume_above: i32,
    pub scanner_setting_pairs: String,
    pub stock_type_filter: String,
}

impl Default for ScannerSubscription {
    fn default() -> Self {
        Self {
            number_of_rows: -1,
            instrument: String::new(),
            location_code: String::new(),
            scan_code: String::new(),
            above_price: UNSET_DOUBLE,
            below_price: UNSET_DOUBLE,
            above_volume: UNSET_INTEGER,
            market_cap_above: UNSET_DOUBLE,
            market_cap_below: UNSET_DOUBLE,
            moody_rating_above: String::new(),
            moody_rating_below: String::new(),
            sp_rating_above: String::new(),
            sp_rating_below: String::new(),
            maturity_date_above: String::new(),
            maturity_date_below: String::new(),
            coupon_rate_above: UNSET_DOUBLE,
            coupon_rate_below: UNSET_DOUBLE,
            exclude_convertible: false,
            average_option_volume_above: UNSET_INTEGER,
            scanner_setting_pairs: String::new(),
            stock_type_filter: String::new(),
        }
    }
}

impl ScannerSubscription {
    /// Create a subscription for a scan code on an instrument/location
    pub fn new(
        instrument: impl Into<String>,
        location_code: impl Into<String>,
        scan_code: impl Into<String>,
    ) -> Self {
        Self {
            instrument: instrument.into(),
            location_code: location_code.into(),
            scan_code: scan_code.into(),
            ..Default::default()
        }
    }

    pub fn with_rows(mut self, rows: i32) -> Self {
        self.number_of_rows = rows;
        self
    }

    pub fn with_price_range(mut self, above: f64, below: f64) -> Self {
        self.above_price = above;
        self.below_price = below;
        self
    }
}

/// Soft dollar tier attached to orders
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoftDollarTier {
    pub name: String,
    pub val: String,
    pub display_name: String,
}

impl SoftDollarTier {
    /// True when any field carries a value
    pub fn is_set(&self) -> bool {
        !(self.name.is_empty() && self.val.is_empty() && self.display_name.is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FamilyCode {
    pub account_id: String,
    pub family_code: String,
}

/// Mapping of a SMART routing component to its exchange
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SmartComponent {
    pub bit_number: i32,
    pub exchange: String,
    pub exchange_letter: String,
}

/// Connection statistics reported by the client
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConnectionStats {
    /// Seconds since the unix epoch when the connection started
    pub start_time: f64,
    /// Seconds connected
    pub duration: f64,
    pub num_bytes_recv: u64,
    pub num_bytes_sent: u64,
    pub num_msg_recv: u64,
    pub num_msg_sent: u64,
}

/// Wall Street Horizon event-data request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WshEventData {
    pub con_id: i32,
    pub filter: String,
    pub fill_watchlist: bool,
    pub fill_portfolio: bool,
    pub fill_competitors: bool,
    pub start_date: String,
    pub end_date: String,
    pub total_limit: i32,
}

impl Default for WshEventData {
    fn default() -> Self {
        Self {
            con_id: UNSET_INTEGER,
            filter: String::new(),
            fill_watchlist: false,
            fill_portfolio: false,
            fill_competitors: false,
            start_date: String::new(),
            end_date: String::new(),
            total_limit: UNSET_INTEGER,
        }
    }
}

/// Market depth exchange description
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepthMktDataDescription {
    pub exchange: String,
    pub sec_type: String,
    pub listing_exch: String,
    pub service_data_type: String,
    pub agg_group: i32,
}

impl Default for DepthMktDataDescription {
    fn default() -> Self {
        Self {
            exchange: String::new(),
            sec_type: String::new(),
            listing_exch: String::new(),
            service_data_type: String::new(),
            agg_group: UNSET_INTEGER,
        }
    }
}
