//! Lean contract model
//!
//! Only the fields the records in this crate need. Contract resolution and
//! the full contract schema belong to the transport layer.

use serde::{Deserialize, Serialize};

/// Name/value option pair attached to subscription requests
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TagValue {
    pub tag: String,
    pub value: String,
}

impl TagValue {
    pub fn new(tag: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            value: value.into(),
        }
    }
}

/// A tradeable contract as identified by the API
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Contract {
    /// Exchange-assigned contract id (natural business key, 0 = unresolved)
    pub con_id: i64,
    pub symbol: String,
    /// Security type code (STK, OPT, FUT, CASH, ...)
    pub sec_type: String,
    pub last_trade_date_or_contract_month: String,
    pub strike: f64,
    /// Option right ("C" / "P")
    pub right: String,
    pub multiplier: String,
    pub exchange: String,
    pub primary_exchange: String,
    pub currency: String,
    pub local_symbol: String,
    pub trading_class: String,
}

impl Contract {
    /// Create a stock contract
    pub fn stock(
        symbol: impl Into<String>,
        exchange: impl Into<String>,
        currency: impl Into<String>,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            sec_type: "STK".to_string(),
            exchange: exchange.into(),
            currency: currency.into(),
            ..Default::default()
        }
    }

    /// Create an option contract
    pub fn option(
        symbol: impl Into<String>,
        last_trade_date: impl Into<String>,
        strike: f64,
        right: impl Into<String>,
        exchange: impl Into<String>,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            sec_type: "OPT".to_string(),
            last_trade_date_or_contract_month: last_trade_date.into(),
            strike,
            right: right.into(),
            exchange: exchange.into(),
            multiplier: "100".to_string(),
            currency: "USD".to_string(),
            ..Default::default()
        }
    }

    pub fn with_con_id(mut self, con_id: i64) -> Self {
        self.con_id = con_id;
        self
    }

    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }
}

/// Extended contract description returned by lookups and scanners
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContractDetails {
    pub contract: Contract,
    pub market_name: String,
    pub min_tick: f64,
    pub long_name: String,
    pub industry: String,
    pub category: String,
}

/// One row of a market scanner result
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScanData {
    /// Position in the scan result (0-based)
    pub rank: i32,
    pub contract_details: ContractDetails,
    pub distance: String,
    pub benchmark: String,
    pub projection: String,
    pub legs_str: String,
}
