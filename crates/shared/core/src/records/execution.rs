use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};

use crate::ApiDefaults;
use crate::contract::Contract;
use crate::values::Timestamp;

/// An execution (fill) report, keyed by `exec_id`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Execution {
    pub exec_id: String,
    pub time: Timestamp,
    pub acct_number: String,
    pub exchange: String,
    /// "BOT" or "SLD"
    pub side: String,
    pub shares: f64,
    pub price: f64,
    pub perm_id: i64,
    pub client_id: i32,
    pub order_id: i32,
    pub liquidation: i32,
    pub cum_qty: f64,
    pub avg_price: f64,
    pub order_ref: String,
    pub ev_rule: String,
    pub ev_multiplier: f64,
    pub model_code: String,
    pub last_liquidity: i32,
    pub pending_price_revision: bool,
}

/// Commission charged for one execution
///
/// Shares `exec_id` with the [`Execution`] it belongs to; realized P&L is
/// reported in `currency`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CommissionReport {
    pub exec_id: String,
    pub commission: f64,
    pub currency: String,
    pub realized_pnl: f64,
    #[serde(rename = "yield")]
    pub yield_: f64,
    /// YYYYMMDD as integer
    pub yield_redemption_date: i32,
}

/// Filter for execution requests; empty fields match everything
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionFilter {
    pub client_id: i32,
    pub acct_code: String,
    /// "yyyymmdd hh:mm:ss"
    pub time: String,
    pub symbol: String,
    pub sec_type: String,
    pub exchange: String,
    pub side: String,
}

/// A completed fill: the execution, its commission and the contract
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Fill {
    pub contract: Contract,
    pub execution: Execution,
    pub commission_report: CommissionReport,
    pub time: Timestamp,
}

impl Fill {
    pub fn exec_id(&self) -> &str {
        &self.execution.exec_id
    }
}

/// One entry of an order's status history, timed in the configured timezone
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TradeLogEntry {
    pub time: DateTime<FixedOffset>,
    pub status: String,
    pub message: String,
    pub error_code: i32,
}

impl TradeLogEntry {
    pub fn new(
        time: DateTime<FixedOffset>,
        status: impl Into<String>,
        message: impl Into<String>,
        error_code: i32,
    ) -> Self {
        Self {
            time,
            status: status.into(),
            message: message.into(),
            error_code,
        }
    }

    /// Create an entry stamped with the current time in the configured timezone
    pub fn now(
        defaults: &ApiDefaults,
        status: impl Into<String>,
        message: impl Into<String>,
        error_code: i32,
    ) -> Self {
        Self::new(defaults.localize(Utc::now()), status, message, error_code)
    }
}
