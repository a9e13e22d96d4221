use serde::{Deserialize, Serialize};

use crate::contract::Contract;

/// One account summary value
///
/// Values are grouped by `tag` within an account, with `currency` and
/// `model_code` as secondary keys (the same tag is reported per currency).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccountValue {
    pub account: String,
    pub tag: String,
    pub value: String,
    pub currency: String,
    pub model_code: String,
}

impl AccountValue {
    /// Grouping key: (account, tag, currency, model code)
    pub fn key(&self) -> (&str, &str, &str, &str) {
        (&self.account, &self.tag, &self.currency, &self.model_code)
    }
}

/// Position with market valuation, as reported by account updates
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PortfolioItem {
    pub contract: Contract,
    pub position: f64,
    pub market_price: f64,
    pub market_value: f64,
    pub average_cost: f64,
    pub unrealized_pnl: f64,
    pub realized_pnl: f64,
    pub account: String,
}

/// Position as reported by the positions stream
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub account: String,
    pub contract: Contract,
    pub position: f64,
    pub avg_cost: f64,
}

/// Account-level P&L; fields are NaN until the first update arrives
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PnL {
    pub account: String,
    pub model_code: String,
    pub daily_pnl: f64,
    pub unrealized_pnl: f64,
    pub realized_pnl: f64,
}

impl Default for PnL {
    fn default() -> Self {
        Self {
            account: String::new(),
            model_code: String::new(),
            daily_pnl: f64::NAN,
            unrealized_pnl: f64::NAN,
            realized_pnl: f64::NAN,
        }
    }
}

impl PnL {
    pub fn new(account: impl Into<String>, model_code: impl Into<String>) -> Self {
        Self {
            account: account.into(),
            model_code: model_code.into(),
            ..Default::default()
        }
    }
}

/// P&L for a single position, keyed by `con_id`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PnLSingle {
    pub account: String,
    pub model_code: String,
    pub con_id: i64,
    pub daily_pnl: f64,
    pub unrealized_pnl: f64,
    pub realized_pnl: f64,
    pub position: i64,
    pub value: f64,
}

impl Default for PnLSingle {
    fn default() -> Self {
        Self {
            account: String::new(),
            model_code: String::new(),
            con_id: 0,
            daily_pnl: f64::NAN,
            unrealized_pnl: f64::NAN,
            realized_pnl: f64::NAN,
            position: 0,
            value: f64::NAN,
        }
    }
}

impl PnLSingle {
    pub fn new(account: impl Into<String>, model_code: impl Into<String>, con_id: i64) -> Self {
        Self {
            account: account.into(),
            model_code: model_code.into(),
            con_id,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pnl_defaults_are_nan() {
        let pnl = PnL::new("DU123456", "");
        assert!(pnl.daily_pnl.is_nan());
        assert!(pnl.unrealized_pnl.is_nan());
        assert!(pnl.realized_pnl.is_nan());
    }

    #[test]
    fn test_pnl_single_defaults() {
        let pnl = PnLSingle::new("DU123456", "", 756733);
        assert_eq!(pnl.con_id, 756733);
        assert_eq!(pnl.position, 0);
        assert!(pnl.value.is_nan());
    }

    #[test]
    fn test_account_value_key_includes_currency() {
        let usd = AccountValue {
            account: "DU1".to_string(),
            tag: "CashBalance".to_string(),
            value: "1000".to_string(),
            currency: "USD".to_string(),
            model_code: String::new(),
        };
        let eur = AccountValue {
            currency: "EUR".to_string(),
            ..usd.clone()
        };
        assert_ne!(usd.key(), eur.key());
    }
}
