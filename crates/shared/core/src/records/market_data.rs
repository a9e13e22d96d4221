//! Tick, depth and quote records

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::values::Timestamp;

/// Attributes of a price tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TickAttrib {
    pub can_auto_execute: bool,
    pub past_limit: bool,
    pub pre_open: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TickAttribBidAsk {
    pub bid_past_low: bool,
    pub ask_past_high: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TickAttribLast {
    pub past_limit: bool,
    pub unreported: bool,
}

/// Single ticker update (price or size for one tick type)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TickData {
    pub time: Timestamp,
    pub tick_type: i32,
    pub price: f64,
    pub size: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HistoricalTick {
    pub time: Timestamp,
    pub price: f64,
    pub size: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HistoricalTickBidAsk {
    pub time: Timestamp,
    pub tick_attrib_bid_ask: TickAttribBidAsk,
    pub price_bid: f64,
    pub price_ask: f64,
    pub size_bid: f64,
    pub size_ask: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HistoricalTickLast {
    pub time: Timestamp,
    pub tick_attrib_last: TickAttribLast,
    pub price: f64,
    pub size: f64,
    pub exchange: String,
    pub special_conditions: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TickByTickAllLast {
    /// 1 = Last, 2 = AllLast
    pub tick_type: i32,
    pub time: Timestamp,
    pub price: f64,
    pub size: f64,
    pub tick_attrib_last: TickAttribLast,
    pub exchange: String,
    pub special_conditions: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TickByTickBidAsk {
    pub time: Timestamp,
    pub bid_price: f64,
    pub ask_price: f64,
    pub bid_size: f64,
    pub ask_size: f64,
    pub tick_attrib_bid_ask: TickAttribBidAsk,
}

impl TickByTickBidAsk {
    /// Difference between ask and bid
    pub fn spread(&self) -> f64 {
        self.ask_price - self.bid_price
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TickByTickMidPoint {
    pub time: Timestamp,
    pub mid_point: f64,
}

/// Market depth (order book) update
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MktDepthData {
    pub time: Timestamp,
    /// Row in the book
    pub position: i32,
    pub market_maker: String,
    /// 0 = insert, 1 = update, 2 = delete
    pub operation: i32,
    /// 0 = ask, 1 = bid
    pub side: i32,
    pub price: f64,
    pub size: f64,
}

/// Aggregated depth-of-market level
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DomLevel {
    pub price: f64,
    pub size: f64,
    pub market_maker: String,
}

/// Minimum price increment valid from `low_edge` upward
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceIncrement {
    pub low_edge: f64,
    pub increment: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct HistogramData {
    pub price: f64,
    pub count: i64,
}

/// Option chain parameters for one exchange
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OptionChain {
    pub exchange: String,
    pub underlying_con_id: i64,
    pub trading_class: String,
    pub multiplier: String,
    pub expirations: Vec<String>,
    pub strikes: Vec<f64>,
}

/// Dividend information; any part may be missing
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dividends {
    pub past_12_months: Option<f64>,
    pub next_12_months: Option<f64>,
    pub next_date: Option<NaiveDate>,
    pub next_amount: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bid_ask_spread() {
        let tick = TickByTickBidAsk {
            bid_price: 99.5,
            ask_price: 100.25,
            ..Default::default()
        };
        assert_eq!(tick.spread(), 0.75);
    }

    #[test]
    fn test_dividends_all_missing() {
        let d = Dividends::default();
        assert!(d.past_12_months.is_none());
        assert!(d.next_date.is_none());
    }
}
