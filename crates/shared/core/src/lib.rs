//! TWS Core
//!
//! Pure record types for the TWS API client data model.
//! This crate contains no async, no I/O, and is 100% unit testable.

pub mod contract;
pub mod defaults;
pub mod error;
pub mod fundamentals;
pub mod greeks;
pub mod records;
pub mod value;
pub mod values;

// Re-export commonly used types at crate root
pub use contract::{Contract, ContractDetails, ScanData, TagValue};
pub use defaults::ApiDefaults;
pub use error::{CombineError, CombineResult};
pub use fundamentals::FundamentalRatios;
pub use greeks::OptionComputation;
pub use records::{
    AccountValue, BarData, BarDate, CommissionReport, ConnectionStats, DepthMktDataDescription,
    Dividends, DomLevel, Execution, ExecutionFilter, FamilyCode, Fill, HistogramData,
    HistoricalNews, HistoricalSchedule, HistoricalSession, HistoricalTick, HistoricalTickBidAsk,
    HistoricalTickLast, MktDepthData, NewsArticle, NewsBulletin, NewsProvider, NewsTick,
    OptionChain, PnL, PnLSingle, PortfolioItem, Position, PriceIncrement, RealTimeBar,
    ScannerSubscription, SmartComponent, SoftDollarTier, TickAttrib, TickAttribBidAsk,
    TickAttribLast, TickByTickAllLast, TickByTickBidAsk, TickByTickMidPoint, TickData,
    TradeLogEntry, WshEventData,
};
pub use value::Value;
pub use values::{EPOCH, Timestamp, UNSET_DOUBLE, UNSET_INTEGER};
