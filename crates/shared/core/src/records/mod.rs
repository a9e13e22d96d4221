mod account;
mod admin;
mod bars;
mod execution;
mod market_data;
mod news;

pub use account::{AccountValue, PnL, PnLSingle, PortfolioItem, Position};
pub use admin::{
    ConnectionStats, DepthMktDataDescription, FamilyCode, ScannerSubscription, SmartComponent,
    SoftDollarTier, WshEventData,
};
pub use bars::{BarData, BarDate, HistoricalSchedule, HistoricalSession, RealTimeBar};
pub use execution::{CommissionReport, Execution, ExecutionFilter, Fill, TradeLogEntry};
pub use market_data::{
    Dividends, DomLevel, HistogramData, HistoricalTick, HistoricalTickBidAsk, HistoricalTickLast,
    MktDepthData, OptionChain, PriceIncrement, TickAttrib, TickAttribBidAsk, TickAttribLast,
    TickByTickAllLast, TickByTickBidAsk, TickByTickMidPoint, TickData,
};
pub use news::{HistoricalNews, NewsArticle, NewsBulletin, NewsProvider, NewsTick};
