use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::values::{EPOCH, Timestamp};

/// Bar period start: a calendar day for daily-and-above bars, a timestamp otherwise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BarDate {
    Day(NaiveDate),
    Time(Timestamp),
}

impl Default for BarDate {
    fn default() -> Self {
        BarDate::Time(EPOCH)
    }
}

impl From<NaiveDate> for BarDate {
    fn from(day: NaiveDate) -> Self {
        BarDate::Day(day)
    }
}

impl From<Timestamp> for BarDate {
    fn from(time: Timestamp) -> Self {
        BarDate::Time(time)
    }
}

impl std::fmt::Display for BarDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BarDate::Day(day) => write!(f, "{}", day),
            BarDate::Time(time) => write!(f, "{}", time.to_rfc3339()),
        }
    }
}

/// Historical bar (OHLCV)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BarData {
    pub date: BarDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
    /// Volume-weighted average price
    pub average: f64,
    pub bar_count: i64,
}

impl BarData {
    pub fn new(date: impl Into<BarDate>, open: f64, high: f64, low: f64, close: f64) -> Self {
        Self {
            date: date.into(),
            open,
            high,
            low,
            close,
            ..Default::default()
        }
    }

    pub fn with_volume(mut self, volume: f64, average: f64, bar_count: i64) -> Self {
        self.volume = volume;
        self.average = average;
        self.bar_count = bar_count;
        self
    }
}

/// Five-second real-time bar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RealTimeBar {
    pub time: Timestamp,
    /// Unix seconds of the bar end, -1 when not reported
    pub end_time: i64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
    pub wap: f64,
    pub count: i64,
}

impl Default for RealTimeBar {
    fn default() -> Self {
        Self {
            time: EPOCH,
            end_time: -1,
            open: 0.0,
            high: 0.0,
            low: 0.0,
            close: 0.0,
            volume: 0.0,
            wap: 0.0,
            count: 0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoricalSession {
    pub start_date_time: String,
    pub end_date_time: String,
    pub ref_date: String,
}

/// Trading schedule returned for a historical schedule request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoricalSchedule {
    pub start_date_time: String,
    pub end_date_time: String,
    pub time_zone: String,
    pub sessions: Vec<HistoricalSession>,
}
