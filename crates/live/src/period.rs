use tws_core::{BarData, BarDate, RealTimeBar, ScanData, Timestamp};

/// Elements that belong to a period (bar interval) or slot (scan rank)
///
/// Feeds compare period keys to decide whether an incoming element opens a
/// new period or refines the last one.
pub trait Periodic {
    type Key: PartialEq;

    fn period_key(&self) -> Self::Key;
}

impl Periodic for BarData {
    type Key = BarDate;

    fn period_key(&self) -> BarDate {
        self.date
    }
}

impl Periodic for RealTimeBar {
    type Key = Timestamp;

    fn period_key(&self) -> Timestamp {
        self.time
    }
}

impl Periodic for ScanData {
    type Key = i32;

    fn period_key(&self) -> i32 {
        self.rank
    }
}
