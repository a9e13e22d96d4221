//! Integration test: feed -> live list -> observers
//!
//! Drives live lists the way a feed would: decide new vs. refine from the
//! period key, push, and let observers react.

use chrono::{Duration, TimeZone, Utc};
use std::cell::RefCell;
use std::rc::Rc;
use tws_core::{
    BarData, Contract, ContractDetails, RealTimeBar, ScanData, ScannerSubscription, TagValue,
};
use tws_live::{
    BarDataList, BarDataParams, LiveListError, RealTimeBarList, RealTimeBarParams, ScanDataList,
    ScanDataParams,
};

fn minute_bar(minute: u32, close: f64) -> BarData {
    let start = Utc.with_ymd_and_hms(2024, 6, 3, 9, 30, 0).unwrap();
    BarData::new(
        start + Duration::minutes(minute as i64),
        close - 0.5,
        close + 0.5,
        close - 1.0,
        close,
    )
    .with_volume(1_000.0, close, 12)
}

/// Push a bar the way a keep-up-to-date feed does
fn feed(list: &mut BarDataList, bar: BarData) -> Result<(), LiveListError> {
    let is_new = list.is_new_period(&bar);
    list.append_or_update(bar, is_new)
}

#[test]
fn test_bar_list_scenario() {
    let _ = env_logger::try_init();

    let contract = Contract::stock("AAPL", "SMART", "USD").with_con_id(265598);
    let params = BarDataParams::new(7, contract, "1 D", "5 secs", "TRADES")
        .with_keep_up_to_date(true)
        .with_chart_options(vec![TagValue::new("XYZ", "1")]);
    let mut bars = BarDataList::new(params);

    let flags = Rc::new(RefCell::new(Vec::new()));
    let f = flags.clone();
    bars.subscribe(move |list, has_new_bar| {
        assert_eq!(list.req_id(), 7);
        f.borrow_mut().push(has_new_bar);
    });

    for (minute, close) in [(0, 190.0), (1, 191.0), (2, 192.0)] {
        bars.append_or_update(minute_bar(minute, close), true).unwrap();
    }

    assert_eq!(bars.len(), 3);
    assert_eq!(*flags.borrow(), vec![true, true, true]);

    // In-progress bar receives a new tick before its period closes
    let mut refined = minute_bar(2, 192.0);
    refined.close = 192.75;
    refined.high = 192.75;
    bars.append_or_update(refined, false).unwrap();

    assert_eq!(bars.len(), 3);
    assert_eq!(*flags.borrow(), vec![true, true, true, false]);
    assert_eq!(bars[2].close, 192.75);
    assert_eq!(bars[1].close, 191.0);

    assert_eq!(bars.req_id(), 7);
    assert_eq!(bars.contract().map(|c| c.con_id), Some(265598));
    assert_eq!(bars.params().bar_size_setting, "5 secs");
    assert!(bars.params().keep_up_to_date);
}

#[test]
fn test_period_key_drives_new_vs_refine() {
    let _ = env_logger::try_init();

    let contract = Contract::stock("MSFT", "SMART", "USD");
    let params = BarDataParams::new(1, contract, "1 D", "1 min", "TRADES");
    let mut bars = BarDataList::new(params);

    let flags = Rc::new(RefCell::new(Vec::new()));
    let f = flags.clone();
    bars.subscribe(move |_, has_new_bar| f.borrow_mut().push(has_new_bar));

    feed(&mut bars, minute_bar(0, 400.0)).unwrap();
    feed(&mut bars, minute_bar(0, 400.5)).unwrap();
    feed(&mut bars, minute_bar(1, 401.0)).unwrap();
    feed(&mut bars, minute_bar(1, 401.25)).unwrap();

    assert_eq!(bars.len(), 2);
    assert_eq!(*flags.borrow(), vec![true, false, true, false]);
    let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();
    assert_eq!(closes, vec![400.5, 401.25]);
}

#[test]
fn test_identical_subscriptions_are_distinct() {
    let contract = Contract::stock("AAPL", "SMART", "USD");
    let params = BarDataParams::new(7, contract, "1 D", "5 secs", "TRADES");
    let mut a = BarDataList::new(params.clone());
    let mut b = BarDataList::new(params);

    a.append(minute_bar(0, 190.0)).unwrap();
    b.append(minute_bar(0, 190.0)).unwrap();

    assert_eq!(a.as_slice(), b.as_slice());
    assert_eq!(a.params(), b.params());
    assert_ne!(a, b);
    assert_eq!(a, a);
    assert_ne!(a.id(), b.id());
}

#[test]
fn test_cancelled_subscription_is_frozen() {
    let _ = env_logger::try_init();

    let contract = Contract::stock("SPY", "ARCA", "USD");
    let mut bars = RealTimeBarList::new(RealTimeBarParams::new(11, contract, 5, "MIDPOINT"));
    let count = Rc::new(RefCell::new(0));
    let c = count.clone();
    bars.subscribe(move |_, _| *c.borrow_mut() += 1);

    let t0 = Utc.with_ymd_and_hms(2024, 6, 3, 14, 0, 0).unwrap();
    for i in 0..3 {
        let bar = RealTimeBar {
            time: t0 + Duration::seconds(5 * i),
            close: 530.0 + i as f64,
            ..Default::default()
        };
        let is_new = bars.is_new_period(&bar);
        bars.append_or_update(bar, is_new).unwrap();
    }

    bars.freeze();
    let late = RealTimeBar {
        time: t0 + Duration::seconds(15),
        ..Default::default()
    };
    assert!(matches!(bars.append(late), Err(LiveListError::Frozen { .. })));

    assert_eq!(bars.len(), 3);
    assert_eq!(*count.borrow(), 3);
    assert!(bars.is_frozen());
}

#[test]
fn test_scan_rows_accumulate() {
    let subscription =
        ScannerSubscription::new("STK", "STK.US.MAJOR", "HOT_BY_VOLUME").with_rows(3);
    let mut rows = ScanDataList::new(ScanDataParams::new(21, subscription));

    let ranks = Rc::new(RefCell::new(Vec::new()));
    let r = ranks.clone();
    rows.subscribe(move |list, has_new| {
        if let Some(last) = list.last() {
            r.borrow_mut().push((last.rank, has_new));
        }
    });

    for (rank, symbol) in ["TSLA", "NVDA", "AMD"].into_iter().enumerate() {
        let row = ScanData {
            rank: rank as i32,
            contract_details: ContractDetails {
                contract: Contract::stock(symbol, "SMART", "USD"),
                ..Default::default()
            },
            ..Default::default()
        };
        let is_new = rows.is_new_period(&row);
        rows.append_or_update(row, is_new).unwrap();
    }

    assert_eq!(rows.len(), 3);
    assert_eq!(rows.params().subscription.number_of_rows, 3);
    assert_eq!(rows[1].contract_details.contract.symbol, "NVDA");
    assert_eq!(*ranks.borrow(), vec![(0, true), (1, true), (2, true)]);
}
