//! TWS Live Lists
//!
//! Containers that accumulate the streamed results of one subscription
//! (historical bars kept up to date, real-time bars, scanner rows) and
//! notify observers on every change.
//!
//! ## Flow
//!
//! ```text
//! Feed (decodes API messages)
//!     │ append_or_update(element, is_new)
//!     ▼
//! LiveList<T, P> ── params: request id, contract, request parameters
//!     │ (list, has_new_element), synchronously, in registration order
//!     ▼
//! Observers (UI, strategy code)
//! ```
//!
//! The feed decides whether an element is new or refines the last one;
//! [`Periodic`] helps it compare period keys. A list has a single writer:
//! every mutating method takes `&mut self`.

pub mod error;
pub mod event;
pub mod list;
pub mod params;
pub mod period;

pub use error::{LiveListError, LiveListResult};
pub use event::{HandlerId, UpdateEvent};
pub use list::{ListId, LiveList};
pub use params::{
    BarDataParams, EndDateTime, RealTimeBarParams, ScanDataParams, SubscriptionParams,
};
pub use period::Periodic;

use tws_core::{BarData, RealTimeBar, ScanData};

/// Historical bars, optionally kept up to date
pub type BarDataList = LiveList<BarData, BarDataParams>;

/// Five-second real-time bars
pub type RealTimeBarList = LiveList<RealTimeBar, RealTimeBarParams>;

/// Market scanner rows
pub type ScanDataList = LiveList<ScanData, ScanDataParams>;
