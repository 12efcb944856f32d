//! Buffer Sizing
//!
//! Capacity defaults for the caller-owned rolling history.

/// Default number of scan cycles kept per asset for trend display.
///
/// Twenty samples cover the visible width of the dashboard trend plot at the
/// usual scan cadence; older samples are overwritten in place.
pub const SCAN_HISTORY_DEPTH: usize = 20;
