use crate::types::{Granularity, ProtocolSnapshot, TvlPoint};

/// Seconds in one day.
pub const DAY_SECONDS: i64 = 86_400;

/// Heuristic: determine if a locked-value series is sampled hourly.
///
/// Only the first two samples are inspected. A series with fewer than two
/// samples counts as hourly, as does one whose first gap is under a day.
///
/// ```
/// use canopy_core::{is_hourly, TvlPoint};
///
/// let daily = [TvlPoint::new(0, 1.0), TvlPoint::new(86_400, 1.0)];
/// let hourly = [TvlPoint::new(0, 1.0), TvlPoint::new(3_600, 1.0)];
/// assert!(!is_hourly(&daily));
/// assert!(is_hourly(&hourly));
/// assert!(is_hourly(&[]));
/// ```
#[must_use]
pub fn is_hourly(series: &[TvlPoint]) -> bool {
    match series {
        [first, second, ..] => second.date - first.date < DAY_SECONDS,
        _ => true,
    }
}

/// True only if every child's global locked-value series is hourly.
#[must_use]
pub fn all_hourly(children: &[ProtocolSnapshot]) -> bool {
    children.iter().all(|c| is_hourly(&c.tvl))
}

/// Whether trailing-sample date rounding applies to this aggregation.
///
/// Rounding requires the daily feed and at least one child that is not hourly.
#[must_use]
pub fn rounding_enabled(granularity: Granularity, children: &[ProtocolSnapshot]) -> bool {
    !granularity.is_hourly() && !all_hourly(children)
}
