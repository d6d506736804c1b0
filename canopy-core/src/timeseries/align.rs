use chrono::{DateTime, Timelike};

use crate::timeseries::merge::{Accumulator, Sample};

/// Inputs that steer bucket selection for one series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlignContext {
    /// Daily feed requested and not every child is hourly.
    pub rounding: bool,
    /// The series belongs to the child's first chain; its trailing sample
    /// anchors the axis and is never rounded. Always false for global series.
    pub is_first_chain: bool,
    /// Upper bound of the rounding scan, epoch seconds.
    pub now: i64,
}

impl AlignContext {
    /// Context for a child's global series.
    #[must_use]
    pub const fn global(rounding: bool, now: i64) -> Self {
        Self {
            rounding,
            is_first_chain: false,
            now,
        }
    }

    /// Context for one of a child's per-chain series.
    #[must_use]
    pub const fn chain(rounding: bool, is_first_chain: bool, now: i64) -> Self {
        Self {
            rounding,
            is_first_chain,
            now,
        }
    }
}

/// Choose the bucket date for `series[index]` given the accumulator so far.
///
/// Providers snapshot "today" at different times of day. To avoid a near
/// duplicate bucket a few hours after an existing one, the trailing sample of
/// a daily series (previous sample at 00:00 UTC) is moved onto the earliest
/// existing bucket in `(previous, now]`. Every other sample keeps its date.
///
/// Rounding is skipped when disabled, when the sample's own date already has a
/// bucket, or for the first chain of a child.
///
/// # Panics
/// Panics if `index` is out of bounds for `series`.
#[must_use]
pub fn bucket_date<S: Sample>(
    series: &[S],
    index: usize,
    acc: &Accumulator<S>,
    ctx: AlignContext,
) -> i64 {
    let date = series[index].date();

    if !ctx.rounding || ctx.is_first_chain || index + 1 != series.len() || acc.contains(date) {
        return date;
    }

    let Some(prev) = index.checked_sub(1).map(|i| series[i].date()) else {
        return date;
    };
    let prev_at_midnight = DateTime::from_timestamp(prev, 0).is_some_and(|dt| dt.hour() == 0);
    if !prev_at_midnight {
        return date;
    }

    acc.first_bucket_in(prev.saturating_add(1)..=ctx.now)
        .unwrap_or(date)
}
