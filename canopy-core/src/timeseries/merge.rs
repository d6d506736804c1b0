use core::fmt;
use std::collections::BTreeMap;
use std::ops::RangeInclusive;

use crate::timeseries::align::{AlignContext, bucket_date};
use crate::types::{Hallmark, TokenAmounts, TokensPoint, TvlPoint};

/// A dated sample that can be summed into a per-date bucket.
pub trait Sample: Sized {
    /// Bucket value type; `Default` is the empty bucket.
    type Value: Default;

    /// Epoch seconds of the sample.
    fn date(&self) -> i64;

    /// Add this sample's value into `bucket`.
    fn add_into(&self, bucket: &mut Self::Value);

    /// Rebuild a sample from a finished bucket.
    fn from_bucket(date: i64, value: Self::Value) -> Self;
}

impl Sample for TvlPoint {
    type Value = f64;

    fn date(&self) -> i64 {
        self.date
    }

    fn add_into(&self, bucket: &mut f64) {
        *bucket += self.total_liquidity_usd;
    }

    fn from_bucket(date: i64, value: f64) -> Self {
        Self::new(date, value)
    }
}

impl Sample for TokensPoint {
    type Value = TokenAmounts;

    fn date(&self) -> i64 {
        self.date
    }

    fn add_into(&self, bucket: &mut TokenAmounts) {
        for (token, amount) in &self.tokens {
            *bucket.entry(token.clone()).or_insert(0.0) += amount;
        }
    }

    fn from_bucket(date: i64, tokens: TokenAmounts) -> Self {
        Self { date, tokens }
    }
}

/// Date-keyed running sums for one metric (globally or for one chain).
///
/// Keys are canonical bucket dates; each key is unique by construction.
pub struct Accumulator<S: Sample> {
    buckets: BTreeMap<i64, S::Value>,
}

impl<S: Sample> fmt::Debug for Accumulator<S>
where
    S::Value: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.buckets.iter()).finish()
    }
}

impl<S: Sample> Clone for Accumulator<S>
where
    S::Value: Clone,
{
    fn clone(&self) -> Self {
        Self {
            buckets: self.buckets.clone(),
        }
    }
}

impl<S: Sample> Default for Accumulator<S> {
    fn default() -> Self {
        Self {
            buckets: BTreeMap::new(),
        }
    }
}

impl<S: Sample> Accumulator<S> {
    /// Empty accumulator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a bucket exists at exactly `date`.
    #[must_use]
    pub fn contains(&self, date: i64) -> bool {
        self.buckets.contains_key(&date)
    }

    /// The earliest existing bucket date within `range`, if any.
    #[must_use]
    pub fn first_bucket_in(&self, range: RangeInclusive<i64>) -> Option<i64> {
        if range.start() > range.end() {
            return None;
        }
        self.buckets.range(range).next().map(|(d, _)| *d)
    }

    /// The bucket value at `date`.
    #[must_use]
    pub fn get(&self, date: i64) -> Option<&S::Value> {
        self.buckets.get(&date)
    }

    /// Bucket dates in ascending order.
    pub fn dates(&self) -> impl Iterator<Item = i64> + '_ {
        self.buckets.keys().copied()
    }

    /// Number of buckets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    /// True if no bucket has been created.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Add one sample into the bucket at `date`, creating it empty if absent.
    pub fn add(&mut self, date: i64, sample: &S) {
        sample.add_into(self.buckets.entry(date).or_default());
    }

    /// Convert into a series sorted by date ascending.
    #[must_use]
    pub fn into_series(self) -> Vec<S> {
        self.buckets
            .into_iter()
            .map(|(date, value)| S::from_bucket(date, value))
            .collect()
    }
}

/// Fold one series into `acc` and return the updated accumulator.
///
/// Each sample is added to the bucket chosen by [`bucket_date`]; only the
/// trailing sample can land on a date other than its own.
///
/// ```
/// use canopy_core::{Accumulator, AlignContext, TvlPoint, merge_series};
///
/// let a = [TvlPoint::new(0, 1.0), TvlPoint::new(86_400, 2.0)];
/// let b = [TvlPoint::new(86_400, 3.0)];
/// let ctx = AlignContext::global(false, 0);
/// let acc = merge_series(merge_series(Accumulator::new(), &a, ctx), &b, ctx);
/// assert_eq!(acc.into_series(), vec![TvlPoint::new(0, 1.0), TvlPoint::new(86_400, 5.0)]);
/// ```
#[must_use]
pub fn merge_series<S: Sample>(
    mut acc: Accumulator<S>,
    series: &[S],
    ctx: AlignContext,
) -> Accumulator<S> {
    for (index, sample) in series.iter().enumerate() {
        let date = bucket_date(series, index, &acc, ctx);
        acc.add(date, sample);
    }
    acc
}

/// Union hallmarks by date, in the given order.
///
/// When two inputs mark the same date, the later one's description wins.
/// The result is sorted by date ascending.
#[must_use]
pub fn merge_hallmarks<'a, I>(sources: I) -> Vec<Hallmark>
where
    I: IntoIterator<Item = &'a [Hallmark]>,
{
    let mut by_date: BTreeMap<i64, String> = BTreeMap::new();
    for hallmarks in sources {
        for Hallmark(date, description) in hallmarks {
            by_date.insert(*date, description.clone());
        }
    }
    by_date
        .into_iter()
        .map(|(date, description)| Hallmark(date, description))
        .collect()
}
