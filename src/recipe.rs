//! Aggregations over the rows selected by an `EffectiveFilter`.
//!
//! Every recipe is a pure function of its input rows. Groups are collected in
//! ordered maps and sums run over sorted values, so the output does not depend
//! on the order rows arrive in.

mod composition;
mod price_distribution;
mod price_relationship;
mod price_trend;
mod top_seller;
mod weekly_price;

use std::cmp::Ordering;

use num_traits::ToPrimitive;

pub(crate) use self::composition::{category_composition, Composition};
pub(crate) use self::price_distribution::{price_distribution, DistributionBasis, PriceDistribution};
pub(crate) use self::price_relationship::{price_relationship, PriceRelationship};
pub(crate) use self::price_trend::{annotations, price_trend, Annotation, PricePoint};
pub(crate) use self::top_seller::{top_sellers, TopSeller};
pub(crate) use self::weekly_price::{weekly_price, WeeklyPrice};

/// The values of one column within a group.
#[derive(Debug, Clone, Default)]
struct Stats {
    values: Vec<f64>,
}

impl Stats {
    fn new(value: f64) -> Self {
        Self {
            values: vec![value],
        }
    }

    fn push(&mut self, value: f64) {
        self.values.push(value);
    }

    fn count(&self) -> usize {
        self.values.len()
    }

    fn min(&self) -> f64 {
        self.values.iter().copied().fold(f64::INFINITY, f64::min)
    }

    fn max(&self) -> f64 {
        self.values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }

    fn mean(&self) -> f64 {
        let mut sorted = self.values.clone();
        sorted.sort_by(f64::total_cmp);
        mean(&sorted)
    }
}

/// Mean of `sorted`, summed in the given order. Callers sort first so the
/// result does not depend on row order.
fn mean(sorted: &[f64]) -> f64 {
    sorted.iter().sum::<f64>() / sorted.len().to_f64().unwrap_or(f64::NAN)
}

/// A price usable as an ordered grouping key.
#[derive(Debug, Clone, Copy)]
struct PriceKey(f64);

impl PartialEq for PriceKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for PriceKey {}

impl PartialOrd for PriceKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PriceKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}
