use async_graphql::{Enum, SimpleObject};
use num_traits::ToPrimitive;

use super::{mean, top_sellers};
use crate::dataset::Record;

/// The prices a distribution is drawn from.
#[derive(Enum, Copy, Clone, Eq, PartialEq, Debug, Default)]
pub(crate) enum DistributionBasis {
    /// Mean actual price of each top-ranked seller.
    #[default]
    TopSellerMeanPrice,
    /// Every actual price in the selection.
    ActualPrice,
}

/// Five-number summary plus mean, as drawn by a box plot.
#[derive(SimpleObject, Debug, Clone, PartialEq)]
pub(crate) struct BoxSummary {
    count: usize,
    min: f64,
    q1: f64,
    median: f64,
    q3: f64,
    max: f64,
    mean: f64,
}

#[derive(SimpleObject, Debug, Clone, PartialEq)]
pub(crate) struct PriceDistribution {
    basis: DistributionBasis,
    /// Sample values in ascending order.
    values: Vec<f64>,
    /// `None` when there are no values.
    summary: Option<BoxSummary>,
}

pub(crate) fn price_distribution(rows: &[&Record], basis: DistributionBasis) -> PriceDistribution {
    let mut values: Vec<f64> = match basis {
        DistributionBasis::TopSellerMeanPrice => top_sellers(rows)
            .into_iter()
            .map(|seller| seller.mean_price)
            .collect(),
        DistributionBasis::ActualPrice => rows.iter().map(|row| row.price_actual).collect(),
    };
    values.sort_by(f64::total_cmp);
    let summary = summarize(&values);
    PriceDistribution {
        basis,
        values,
        summary,
    }
}

fn summarize(sorted: &[f64]) -> Option<BoxSummary> {
    let (&min, &max) = (sorted.first()?, sorted.last()?);
    Some(BoxSummary {
        count: sorted.len(),
        min,
        q1: quantile(sorted, 0.25),
        median: quantile(sorted, 0.5),
        q3: quantile(sorted, 0.75),
        max,
        mean: mean(sorted),
    })
}

/// Linearly interpolated quantile of a non-empty sorted slice.
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let last = sorted.len().saturating_sub(1);
    let position = q * last.to_f64().unwrap_or_default();
    let lower = position.floor();
    let index = lower.to_usize().unwrap_or_default().min(last);
    let upper = (index + 1).min(last);
    sorted[index] + (sorted[upper] - sorted[index]) * (position - lower)
}

#[cfg(test)]
mod tests {
    use super::{price_distribution, quantile, DistributionBasis};
    use crate::dataset::{tests::record, Record};

    #[test]
    fn quartiles_interpolate() {
        let values = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(quantile(&values, 0.25), 1.75);
        assert_eq!(quantile(&values, 0.5), 2.5);
        assert_eq!(quantile(&values, 0.75), 3.25);
        assert_eq!(quantile(&[7.0], 0.75), 7.0);
    }

    #[test]
    fn actual_price_basis() {
        let records = vec![
            record("2024-01-01", ("A", "A1", "x"), "s1", 40.0, 4.0),
            record("2024-01-01", ("A", "A1", "x"), "s1", 10.0, 4.0),
            record("2024-01-01", ("A", "A1", "x"), "s2", 30.0, 1.0),
            record("2024-01-01", ("A", "A1", "x"), "s3", 20.0, 2.0),
        ];
        let rows: Vec<&Record> = records.iter().collect();
        let distribution = price_distribution(&rows, DistributionBasis::ActualPrice);
        assert_eq!(distribution.values, vec![10.0, 20.0, 30.0, 40.0]);

        let summary = distribution.summary.unwrap();
        assert_eq!(summary.count, 4);
        assert_eq!((summary.min, summary.max), (10.0, 40.0));
        assert_eq!(summary.median, 25.0);
        assert_eq!(summary.mean, 25.0);
    }

    #[test]
    fn top_seller_basis_uses_seller_means() {
        let records = vec![
            record("2024-01-01", ("A", "A1", "x"), "s1", 40.0, 4.0),
            record("2024-01-01", ("A", "A1", "x"), "s1", 10.0, 4.0),
            record("2024-01-01", ("A", "A1", "x"), "s2", 30.0, 1.0),
        ];
        let rows: Vec<&Record> = records.iter().collect();
        let distribution = price_distribution(&rows, DistributionBasis::TopSellerMeanPrice);
        assert_eq!(distribution.values, vec![25.0, 30.0]);
    }

    #[test]
    fn empty_distribution() {
        let distribution = price_distribution(&[], DistributionBasis::default());
        assert!(distribution.values.is_empty());
        assert_eq!(distribution.summary, None);
    }
}
