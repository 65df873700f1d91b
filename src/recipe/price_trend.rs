use std::collections::BTreeMap;

use async_graphql::SimpleObject;
use chrono::NaiveDate;

use super::Stats;
use crate::dataset::{ImportantDate, Record};

/// Actual-price statistics for one day.
#[derive(SimpleObject, Debug, Clone, PartialEq)]
pub(crate) struct PricePoint {
    date: NaiveDate,
    max_price: f64,
    min_price: f64,
    mean_price: f64,
}

/// An event marked on the price trend.
#[derive(SimpleObject, Debug, Clone, PartialEq)]
pub(crate) struct Annotation {
    date: NaiveDate,
    event_label: String,
}

/// Daily max, min and mean of `price_actual`, ordered by date.
pub(crate) fn price_trend(rows: &[&Record]) -> Vec<PricePoint> {
    let mut days: BTreeMap<NaiveDate, Stats> = BTreeMap::new();
    for row in rows {
        days.entry(row.date)
            .and_modify(|stats| stats.push(row.price_actual))
            .or_insert_with(|| Stats::new(row.price_actual));
    }
    days.into_iter()
        .map(|(date, stats)| PricePoint {
            date,
            max_price: stats.max(),
            min_price: stats.min(),
            mean_price: stats.mean(),
        })
        .collect()
}

/// Events between `begin` and `end`, both inclusive. `events` must be sorted
/// by date.
pub(crate) fn annotations(
    events: &[ImportantDate],
    begin: NaiveDate,
    end: NaiveDate,
) -> Vec<Annotation> {
    events
        .iter()
        .skip_while(|e| e.date < begin)
        .take_while(|e| e.date <= end)
        .map(|e| Annotation {
            date: e.date,
            event_label: e.event_label.clone(),
        })
        .collect()
}
