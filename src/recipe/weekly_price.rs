use std::collections::BTreeMap;

use async_graphql::{Enum, SimpleObject};
use chrono::Weekday;

use super::Stats;
use crate::dataset::Record;

/// Days in chart order. The derived ordering is the order listed here.
#[derive(Enum, Copy, Clone, Eq, PartialEq, Debug, PartialOrd, Ord)]
pub(crate) enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl From<Weekday> for DayOfWeek {
    fn from(value: Weekday) -> Self {
        match value {
            Weekday::Mon => Self::Monday,
            Weekday::Tue => Self::Tuesday,
            Weekday::Wed => Self::Wednesday,
            Weekday::Thu => Self::Thursday,
            Weekday::Fri => Self::Friday,
            Weekday::Sat => Self::Saturday,
            Weekday::Sun => Self::Sunday,
        }
    }
}

#[derive(SimpleObject, Debug, Clone, PartialEq)]
pub(crate) struct WeeklyPrice {
    /// Week of the month, from 1 to 5.
    week_in_month: u32,
    day_in_week: DayOfWeek,
    mean_price: f64,
}

/// Mean `price_actual` per week of month and day of week, ordered by week
/// and then from Monday to Sunday.
pub(crate) fn weekly_price(rows: &[&Record]) -> Vec<WeeklyPrice> {
    let mut groups: BTreeMap<(u32, DayOfWeek), Stats> = BTreeMap::new();
    for row in rows {
        groups
            .entry((row.week_in_month(), row.day_in_week().into()))
            .and_modify(|stats| stats.push(row.price_actual))
            .or_insert_with(|| Stats::new(row.price_actual));
    }
    groups
        .into_iter()
        .map(|((week_in_month, day_in_week), stats)| WeeklyPrice {
            week_in_month,
            day_in_week,
            mean_price: stats.mean(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{weekly_price, DayOfWeek};
    use crate::dataset::{
        tests::{fractional_records, record},
        Record,
    };

    fn march_records() -> Vec<Record> {
        // 2024-03-04 is a Monday.
        vec![
            record("2024-03-04", ("A", "A1", "x"), "s1", 10.0, 1.0),
            record("2024-03-04", ("A", "A1", "x"), "s2", 20.0, 1.0),
            record("2024-03-05", ("A", "A1", "x"), "s1", 7.0, 1.0),
            record("2024-03-10", ("A", "A1", "x"), "s1", 4.0, 1.0),
            record("2024-03-11", ("A", "A1", "x"), "s1", 6.0, 1.0),
            record("2024-03-31", ("A", "A1", "x"), "s1", 9.0, 1.0),
        ]
    }

    #[test]
    fn canonical_order() {
        let records = march_records();
        let rows: Vec<&Record> = records.iter().collect();
        let keys: Vec<_> = weekly_price(&rows)
            .iter()
            .map(|w| (w.week_in_month, w.day_in_week, w.mean_price))
            .collect();
        assert_eq!(
            keys,
            vec![
                (1, DayOfWeek::Monday, 15.0),
                (1, DayOfWeek::Tuesday, 7.0),
                (2, DayOfWeek::Monday, 6.0),
                (2, DayOfWeek::Sunday, 4.0),
                (5, DayOfWeek::Sunday, 9.0),
            ]
        );
    }

    #[test]
    fn order_ignores_row_order() {
        let records = march_records();
        let forward: Vec<&Record> = records.iter().collect();
        let reversed: Vec<&Record> = records.iter().rev().collect();
        assert_eq!(weekly_price(&forward), weekly_price(&reversed));

        let first_days: Vec<_> = weekly_price(&reversed)
            .iter()
            .take(2)
            .map(|w| w.day_in_week)
            .collect();
        assert_eq!(first_days, vec![DayOfWeek::Monday, DayOfWeek::Tuesday]);
    }

    #[test]
    fn empty_input() {
        assert!(weekly_price(&[]).is_empty());
    }

    #[test]
    fn inexact_means_ignore_row_order() {
        let records = fractional_records();
        let forward: Vec<&Record> = records.iter().collect();
        let reversed: Vec<&Record> = records.iter().rev().collect();
        assert_eq!(weekly_price(&forward), weekly_price(&reversed));
    }
}
