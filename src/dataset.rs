mod load;

use std::{collections::HashSet, sync::Arc};

use chrono::{Datelike, NaiveDate, Weekday};
use serde::Deserialize;

/// One price observation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub(crate) struct Record {
    #[serde(alias = "dates")]
    pub(crate) date: NaiveDate,
    pub(crate) first_cat: String,
    pub(crate) second_cat: String,
    pub(crate) item_category: String,
    #[serde(alias = "sellerID")]
    pub(crate) seller_id: String,
    #[serde(alias = "price_ori")]
    pub(crate) price_original: f64,
    pub(crate) price_actual: f64,
    pub(crate) rating: f64,
}

impl Record {
    /// The week of the month the observation falls in, from 1 to 5.
    pub(crate) fn week_in_month(&self) -> u32 {
        (self.date.day() - 1) / 7 + 1
    }

    pub(crate) fn day_in_week(&self) -> Weekday {
        self.date.weekday()
    }
}

/// A labelled event used to annotate the price trend.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub(crate) struct ImportantDate {
    #[serde(alias = "Date1")]
    pub(crate) date: NaiveDate,
    #[serde(alias = "Event")]
    pub(crate) event_label: String,
}

/// The immutable source table shared by every request.
///
/// Cloning is cheap; all clones point at the same rows.
#[derive(Clone)]
pub(crate) struct Dataset {
    inner: Arc<Inner>,
}

struct Inner {
    records: Vec<Record>,
    important_dates: Vec<ImportantDate>,
    bounds: Option<(NaiveDate, NaiveDate)>,
    color_midpoint: Option<f64>,
}

impl Dataset {
    pub(crate) fn new(records: Vec<Record>, mut important_dates: Vec<ImportantDate>) -> Self {
        let bounds = records.iter().fold(None, |acc, r| match acc {
            None => Some((r.date, r.date)),
            Some((min, max)) => Some((min.min(r.date), max.max(r.date))),
        });
        important_dates.sort_by_key(|d| d.date);
        let color_midpoint = self_weighted_rating(&records);
        Self {
            inner: Arc::new(Inner {
                records,
                important_dates,
                bounds,
                color_midpoint,
            }),
        }
    }

    pub(crate) fn records(&self) -> &[Record] {
        &self.inner.records
    }

    /// Important dates, ordered by date.
    pub(crate) fn important_dates(&self) -> &[ImportantDate] {
        &self.inner.important_dates
    }

    /// The earliest and latest record dates, or `None` for an empty table.
    pub(crate) fn bounds(&self) -> Option<(NaiveDate, NaiveDate)> {
        self.inner.bounds
    }

    /// Midpoint of the rating colour scale over the whole table: the mean
    /// rating weighted by the rating itself.
    pub(crate) fn color_midpoint(&self) -> Option<f64> {
        self.inner.color_midpoint
    }

    /// Distinct top-level categories in order of first appearance.
    pub(crate) fn first_categories(&self) -> Vec<String> {
        unique(self.records().iter().map(|r| r.first_cat.as_str()))
    }

    /// Distinct leaf categories under `first_cat`, optionally narrowed to one
    /// `second_cat`, in order of first appearance.
    pub(crate) fn item_categories(&self, first_cat: &str, second_cat: Option<&str>) -> Vec<String> {
        unique(
            self.records()
                .iter()
                .filter(|r| {
                    r.first_cat == first_cat
                        && second_cat.is_none_or(|second| r.second_cat == second)
                })
                .map(|r| r.item_category.as_str()),
        )
    }
}

/// `Σr² / Σr`, or `None` when the ratings sum to zero.
fn self_weighted_rating(records: &[Record]) -> Option<f64> {
    let mut ratings: Vec<f64> = records.iter().map(|r| r.rating).collect();
    ratings.sort_by(f64::total_cmp);
    let weights: f64 = ratings.iter().sum();
    let weighted: f64 = ratings.iter().map(|r| r * r).sum();
    (weights != 0.0).then(|| weighted / weights)
}

fn unique<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    values
        .filter(|v| seen.insert(*v))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
pub(crate) mod tests {
    use chrono::{NaiveDate, Weekday};

    use super::{Dataset, ImportantDate, Record};

    pub(crate) fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    pub(crate) fn record(
        date_str: &str,
        path: (&str, &str, &str),
        seller_id: &str,
        price_actual: f64,
        rating: f64,
    ) -> Record {
        Record {
            date: date(date_str),
            first_cat: path.0.to_string(),
            second_cat: path.1.to_string(),
            item_category: path.2.to_string(),
            seller_id: seller_id.to_string(),
            price_original: price_actual,
            price_actual,
            rating,
        }
    }

    /// A small table: `A` has `A1 → {x, y}` and `A2 → {z}`, `B` has `B1 → {w}`.
    pub(crate) fn sample_records() -> Vec<Record> {
        vec![
            record("2024-01-01", ("A", "A1", "x"), "s1", 10.0, 4.0),
            record("2024-01-02", ("A", "A1", "y"), "s2", 20.0, 3.0),
            record("2024-01-03", ("A", "A2", "z"), "s1", 30.0, 5.0),
            record("2024-01-08", ("A", "A1", "x"), "s3", 14.0, 2.0),
            record("2024-01-15", ("B", "B1", "w"), "s4", 50.0, 1.0),
        ]
    }

    /// Rows of one group whose prices and ratings have no exact binary sum.
    pub(crate) fn fractional_records() -> Vec<Record> {
        [0.1, 0.2, 0.3, 0.7]
            .into_iter()
            .map(|value| Record {
                price_original: 1.0,
                ..record("2024-01-01", ("A", "A1", "x"), "s1", value, value)
            })
            .collect()
    }

    pub(crate) fn sample_dataset() -> Dataset {
        Dataset::new(
            sample_records(),
            vec![
                ImportantDate {
                    date: date("2024-01-08"),
                    event_label: "Payday sale".to_string(),
                },
                ImportantDate {
                    date: date("2024-01-02"),
                    event_label: "New year sale".to_string(),
                },
            ],
        )
    }

    #[test]
    fn bounds_span_all_records() {
        let dataset = sample_dataset();
        assert_eq!(
            dataset.bounds(),
            Some((date("2024-01-01"), date("2024-01-15")))
        );
        assert_eq!(Dataset::new(Vec::new(), Vec::new()).bounds(), None);
    }

    #[test]
    fn color_midpoint_covers_whole_table() {
        // (16 + 9 + 25 + 4 + 1) / (4 + 3 + 5 + 2 + 1)
        assert_eq!(sample_dataset().color_midpoint(), Some(55.0 / 15.0));
        assert_eq!(Dataset::new(Vec::new(), Vec::new()).color_midpoint(), None);

        let unrated = vec![record("2024-01-01", ("A", "A1", "x"), "s1", 1.0, 0.0)];
        assert_eq!(Dataset::new(unrated, Vec::new()).color_midpoint(), None);
    }

    #[test]
    fn categories_keep_first_appearance_order() {
        let dataset = sample_dataset();
        assert_eq!(dataset.first_categories(), vec!["A", "B"]);
        assert_eq!(dataset.item_categories("A", None), vec!["x", "y", "z"]);
        assert_eq!(dataset.item_categories("A", Some("A1")), vec!["x", "y"]);
        assert!(dataset.item_categories("A", Some("B1")).is_empty());
    }

    #[test]
    fn important_dates_are_sorted() {
        let dataset = sample_dataset();
        let labels: Vec<_> = dataset
            .important_dates()
            .iter()
            .map(|d| d.event_label.as_str())
            .collect();
        assert_eq!(labels, vec!["New year sale", "Payday sale"]);
    }

    #[test]
    fn calendar_fields() {
        let first = record("2024-01-01", ("A", "A1", "x"), "s1", 1.0, 1.0);
        assert_eq!(first.week_in_month(), 1);
        assert_eq!(first.day_in_week(), Weekday::Mon);

        let last = record("2024-03-31", ("A", "A1", "x"), "s1", 1.0, 1.0);
        assert_eq!(last.week_in_month(), 5);
        assert_eq!(last.day_in_week(), Weekday::Sun);
    }
}
