use std::collections::BTreeMap;

use async_graphql::SimpleObject;

use super::{PriceKey, Stats};
use crate::dataset::Record;

/// Actual-price range and rating of one item category at one original price.
#[derive(SimpleObject, Debug, Clone, PartialEq)]
pub(crate) struct PriceRelationship {
    item_category: String,
    price_original: f64,
    min_price_actual: f64,
    max_price_actual: f64,
    mean_rating: f64,
}

/// Groups by item category and original price, ordered by both.
pub(crate) fn price_relationship(rows: &[&Record]) -> Vec<PriceRelationship> {
    let mut groups: BTreeMap<(&str, PriceKey), (Stats, Stats)> = BTreeMap::new();
    for row in rows {
        groups
            .entry((row.item_category.as_str(), PriceKey(row.price_original)))
            .and_modify(|(prices, ratings)| {
                prices.push(row.price_actual);
                ratings.push(row.rating);
            })
            .or_insert_with(|| (Stats::new(row.price_actual), Stats::new(row.rating)));
    }
    groups
        .into_iter()
        .map(
            |((item_category, price_original), (prices, ratings))| PriceRelationship {
                item_category: item_category.to_string(),
                price_original: price_original.0,
                min_price_actual: prices.min(),
                max_price_actual: prices.max(),
                mean_rating: ratings.mean(),
            },
        )
        .collect()
}

#[cfg(test)]
mod tests {
    use super::price_relationship;
    use crate::dataset::{
        tests::{fractional_records, record},
        Record,
    };

    fn priced(item: &str, original: f64, actual: f64, rating: f64) -> Record {
        let mut r = record("2024-01-01", ("A", "A1", item), "s1", actual, rating);
        r.price_original = original;
        r
    }

    #[test]
    fn groups_by_category_and_original_price() {
        let records = vec![
            priced("y", 50.0, 45.0, 3.0),
            priced("x", 100.0, 80.0, 4.0),
            priced("x", 100.0, 90.0, 2.0),
            priced("x", 60.0, 60.0, 5.0),
        ];
        let rows: Vec<&Record> = records.iter().collect();
        let groups = price_relationship(&rows);

        let keys: Vec<_> = groups
            .iter()
            .map(|g| (g.item_category.as_str(), g.price_original))
            .collect();
        assert_eq!(keys, vec![("x", 60.0), ("x", 100.0), ("y", 50.0)]);

        assert_eq!(groups[1].min_price_actual, 80.0);
        assert_eq!(groups[1].max_price_actual, 90.0);
        assert_eq!(groups[1].mean_rating, 3.0);

        let single = &groups[0];
        assert_eq!(single.min_price_actual, single.max_price_actual);
    }

    #[test]
    fn empty_relationship() {
        assert!(price_relationship(&[]).is_empty());
    }

    #[test]
    fn inexact_means_ignore_row_order() {
        let records = fractional_records();
        let forward: Vec<&Record> = records.iter().collect();
        let reversed: Vec<&Record> = records.iter().rev().collect();
        assert_eq!(price_relationship(&forward), price_relationship(&reversed));
    }
}
