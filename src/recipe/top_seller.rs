use std::collections::BTreeMap;

use async_graphql::SimpleObject;

use super::Stats;
use crate::dataset::Record;

/// The number of sellers kept in the ranking.
pub(crate) const TOP_SELLER_LIMIT: usize = 10;

#[derive(SimpleObject, Debug, Clone, PartialEq)]
pub(crate) struct TopSeller {
    pub(crate) seller_id: String,
    /// The number of listed items.
    pub(crate) item_count: usize,
    /// The mean rating of the listed items.
    pub(crate) rating: f64,
    /// The mean actual price of the listed items.
    pub(crate) mean_price: f64,
}

#[derive(Default)]
struct SellerTotals {
    ratings: Stats,
    prices: Stats,
}

/// Ranks sellers by mean rating, then by item count, both descending, and
/// keeps the first [`TOP_SELLER_LIMIT`]. Remaining ties go to the smaller
/// seller id.
pub(crate) fn top_sellers(rows: &[&Record]) -> Vec<TopSeller> {
    let mut sellers: BTreeMap<&str, SellerTotals> = BTreeMap::new();
    for row in rows {
        let totals = sellers.entry(row.seller_id.as_str()).or_default();
        totals.ratings.push(row.rating);
        totals.prices.push(row.price_actual);
    }

    let mut ranking: Vec<TopSeller> = sellers
        .into_iter()
        .map(|(seller_id, totals)| TopSeller {
            seller_id: seller_id.to_string(),
            item_count: totals.ratings.count(),
            rating: totals.ratings.mean(),
            mean_price: totals.prices.mean(),
        })
        .collect();
    ranking.sort_by(|a, b| {
        b.rating
            .total_cmp(&a.rating)
            .then_with(|| b.item_count.cmp(&a.item_count))
            .then_with(|| a.seller_id.cmp(&b.seller_id))
    });
    ranking.truncate(TOP_SELLER_LIMIT);
    ranking
}
