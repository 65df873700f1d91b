use std::collections::BTreeMap;

use async_graphql::SimpleObject;

use super::Stats;
use crate::dataset::Record;

/// One leaf of the category hierarchy chart.
#[derive(SimpleObject, Debug, Clone, PartialEq)]
pub(crate) struct CompositionNode {
    first_cat: String,
    second_cat: String,
    item_category: String,
    /// The number of observations under this leaf.
    count: usize,
    mean_rating: f64,
}

#[derive(SimpleObject, Debug, Clone, PartialEq)]
pub(crate) struct Composition {
    /// Leaves ordered by their taxonomy path.
    nodes: Vec<CompositionNode>,
    /// Midpoint of the rating colour scale, fixed for the whole dataset so
    /// colours compare across selections.
    color_midpoint: Option<f64>,
}

pub(crate) fn category_composition(rows: &[&Record], color_midpoint: Option<f64>) -> Composition {
    let mut groups: BTreeMap<(&str, &str, &str), Stats> = BTreeMap::new();
    for row in rows {
        groups
            .entry((
                row.first_cat.as_str(),
                row.second_cat.as_str(),
                row.item_category.as_str(),
            ))
            .and_modify(|stats| stats.push(row.rating))
            .or_insert_with(|| Stats::new(row.rating));
    }

    let nodes = groups
        .into_iter()
        .map(
            |((first_cat, second_cat, item_category), ratings)| CompositionNode {
                first_cat: first_cat.to_string(),
                second_cat: second_cat.to_string(),
                item_category: item_category.to_string(),
                count: ratings.count(),
                mean_rating: ratings.mean(),
            },
        )
        .collect();

    Composition {
        nodes,
        color_midpoint,
    }
}
