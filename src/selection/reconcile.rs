use std::collections::BTreeSet;

use chrono::NaiveDate;
use tracing::debug;

use super::{EffectiveFilter, TaxonomyPath};
use crate::dataset::Dataset;

/// The raw filter inputs of one dashboard interaction.
#[derive(Debug, Clone, Default)]
pub(crate) struct Selection {
    /// Value of the top-level category selector.
    pub(crate) first_cat: String,
    /// The chart node last clicked.
    pub(crate) path: TaxonomyPath,
    /// Value of the item-category multi-selector.
    pub(crate) item_categories: Vec<String>,
    pub(crate) begin: Option<NaiveDate>,
    pub(crate) end: Option<NaiveDate>,
}

/// Merges the selectors, the clicked chart node and the date range into one
/// filter.
///
/// A clicked leaf always replaces the item-category selection. A clicked
/// second-level node keeps only the selected leaves that lie beneath it, and
/// a selection covering all of them collapses to "every leaf". Without a
/// node-level click the item-category selection is taken as is.
pub(crate) fn reconcile(dataset: &Dataset, selection: &Selection) -> EffectiveFilter {
    let (begin, end) = date_range(dataset, selection.begin, selection.end);
    let mut filter = EffectiveFilter {
        first_cat: selection.first_cat.clone(),
        second_cat: None,
        item_categories: BTreeSet::new(),
        begin,
        end,
    };

    match &selection.path {
        TaxonomyPath::SecondCat { second_cat, .. } => {
            let leaves: BTreeSet<String> = dataset
                .item_categories(&selection.first_cat, Some(second_cat.as_str()))
                .into_iter()
                .collect();
            let selected: BTreeSet<String> = selection
                .item_categories
                .iter()
                .filter(|item| leaves.contains(*item))
                .cloned()
                .collect();
            if selected.len() < selection.item_categories.len() {
                debug!("Dropping selected item categories outside {second_cat:?}");
            }
            if selected != leaves {
                filter.item_categories = selected;
            }
            filter.second_cat = Some(second_cat.clone());
        }
        TaxonomyPath::ItemCategory { item_category, .. } => {
            filter.item_categories = BTreeSet::from([item_category.clone()]);
        }
        TaxonomyPath::Root | TaxonomyPath::FirstCat(_) => {
            filter.item_categories = selection.item_categories.iter().cloned().collect();
        }
    }
    filter
}

/// Intersects the requested range with the dataset's, filling in missing
/// bounds from it.
///
/// A range lying wholly outside the dataset is kept as given, so it selects
/// no rows.
fn date_range(
    dataset: &Dataset,
    begin: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> (NaiveDate, NaiveDate) {
    let (min, max) = dataset
        .bounds()
        .unwrap_or((NaiveDate::MIN, NaiveDate::MAX));
    let (begin, end) = match (begin, end) {
        (Some(begin), Some(end)) if begin > end => {
            debug!("Swapping reversed date range {begin} to {end}");
            (Some(end), Some(begin))
        }
        range => range,
    };
    match (begin, end) {
        (_, Some(end)) if end < min => {
            debug!("Date range ending {end} precedes the dataset");
            (begin.unwrap_or(end), end)
        }
        (Some(begin), _) if begin > max => {
            debug!("Date range starting {begin} follows the dataset");
            (begin, end.unwrap_or(begin))
        }
        _ => (
            begin.map_or(min, |begin| begin.max(min)),
            end.map_or(max, |end| end.min(max)),
        ),
    }
}
