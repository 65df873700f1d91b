use super::TaxonomyPath;
use crate::dataset::Dataset;

/// Choices and default value for the item-category selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CategoryOptions {
    pub(crate) choices: Vec<String>,
    pub(crate) value: Vec<String>,
}

/// Lists the leaf categories in the most specific scope the chart selects.
pub(crate) fn category_options(
    dataset: &Dataset,
    first_cat: &str,
    path: &TaxonomyPath,
) -> CategoryOptions {
    let choices = match path {
        TaxonomyPath::ItemCategory { item_category, .. } => vec![item_category.clone()],
        TaxonomyPath::SecondCat { second_cat, .. } => {
            dataset.item_categories(first_cat, Some(second_cat.as_str()))
        }
        TaxonomyPath::Root | TaxonomyPath::FirstCat(_) => dataset.item_categories(first_cat, None),
    };
    CategoryOptions {
        value: choices.clone(),
        choices,
    }
}
