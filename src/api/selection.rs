use async_graphql::{Context, InputObject, Object, Result, SimpleObject};
use chrono::NaiveDate;
use tracing::debug;

use crate::{
    dataset::Dataset,
    selection::{
        category_options, reconcile, CategoryOptions, ClickEvent, EffectiveFilter, Selection,
        TaxonomyPath,
    },
};

/// A click on the category hierarchy chart.
#[derive(InputObject, Debug)]
pub(crate) struct ClickInput {
    /// Labels from the top-level category down to the clicked node. An empty
    /// list is a click on the chart root.
    path: Option<Vec<String>>,
    /// Node id as reported by the chart, e.g. "first/second/item". Only read
    /// when `path` is absent.
    id: Option<String>,
    /// Label of the clicked node.
    label: Option<String>,
}

impl ClickInput {
    fn to_event(&self) -> ClickEvent {
        match (&self.path, &self.id) {
            (Some(path), _) => ClickEvent {
                path: path.clone(),
                label: self.label.clone(),
            },
            (None, Some(id)) => ClickEvent::from_id(id, self.label.clone()),
            (None, None) => ClickEvent::default(),
        }
    }

    fn resolve(click: Option<&Self>) -> TaxonomyPath {
        let path = TaxonomyPath::resolve(click.map(Self::to_event).as_ref());
        debug!("Click resolved to depth {}: {:?}", path.depth(), path.labels());
        path
    }
}

/// The state of every filter input on the dashboard.
#[derive(InputObject, Debug)]
pub(crate) struct SelectionInput {
    /// The top-level category.
    first_cat: String,
    /// Selected item categories. Empty selects all of them.
    #[graphql(default)]
    item_categories: Vec<String>,
    /// Start of the date range. (inclusive)
    /// Example format: "yyyy-MM-dd"
    begin: Option<NaiveDate>,
    /// End of the date range. (inclusive)
    /// Example format: "yyyy-MM-dd"
    end: Option<NaiveDate>,
    /// The chart node last clicked, if any.
    click: Option<ClickInput>,
}

impl SelectionInput {
    pub(super) fn reconcile(&self, dataset: &Dataset) -> EffectiveFilter {
        let selection = Selection {
            first_cat: self.first_cat.clone(),
            path: ClickInput::resolve(self.click.as_ref()),
            item_categories: self.item_categories.clone(),
            begin: self.begin,
            end: self.end,
        };
        reconcile(dataset, &selection)
    }
}

#[Object]
impl EffectiveFilter {
    async fn first_cat(&self) -> &str {
        &self.first_cat
    }

    async fn second_cat(&self) -> Option<&str> {
        self.second_cat.as_deref()
    }

    /// Selected item categories in ascending order. Empty means every item
    /// category in scope.
    async fn item_categories(&self) -> Vec<String> {
        self.item_categories.iter().cloned().collect()
    }

    async fn begin(&self) -> NaiveDate {
        self.begin
    }

    async fn end(&self) -> NaiveDate {
        self.end
    }
}

#[Object]
impl CategoryOptions {
    /// Item categories the selector offers.
    async fn choices(&self) -> &[String] {
        &self.choices
    }

    /// The selector's new value.
    async fn value(&self) -> &[String] {
        &self.value
    }
}

#[derive(SimpleObject)]
struct DateBounds {
    min: NaiveDate,
    max: NaiveDate,
}

#[derive(Default)]
pub(super) struct SelectionQuery {}

#[Object]
impl SelectionQuery {
    /// Top-level categories in the order they first appear in the data.
    #[allow(clippy::unused_async)]
    async fn first_categories(&self, ctx: &Context<'_>) -> Result<Vec<String>> {
        let dataset = ctx.data::<Dataset>()?;
        Ok(dataset.first_categories())
    }

    /// The first and last dates in the data, or null when there is none.
    #[allow(clippy::unused_async)]
    async fn date_bounds(&self, ctx: &Context<'_>) -> Result<Option<DateBounds>> {
        let dataset = ctx.data::<Dataset>()?;
        Ok(dataset.bounds().map(|(min, max)| DateBounds { min, max }))
    }

    /// Options for the item-category selector given the chart's state.
    #[allow(clippy::unused_async)]
    async fn category_options(
        &self,
        ctx: &Context<'_>,
        first_cat: String,
        click: Option<ClickInput>,
    ) -> Result<CategoryOptions> {
        let dataset = ctx.data::<Dataset>()?;
        let path = ClickInput::resolve(click.as_ref());
        Ok(category_options(dataset, &first_cat, &path))
    }

    #[allow(clippy::unused_async)]
    async fn effective_filter(
        &self,
        ctx: &Context<'_>,
        selection: SelectionInput,
    ) -> Result<EffectiveFilter> {
        let dataset = ctx.data::<Dataset>()?;
        Ok(selection.reconcile(dataset))
    }
}
