use async_graphql::{Context, Object, Result};
use tracing::debug;

use super::selection::SelectionInput;
use crate::{
    dataset::{Dataset, Record},
    recipe::{
        annotations, category_composition, price_distribution, price_relationship, price_trend,
        top_sellers, weekly_price, Annotation, Composition, DistributionBasis, PriceDistribution,
        PricePoint, PriceRelationship, TopSeller, WeeklyPrice,
    },
    selection::EffectiveFilter,
};

/// Every chart of the dashboard, computed from one reconciled filter.
pub(crate) struct Dashboard {
    dataset: Dataset,
    filter: EffectiveFilter,
}

impl Dashboard {
    fn rows(&self) -> Vec<&Record> {
        self.filter.filter_records(self.dataset.records())
    }
}

#[Object]
impl Dashboard {
    /// The filter every chart below is computed from.
    async fn filter(&self) -> &EffectiveFilter {
        &self.filter
    }

    /// The number of records the filter selects.
    async fn row_count(&self) -> usize {
        self.rows().len()
    }

    /// Record counts and ratings per item category, for the hierarchy chart.
    async fn composition(&self) -> Composition {
        category_composition(&self.rows(), self.dataset.color_midpoint())
    }

    /// Daily actual-price statistics.
    async fn price_trend(&self) -> Vec<PricePoint> {
        price_trend(&self.rows())
    }

    /// Events within the filter's date range, to annotate the price trend.
    async fn important_dates(&self) -> Vec<Annotation> {
        annotations(
            self.dataset.important_dates(),
            self.filter.begin,
            self.filter.end,
        )
    }

    /// Mean actual price by week of month and day of week.
    async fn weekly_price(&self) -> Vec<WeeklyPrice> {
        weekly_price(&self.rows())
    }

    /// The ten best-rated sellers.
    async fn top_sellers(&self) -> Vec<TopSeller> {
        top_sellers(&self.rows())
    }

    async fn price_distribution(
        &self,
        #[graphql(default)] basis: DistributionBasis,
    ) -> PriceDistribution {
        price_distribution(&self.rows(), basis)
    }

    /// Original price against the range of actual prices, per item category.
    async fn price_relationship(&self) -> Vec<PriceRelationship> {
        price_relationship(&self.rows())
    }
}

#[derive(Default)]
pub(super) struct DashboardQuery {}

#[Object]
impl DashboardQuery {
    #[allow(clippy::unused_async)]
    async fn dashboard(&self, ctx: &Context<'_>, selection: SelectionInput) -> Result<Dashboard> {
        let dataset = ctx.data::<Dataset>()?;
        let filter = selection.reconcile(dataset);
        debug!("Reconciled selection into {filter:?}");
        Ok(Dashboard {
            dataset: dataset.clone(),
            filter,
        })
    }
}
