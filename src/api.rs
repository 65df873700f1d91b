mod dashboard;
mod selection;

use async_graphql::{EmptyMutation, EmptySubscription, MergedObject};

use crate::dataset::Dataset;

/// A set of queries defined in the schema.
///
/// This is exposed only for [`Schema`], and not used directly.
#[derive(Default, MergedObject)]
pub(crate) struct Query(dashboard::DashboardQuery, selection::SelectionQuery);

pub(crate) type Schema = async_graphql::Schema<Query, EmptyMutation, EmptySubscription>;

pub(crate) fn schema(dataset: Dataset) -> Schema {
    Schema::build(Query::default(), EmptyMutation, EmptySubscription)
        .data(dataset)
        .finish()
}

#[cfg(test)]
struct TestSchema {
    schema: Schema,
}

#[cfg(test)]
impl TestSchema {
    fn new(dataset: Dataset) -> Self {
        Self {
            schema: schema(dataset),
        }
    }

    async fn execute(&self, query: &str) -> async_graphql::Response {
        let request: async_graphql::Request = query.into();
        self.schema.execute(request).await
    }

    /// Runs `query` and returns its data, failing the test on any error.
    async fn data(&self, query: &str) -> serde_json::Value {
        let response = self.execute(query).await;
        assert!(response.errors.is_empty(), "{:?}", response.errors);
        response.data.into_json().unwrap()
    }
}
