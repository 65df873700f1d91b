//! Turns the dashboard's filter inputs into one [`EffectiveFilter`].
//!
//! A chart click is first resolved into a [`TaxonomyPath`], then reconciled
//! with the category selectors and the date range. The option synchronizer
//! works off the same path to keep the item-category selector in step with
//! the chart.

mod filter;
mod options;
mod path;
mod reconcile;

pub(crate) use self::filter::EffectiveFilter;
pub(crate) use self::options::{category_options, CategoryOptions};
pub(crate) use self::path::{ClickEvent, TaxonomyPath};
pub(crate) use self::reconcile::{reconcile, Selection};
