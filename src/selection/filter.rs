use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::dataset::Record;

/// The reconciled selection every aggregation is computed from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct EffectiveFilter {
    pub(crate) first_cat: String,
    pub(crate) second_cat: Option<String>,
    /// Selected leaf categories. Empty means every leaf in scope.
    pub(crate) item_categories: BTreeSet<String>,
    /// Start of the date range. (inclusive)
    pub(crate) begin: NaiveDate,
    /// End of the date range. (inclusive)
    pub(crate) end: NaiveDate,
}

impl EffectiveFilter {
    pub(crate) fn matches(&self, record: &Record) -> bool {
        record.first_cat == self.first_cat
            && self
                .second_cat
                .as_ref()
                .is_none_or(|second| record.second_cat == *second)
            && (self.item_categories.is_empty()
                || self.item_categories.contains(&record.item_category))
            && record.date >= self.begin
            && record.date <= self.end
    }

    pub(crate) fn filter_records<'a>(&self, records: &'a [Record]) -> Vec<&'a Record> {
        records.iter().filter(|r| self.matches(r)).collect()
    }
}
