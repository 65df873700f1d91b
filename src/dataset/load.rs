use std::path::Path;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use tracing::info;

use super::{Dataset, ImportantDate, Record};

impl Dataset {
    /// Reads the source table and, if given, the important-dates table from
    /// CSV files with a header row.
    pub(crate) fn load(records: &Path, important_dates: Option<&Path>) -> Result<Self> {
        let rows: Vec<Record> = read_csv(records)?;
        info!("Loaded {} records from {}", rows.len(), records.display());

        let events: Vec<ImportantDate> = match important_dates {
            Some(path) => {
                let events = read_csv(path)?;
                info!("Loaded {} important dates from {}", events.len(), path.display());
                events
            }
            None => Vec::new(),
        };

        let dataset = Dataset::new(rows, events);
        if let Some((min, max)) = dataset.bounds() {
            info!("Dataset covers {min} to {max}");
        }
        Ok(dataset)
    }
}

fn read_csv<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("Failed to open {}", path.display()))?;
    let mut rows = Vec::new();
    for (i, row) in reader.deserialize().enumerate() {
        rows.push(
            row.with_context(|| format!("Failed to parse row {} of {}", i + 1, path.display()))?,
        );
    }
    Ok(rows)
}
