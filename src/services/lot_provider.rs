//! Lot data providers.
//!
//! Pages never own their data: the router asks a [`LotProvider`] for the
//! record by display number. Providers are immutable after construction and
//! shared across requests without locking.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

use crate::domain::{LotSummary, LotValidationError, TenderLot};

use super::sample::sample_lot;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("failed to read lots file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse lots file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("lot #{index} is invalid")]
    Invalid {
        index: usize,
        #[source]
        source: LotValidationError,
    },

    #[error("duplicate lot display number '{0}'")]
    Duplicate(String),
}

/// Source of tender lot records for the page.
pub trait LotProvider: Send + Sync {
    fn get(&self, display_no: &str) -> Option<&TenderLot>;

    /// All lots in load order.
    fn list(&self) -> Vec<LotSummary>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Validated lots held in memory, keyed by display number.
#[derive(Debug, Default)]
pub struct InMemoryLotProvider {
    lots: Vec<TenderLot>,
    index: HashMap<String, usize>,
}

impl InMemoryLotProvider {
    pub fn new(lots: Vec<TenderLot>) -> Result<Self, ProviderError> {
        let mut index = HashMap::with_capacity(lots.len());

        for (i, lot) in lots.iter().enumerate() {
            lot.validate()
                .map_err(|source| ProviderError::Invalid { index: i, source })?;

            if index.insert(lot.display_no.clone(), i).is_some() {
                return Err(ProviderError::Duplicate(lot.display_no.clone()));
            }

            for item in lot.inconsistent_items() {
                let line = &lot.items[item];
                warn!(
                    display_no = %lot.display_no,
                    item,
                    quantity = line.quantity,
                    price = line.price,
                    cost = line.cost,
                    "Line item cost differs from quantity x price; rendering stored cost"
                );
            }
        }

        Ok(Self { lots, index })
    }

    /// Provider holding only the built-in sample lot.
    pub fn with_sample() -> Result<Self, ProviderError> {
        Self::new(vec![sample_lot()])
    }

    /// Load a JSON array of lots from disk.
    pub fn from_json_file(path: &Path) -> Result<Self, ProviderError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ProviderError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let lots: Vec<TenderLot> =
            serde_json::from_str(&raw).map_err(|source| ProviderError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        let provider = Self::new(lots)?;
        info!(
            path = %path.display(),
            lots = provider.len(),
            "Loaded tender lots"
        );
        Ok(provider)
    }
}

impl LotProvider for InMemoryLotProvider {
    fn get(&self, display_no: &str) -> Option<&TenderLot> {
        self.index.get(display_no).map(|&i| &self.lots[i])
    }

    fn list(&self) -> Vec<LotSummary> {
        self.lots.iter().map(LotSummary::from).collect()
    }

    fn len(&self) -> usize {
        self.lots.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_lots(lots: &serde_json::Value) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", lots).unwrap();
        file
    }

    #[test]
    fn sample_provider_serves_one_lot() {
        let provider = InMemoryLotProvider::with_sample().unwrap();
        assert_eq!(provider.len(), 1);
        assert!(provider.get("LOT-2024-001234").is_some());
        assert!(provider.get("lot-2024-001234").is_none());
    }

    #[test]
    fn loads_lots_from_json_file_in_order() {
        let mut second = sample_lot();
        second.display_no = "LOT-2024-000002".to_string();
        second.status = "Closed".to_string();
        let file = write_lots(&serde_json::json!([sample_lot(), second]));

        let provider = InMemoryLotProvider::from_json_file(file.path()).unwrap();
        let list = provider.list();
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].display_no, "LOT-2024-001234");
        assert_eq!(list[1].display_no, "LOT-2024-000002");
        assert_eq!(list[1].item_count, 2);
    }

    #[test]
    fn rejects_duplicate_display_numbers() {
        let err = InMemoryLotProvider::new(vec![sample_lot(), sample_lot()]).unwrap_err();
        assert!(matches!(err, ProviderError::Duplicate(no) if no == "LOT-2024-001234"));
    }

    #[test]
    fn rejects_invalid_link_with_lot_index() {
        let mut bad = sample_lot();
        bad.display_no = "LOT-B".to_string();
        bad.link = "uzex.uz/lot".to_string();

        let err = InMemoryLotProvider::new(vec![sample_lot(), bad]).unwrap_err();
        assert!(matches!(err, ProviderError::Invalid { index: 1, .. }));
    }

    #[test]
    fn malformed_date_is_a_parse_error() {
        let mut value = serde_json::to_value(sample_lot()).unwrap();
        value["start_date"] = serde_json::json!("15.01.2024");
        let file = write_lots(&serde_json::json!([value]));

        let err = InMemoryLotProvider::from_json_file(file.path()).unwrap_err();
        assert!(matches!(err, ProviderError::Parse { .. }));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = InMemoryLotProvider::from_json_file(Path::new("/nonexistent/lots.json"))
            .unwrap_err();
        assert!(matches!(err, ProviderError::Io { .. }));
    }

    #[test]
    fn inconsistent_cost_is_accepted() {
        let mut lot = sample_lot();
        lot.items[0].cost = 1.0;

        let provider = InMemoryLotProvider::new(vec![lot]).unwrap();
        let stored = provider.get("LOT-2024-001234").unwrap();
        assert_eq!(stored.items[0].cost, 1.0);
    }
}
