use super::{
    parse_products, render_products, BackupStatus, LoadReport, LoadStatus, SaveOutcome, Storage,
};
use crate::error::InventoryError;
use crate::model::Product;
use std::io;
use std::path::PathBuf;

/// In-memory storage for testing and development.
///
/// Keeps the serialized text rather than the products so tests can plant
/// arbitrary (including corrupt) content.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    content: Option<String>,
    backup: Option<String>,
    simulate_write_error: bool,
    simulate_backup_error: bool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_content(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            ..Self::default()
        }
    }

    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    pub fn backup(&self) -> Option<&str> {
        self.backup.as_deref()
    }

    pub fn set_simulate_write_error(&mut self, simulate: bool) {
        self.simulate_write_error = simulate;
    }

    pub fn set_simulate_backup_error(&mut self, simulate: bool) {
        self.simulate_backup_error = simulate;
    }
}

impl Storage for MemoryStorage {
    fn load(&mut self) -> LoadReport {
        let Some(raw) = self.content.clone() else {
            return LoadReport::empty(LoadStatus::InitializedEmpty);
        };

        match parse_products(raw.as_bytes()) {
            Ok(products) => LoadReport::loaded(products),
            Err(error) => {
                let backup = if self.simulate_backup_error {
                    BackupStatus::Failed(InventoryError::StorageUnavailable(io::Error::new(
                        io::ErrorKind::PermissionDenied,
                        "simulated backup error",
                    )))
                } else {
                    self.backup = Some(raw);
                    BackupStatus::Created(PathBuf::from("memory://backup"))
                };
                LoadReport::empty(LoadStatus::Corrupt { error, backup })
            }
        }
    }

    fn save(&mut self, products: &[Product]) -> SaveOutcome {
        if self.simulate_write_error {
            return SaveOutcome::Failed(InventoryError::StorageUnavailable(io::Error::other(
                "simulated write error",
            )));
        }
        match render_products(products) {
            Ok(text) => {
                self.content = Some(text);
                SaveOutcome::Saved {
                    count: products.len(),
                }
            }
            Err(e) => SaveOutcome::Failed(e),
        }
    }

    fn location(&self) -> String {
        "memoria".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corrupt_content_moves_to_backup() {
        let mut storage = MemoryStorage::with_content("{oops");
        let report = storage.load();

        assert!(report.products.is_empty());
        assert!(matches!(report.status, LoadStatus::Corrupt { .. }));
        assert_eq!(storage.backup(), Some("{oops"));
    }

    #[test]
    fn write_error_keeps_previous_content() {
        let mut storage = MemoryStorage::with_content("[]");
        storage.set_simulate_write_error(true);

        assert!(!storage.save(&[]).is_saved());
        assert_eq!(storage.content(), Some("[]"));
    }
}
