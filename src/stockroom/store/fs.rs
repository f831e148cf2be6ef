use super::{
    parse_products, render_products, BackupStatus, LoadReport, LoadStatus, SaveOutcome, Storage,
};
use crate::error::{InventoryError, Result};
use crate::model::Product;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use uuid::Uuid;

pub struct FileStorage {
    path: PathBuf,
    backup_path: PathBuf,
}

impl FileStorage {
    /// Storage at `path`, with the backup next to it as `<stem>_backup.<ext>`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let backup_path = backup_path_for(&path);
        Self { path, backup_path }
    }

    pub fn with_backup_path(mut self, backup_path: impl Into<PathBuf>) -> Self {
        self.backup_path = backup_path.into();
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn backup_path(&self) -> &Path {
        &self.backup_path
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        Ok(())
    }

    fn backup(&self) -> BackupStatus {
        match fs::copy(&self.path, &self.backup_path) {
            Ok(_) => {
                info!(path = %self.backup_path.display(), "backed up unreadable inventory");
                BackupStatus::Created(self.backup_path.clone())
            }
            Err(e) => {
                warn!(path = %self.backup_path.display(), error = %e, "backup failed");
                BackupStatus::Failed(InventoryError::StorageUnavailable(e))
            }
        }
    }

    fn write_atomic(&self, content: &str) -> Result<()> {
        self.ensure_parent()?;

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        let tmp_path = dir.join(format!(".inventory-{}.tmp", Uuid::new_v4()));

        if let Err(e) = fs::write(&tmp_path, content) {
            let _ = fs::remove_file(&tmp_path);
            return Err(e.into());
        }
        if let Err(e) = fs::rename(&tmp_path, &self.path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(e.into());
        }
        Ok(())
    }
}

impl Storage for FileStorage {
    fn load(&mut self) -> LoadReport {
        let raw = match fs::read(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no inventory file yet");
                return LoadReport::empty(LoadStatus::InitializedEmpty);
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "cannot read inventory");
                return LoadReport::empty(LoadStatus::Unavailable(e.into()));
            }
        };

        match parse_products(&raw) {
            Ok(products) => {
                info!(path = %self.path.display(), count = products.len(), "inventory loaded");
                LoadReport::loaded(products)
            }
            Err(error) => {
                warn!(path = %self.path.display(), error = %error, "inventory file is corrupt");
                let backup = self.backup();
                LoadReport::empty(LoadStatus::Corrupt { error, backup })
            }
        }
    }

    fn save(&mut self, products: &[Product]) -> SaveOutcome {
        let written = render_products(products).and_then(|content| self.write_atomic(&content));
        match written {
            Ok(()) => {
                info!(path = %self.path.display(), count = products.len(), "inventory saved");
                SaveOutcome::Saved {
                    count: products.len(),
                }
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "save failed");
                SaveOutcome::Failed(e)
            }
        }
    }

    fn location(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

/// `dir/inventario.txt` → `dir/inventario_backup.txt`
pub fn backup_path_for(path: &Path) -> PathBuf {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "inventario".to_string());
    let name = match path.extension() {
        Some(ext) => format!("{}_backup.{}", stem, ext.to_string_lossy()),
        None => format!("{}_backup", stem),
    };
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Category;
    use tempfile::TempDir;

    fn sample() -> Vec<Product> {
        vec![
            Product {
                code: "A1".into(),
                name: "MOUSE".into(),
                category: Category::Peripherals,
                price: 5000,
                stock: 10,
            },
            Product {
                code: "A2".into(),
                name: "MOUSE PAD".into(),
                category: Category::Accessories,
                price: 2000,
                stock: 0,
            },
        ]
    }

    #[test]
    fn backup_path_is_a_sibling() {
        assert_eq!(
            backup_path_for(Path::new("/data/inventario.txt")),
            PathBuf::from("/data/inventario_backup.txt")
        );
        assert_eq!(
            backup_path_for(Path::new("stock")),
            PathBuf::from("stock_backup")
        );
    }

    #[test]
    fn missing_file_starts_empty() {
        let temp = TempDir::new().unwrap();
        let mut storage = FileStorage::new(temp.path().join("inventario.txt"));
        let report = storage.load();

        assert!(report.products.is_empty());
        assert!(matches!(report.status, LoadStatus::InitializedEmpty));
    }

    #[test]
    fn save_creates_parent_dirs_and_leaves_no_tmp_files() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("inventario");
        let mut storage = FileStorage::new(dir.join("inventario.txt"));

        assert!(storage.save(&sample()).is_saved());

        let names: Vec<String> = fs::read_dir(&dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["inventario.txt".to_string()]);
    }

    #[test]
    fn save_then_load_roundtrip() {
        let temp = TempDir::new().unwrap();
        let mut storage = FileStorage::new(temp.path().join("inventario.txt"));
        storage.save(&sample());

        let report = storage.load();
        assert!(matches!(report.status, LoadStatus::Loaded));
        assert_eq!(report.products, sample());
    }

    #[test]
    fn save_replaces_previous_content() {
        let temp = TempDir::new().unwrap();
        let mut storage = FileStorage::new(temp.path().join("inventario.txt"));
        storage.save(&sample());
        storage.save(&sample()[..1]);

        assert_eq!(storage.load().products.len(), 1);
    }

    #[test]
    fn corrupt_file_is_backed_up() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("inventario.txt");
        fs::write(&path, "[{\"sku\": \"A1\",").unwrap();

        let mut storage = FileStorage::new(&path);
        let report = storage.load();

        assert!(report.products.is_empty());
        match report.status {
            LoadStatus::Corrupt {
                error: InventoryError::StorageCorrupt(_),
                backup: BackupStatus::Created(backup),
            } => {
                assert_eq!(backup, temp.path().join("inventario_backup.txt"));
                assert_eq!(fs::read_to_string(backup).unwrap(), "[{\"sku\": \"A1\",");
            }
            other => panic!("unexpected status: {:?}", other),
        }
    }

    #[test]
    fn failed_backup_still_returns_empty() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("inventario.txt");
        fs::write(&path, "garbage").unwrap();

        let mut storage = FileStorage::new(&path)
            .with_backup_path(temp.path().join("missing-dir").join("backup.txt"));
        let report = storage.load();

        assert!(report.products.is_empty());
        assert!(matches!(
            report.status,
            LoadStatus::Corrupt {
                backup: BackupStatus::Failed(_),
                ..
            }
        ));
    }

    #[test]
    fn save_failure_is_reported_not_raised() {
        let temp = TempDir::new().unwrap();
        // A directory where the file should be makes the final rename fail.
        let path = temp.path().join("inventario.txt");
        fs::create_dir_all(path.join("occupied")).unwrap();

        let mut storage = FileStorage::new(&path);
        let outcome = storage.save(&sample());

        assert!(matches!(outcome, SaveOutcome::Failed(_)));
        let leftovers = fs::read_dir(temp.path())
            .unwrap()
            .filter(|e| {
                e.as_ref()
                    .unwrap()
                    .file_name()
                    .to_string_lossy()
                    .ends_with(".tmp")
            })
            .count();
        assert_eq!(leftovers, 0);
    }

    #[test]
    fn location_is_the_file_name() {
        let storage = FileStorage::new("/tmp/x/inventario.txt");
        assert_eq!(storage.location(), "inventario.txt");
    }
}
