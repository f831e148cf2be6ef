use crate::error::{InventoryError, Result};
use crate::inventory::{Limits, DEFAULT_MAX_PRICE, DEFAULT_MAX_STOCK};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_INVENTORY_FILE: &str = "inventario.txt";
const DEFAULT_BACKUP_FILE: &str = "inventario_backup.txt";

/// Configuration for stockroom, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StockroomConfig {
    /// Inventory file name, relative to the data directory
    #[serde(default = "default_inventory_file")]
    pub inventory_file: String,

    /// File the inventory is copied to when it cannot be parsed
    #[serde(default = "default_backup_file")]
    pub backup_file: String,

    #[serde(default = "default_max_price")]
    pub max_price: u64,

    #[serde(default = "default_max_stock")]
    pub max_stock: u64,
}

fn default_inventory_file() -> String {
    DEFAULT_INVENTORY_FILE.to_string()
}

fn default_backup_file() -> String {
    DEFAULT_BACKUP_FILE.to_string()
}

fn default_max_price() -> u64 {
    DEFAULT_MAX_PRICE
}

fn default_max_stock() -> u64 {
    DEFAULT_MAX_STOCK
}

impl Default for StockroomConfig {
    fn default() -> Self {
        Self {
            inventory_file: default_inventory_file(),
            backup_file: default_backup_file(),
            max_price: DEFAULT_MAX_PRICE,
            max_stock: DEFAULT_MAX_STOCK,
        }
    }
}

impl StockroomConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: StockroomConfig = serde_json::from_str(&content).map_err(|e| {
            InventoryError::Config(format!("{}: {}", config_path.display(), e))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_path, content)?;
        Ok(())
    }

    pub fn limits(&self) -> Limits {
        Limits {
            max_price: self.max_price,
            max_stock: self.max_stock,
        }
    }

    fn validate(&self) -> Result<()> {
        if self.inventory_file.trim().is_empty() {
            return Err(InventoryError::Config(
                "inventory_file cannot be empty".into(),
            ));
        }
        if self.backup_file == self.inventory_file {
            return Err(InventoryError::Config(
                "backup_file must differ from inventory_file".into(),
            ));
        }
        if self.max_price == 0 {
            return Err(InventoryError::Config("max_price must be positive".into()));
        }
        Ok(())
    }
}
