use crate::api::{CmdMessage, CmdResult, InventoryApi};
use crate::config::{StockroomConfig, CONFIG_FILENAME};
use crate::error::{InventoryError, Result};
use crate::store::fs::{backup_path_for, FileStorage};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Environment variable that overrides the data directory.
pub const HOME_ENV: &str = "STOCKROOM_HOME";

#[derive(Debug, Default, Clone)]
pub struct InitOptions {
    /// Explicit data directory (highest priority).
    pub data_dir: Option<PathBuf>,
    /// Explicit inventory file; its backup becomes a sibling of it.
    pub file: Option<PathBuf>,
}

pub struct StockroomContext {
    pub api: InventoryApi<FileStorage>,
    pub config: StockroomConfig,
    pub data_dir: PathBuf,
    /// Messages produced while loading config and inventory.
    pub startup: CmdResult,
}

/// Picks the data directory: explicit path, then `STOCKROOM_HOME`, then the
/// platform data directory.
pub fn resolve_data_dir(explicit: Option<&Path>, env_home: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = explicit {
        return Ok(dir.to_path_buf());
    }
    if let Some(dir) = env_home.filter(|d| !d.as_os_str().is_empty()) {
        return Ok(dir);
    }
    ProjectDirs::from("com", "stockroom", "stockroom")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| InventoryError::Config("Could not determine data dir".to_string()))
}

pub fn initialize(options: &InitOptions) -> Result<StockroomContext> {
    let env_home = std::env::var_os(HOME_ENV).map(PathBuf::from);
    let data_dir = resolve_data_dir(options.data_dir.as_deref(), env_home)?;
    debug!(dir = %data_dir.display(), "using data dir");

    let mut startup = CmdResult::default();
    let config = match StockroomConfig::load(&data_dir) {
        Ok(config) => {
            write_default_config(&data_dir, &config);
            config
        }
        Err(e) => {
            warn!(error = %e, "falling back to default config");
            startup.add_message(CmdMessage::warning(format!(
                "⚠ Configuración ignorada: {}",
                e
            )));
            StockroomConfig::default()
        }
    };

    let storage = storage_for(&data_dir, &config, options.file.as_deref());
    let (api, loaded) = InventoryApi::open(storage, config.limits());
    startup.messages.extend(loaded.messages);

    Ok(StockroomContext {
        api,
        config,
        data_dir,
        startup,
    })
}

/// First run: leave a `config.json` with the defaults for the user to edit.
fn write_default_config(data_dir: &Path, config: &StockroomConfig) {
    if data_dir.join(CONFIG_FILENAME).exists() {
        return;
    }
    match config.save(data_dir) {
        Ok(()) => debug!(dir = %data_dir.display(), "wrote default config"),
        Err(e) => warn!(error = %e, "could not write default config"),
    }
}

fn storage_for(data_dir: &Path, config: &StockroomConfig, file: Option<&Path>) -> FileStorage {
    match file {
        Some(path) => FileStorage::new(path).with_backup_path(backup_path_for(path)),
        None => FileStorage::new(data_dir.join(&config.inventory_file))
            .with_backup_path(data_dir.join(&config.backup_file)),
    }
}
