use crate::commands::{CmdMessage, CmdResult};
use crate::error::InventoryError;
use crate::inventory::{Inventory, Limits};
use crate::store::{BackupStatus, LoadStatus, Storage};

/// Loads the inventory at startup. Always yields an inventory, empty if the
/// stored one is missing, unreadable or corrupt.
pub fn run<S: Storage>(storage: &mut S, limits: Limits) -> (Inventory, CmdResult) {
    let report = storage.load();
    let location = storage.location();
    let mut result = CmdResult::default();

    match report.status {
        LoadStatus::Loaded => {
            let (inventory, skipped) = Inventory::from_products(report.products, limits);
            result.add_message(CmdMessage::success(format!(
                "✓ Inventario cargado exitosamente: {} productos.",
                inventory.len()
            )));
            for record in skipped {
                let text = match record.error {
                    InventoryError::DuplicateCode(code) => format!(
                        "⚠ SKU duplicado '{}' en {}: se conserva el primero.",
                        code, location
                    ),
                    error => format!(
                        "⚠ Registro '{}' omitido en {}: {}.",
                        record.code, location, error
                    ),
                };
                result.add_message(CmdMessage::warning(text));
            }
            return (inventory, result);
        }
        LoadStatus::InitializedEmpty => {
            result.add_message(CmdMessage::warning(
                "⚠ Archivo no encontrado. Iniciando con inventario vacío.",
            ));
        }
        LoadStatus::Corrupt { backup, .. } => {
            result.add_message(CmdMessage::error(format!(
                "✗ Error: Archivo {} corrupto.",
                location
            )));
            match backup {
                BackupStatus::Created(path) => {
                    let name = path
                        .file_name()
                        .map(|n| n.to_string_lossy().into_owned())
                        .unwrap_or_else(|| path.display().to_string());
                    result.add_message(CmdMessage::warning(format!(
                        "Respaldo creado en {}",
                        name
                    )));
                }
                BackupStatus::Failed(e) => {
                    result.add_message(CmdMessage::error(format!(
                        "✗ No se pudo crear el respaldo: {}",
                        e
                    )));
                }
            }
            result.add_message(CmdMessage::warning("⚠ Iniciando con inventario vacío."));
        }
        LoadStatus::Unavailable(e) => {
            result.add_message(CmdMessage::error(format!(
                "✗ No se pudo leer {}: {}",
                location, e
            )));
            result.add_message(CmdMessage::warning("⚠ Iniciando con inventario vacío."));
        }
    }

    (Inventory::new().with_limits(limits), result)
}
