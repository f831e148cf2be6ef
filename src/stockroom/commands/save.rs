use crate::commands::{CmdMessage, CmdResult};
use crate::inventory::Inventory;
use crate::store::{SaveOutcome, Storage};

/// Writes the whole inventory. Failures become an error message.
pub fn run<S: Storage>(inventory: &Inventory, storage: &mut S) -> CmdResult {
    let message = match storage.save(inventory.products()) {
        SaveOutcome::Saved { count } => CmdMessage::success(format!(
            "✓ Inventario guardado exitosamente en {} ({} productos)",
            storage.location(),
            count
        )),
        SaveOutcome::Failed(e) => {
            CmdMessage::error(format!("✗ Error al guardar el inventario: {}", e))
        }
    };
    CmdResult::default().with_message(message)
}
