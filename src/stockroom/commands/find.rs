use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::inventory::Inventory;
use crate::search::{lookup, Lookup, Selector};

/// Resolves `query` to one product for an update or delete.
///
/// On success `selected` holds the product. Every other outcome (empty
/// inventory, blank query, no match, cancelled choice) leaves it `None` and
/// explains why in the messages. `verb` names the action for those messages
/// ("actualizar", "eliminar").
pub fn run<S: Selector + ?Sized>(
    inventory: &Inventory,
    query: &str,
    verb: &str,
    selector: &mut S,
) -> Result<CmdResult> {
    if inventory.is_empty() {
        return Ok(CmdResult::default().with_message(CmdMessage::warning(format!(
            "⚠ El inventario está vacío. No hay productos para {}.",
            verb
        ))));
    }

    let query = query.trim();
    if query.is_empty() {
        return Ok(CmdResult::default().with_message(CmdMessage::error(
            "✗ Error: Debe ingresar un término de búsqueda.",
        )));
    }

    let result = match lookup(query, inventory, selector)? {
        Lookup::Found(product) => CmdResult::default().with_selected(product),
        Lookup::NoMatch => CmdResult::default().with_message(CmdMessage::warning(format!(
            "⚠ No se encontraron productos con '{}'.",
            query
        ))),
        Lookup::Cancelled => {
            CmdResult::default().with_message(CmdMessage::warning("⚠ Operación cancelada."))
        }
    };
    Ok(result)
}
