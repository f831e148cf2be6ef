use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::inventory::Inventory;

pub fn run(inventory: &mut Inventory, code: &str, new_stock: i64) -> Result<CmdResult> {
    let product = inventory.update_stock(code, new_stock)?.clone();

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "✓ Stock actualizado: {} - Nuevo stock: {} unidades",
        product.name, product.stock
    )));
    Ok(result.with_affected_products(vec![product]))
}
