use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::inventory::Inventory;
use crate::model::NewProduct;

pub fn run(inventory: &mut Inventory, draft: NewProduct) -> Result<CmdResult> {
    let product = inventory.create(draft)?.clone();

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success("✓ Producto registrado exitosamente:"));
    Ok(result.with_affected_products(vec![product]))
}
