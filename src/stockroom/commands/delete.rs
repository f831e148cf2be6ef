use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::inventory::Inventory;
use crate::search::Confirmer;

pub const DELETE_QUESTION: &str = "¿Está seguro que desea eliminar este producto?";

/// Removes the product with `code` once `confirmer` agrees.
///
/// Declining is not an error: nothing changes and the result says so.
pub fn run<C: Confirmer + ?Sized>(
    inventory: &mut Inventory,
    code: &str,
    confirmer: &mut C,
) -> Result<CmdResult> {
    if !confirmer.confirm(DELETE_QUESTION)? {
        return Ok(CmdResult::default().with_message(CmdMessage::warning(
            "⚠ Operación cancelada. El producto no fue eliminado.",
        )));
    }

    let removed = inventory.delete(code)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "✓ Producto '{}' eliminado exitosamente.",
        removed.name
    )));
    Ok(result.with_affected_products(vec![removed]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InventoryError;
    use crate::inventory::tests::mouse_and_pad;

    struct Always(bool);

    impl Confirmer for Always {
        fn confirm(&mut self, _question: &str) -> Result<bool> {
            Ok(self.0)
        }
    }

    #[test]
    fn deletes_when_confirmed() {
        let mut inventory = mouse_and_pad();
        let result = run(&mut inventory, "A1", &mut Always(true)).unwrap();

        assert_eq!(result.affected_products[0].code, "A1");
        assert!(!inventory.contains_code("A1"));
        assert!(result.messages[0].content.contains("'MOUSE'"));
    }

    #[test]
    fn declining_is_a_no_op() {
        let mut inventory = mouse_and_pad();
        let result = run(&mut inventory, "A1", &mut Always(false)).unwrap();

        assert!(result.affected_products.is_empty());
        assert_eq!(inventory.len(), 2);
    }

    #[test]
    fn stale_code_is_not_found() {
        let mut inventory = mouse_and_pad();
        run(&mut inventory, "A1", &mut Always(true)).unwrap();

        assert!(matches!(
            run(&mut inventory, "A1", &mut Always(true)),
            Err(InventoryError::NotFound(_))
        ));
    }
}
