use crate::commands::{CmdMessage, CmdResult};
use crate::inventory::Inventory;

/// Products in display order together with the inventory aggregates.
pub fn run(inventory: &Inventory) -> CmdResult {
    if inventory.is_empty() {
        return CmdResult::default().with_message(CmdMessage::warning(
            "⚠ El inventario está vacío. No hay productos para mostrar.",
        ));
    }

    let listed = inventory.list().cloned().collect();
    CmdResult::default()
        .with_listed_products(listed)
        .with_summary(inventory.summary())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::tests::mouse_and_pad;

    #[test]
    fn lists_sorted_with_summary() {
        let result = run(&mouse_and_pad());

        let codes: Vec<&str> = result
            .listed_products
            .iter()
            .map(|p| p.code.as_str())
            .collect();
        assert_eq!(codes, vec!["A2", "A1"]);

        let summary = result.summary.unwrap();
        assert_eq!(summary.total_value, 50_000);
        assert_eq!(summary.out_of_stock, 1);
    }

    #[test]
    fn empty_inventory_warns() {
        let result = run(&Inventory::new());
        assert!(result.listed_products.is_empty());
        assert!(result.summary.is_none());
        assert!(result.messages[0].content.contains("vacío"));
    }
}
