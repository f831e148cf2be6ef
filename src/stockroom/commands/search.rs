use crate::commands::{CmdMessage, CmdResult};
use crate::inventory::Inventory;
use crate::search::search;

/// Non-interactive search: every match, in collection order.
pub fn run(inventory: &Inventory, query: &str) -> CmdResult {
    let query = query.trim();
    if query.is_empty() {
        return CmdResult::default().with_message(CmdMessage::error(
            "✗ Error: Debe ingresar un término de búsqueda.",
        ));
    }

    let matches: Vec<_> = search(query, inventory.products())
        .into_iter()
        .cloned()
        .collect();
    if matches.is_empty() {
        return CmdResult::default().with_message(CmdMessage::warning(format!(
            "⚠ No se encontraron productos con '{}'.",
            query
        )));
    }
    let found = CmdMessage::info(format!(
        "{} producto(s) encontrado(s) con '{}'.",
        matches.len(),
        query
    ));
    CmdResult::default()
        .with_message(found)
        .with_listed_products(matches)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::inventory::tests::mouse_and_pad;

    #[test]
    fn keeps_collection_order() {
        let result = run(&mouse_and_pad(), " mouse ");
        let codes: Vec<&str> = result
            .listed_products
            .iter()
            .map(|p| p.code.as_str())
            .collect();
        assert_eq!(codes, vec!["A1", "A2"]);
        assert_eq!(result.messages[0].level, MessageLevel::Info);
        assert!(result.messages[0].content.starts_with("2 producto(s)"));
    }

    #[test]
    fn blank_query_is_rejected() {
        let result = run(&mouse_and_pad(), "  ");
        assert!(result.listed_products.is_empty());
        assert!(result.messages[0].content.contains("término de búsqueda"));
    }
}
