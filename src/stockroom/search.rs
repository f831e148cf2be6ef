//! # Search & Disambiguation
//!
//! A query is uppercased, then matched against every product: an exact
//! match on the code, or a substring of the name. Matches keep collection
//! (insertion) order.
//!
//! When more than one product matches, a [`Selector`] picks one or cancels.
//! The whole lookup resolves to a [`Lookup`]:
//!
//! ```text
//! query ──search──┬── 0 matches ──────────────────────────► NoMatch
//!                 ├── 1 match ────────────────────────────► Found
//!                 └── n matches ──select──┬── Chosen(i) ──► Found
//!                                         └── Cancelled ──► Cancelled
//! ```
//!
//! `NoMatch` and `Cancelled` are ordinary outcomes. Callers that update or
//! delete treat them as a no-op.

use crate::error::Result;
use crate::inventory::Inventory;
use crate::model::Product;

/// Returns every product whose code equals `query` or whose name contains it.
///
/// An empty query yields nothing; callers should reject it before searching.
pub fn search<'a>(query: &str, products: &'a [Product]) -> Vec<&'a Product> {
    let query = query.to_uppercase();
    if query.is_empty() {
        return Vec::new();
    }
    products
        .iter()
        .filter(|p| p.code == query || p.name.contains(&query))
        .collect()
}

/// What a [`Selector`] decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// 0-based index into the candidates.
    Chosen(usize),
    Cancelled,
}

/// Picks one product out of several candidates.
pub trait Selector {
    fn select(&mut self, title: &str, candidates: &[&Product]) -> Result<Selection>;
}

/// Asks whether to go ahead with an action.
pub trait Confirmer {
    fn confirm(&mut self, question: &str) -> Result<bool>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    NoMatch,
    Found(Product),
    Cancelled,
}

pub const MULTI_MATCH_TITLE: &str = "Se encontraron varios productos";

/// Narrows `matches` down to a single product, asking `selector` if needed.
///
/// An out-of-range choice from the selector is treated as a cancel.
pub fn disambiguate<S: Selector + ?Sized>(
    matches: &[&Product],
    selector: &mut S,
) -> Result<Lookup> {
    match matches {
        [] => Ok(Lookup::NoMatch),
        [only] => Ok(Lookup::Found((*only).clone())),
        many => match selector.select(MULTI_MATCH_TITLE, many)? {
            Selection::Chosen(i) => Ok(many
                .get(i)
                .map(|p| Lookup::Found((*p).clone()))
                .unwrap_or(Lookup::Cancelled)),
            Selection::Cancelled => Ok(Lookup::Cancelled),
        },
    }
}

/// Runs a search over the inventory and resolves it to one product.
pub fn lookup<S: Selector + ?Sized>(
    query: &str,
    inventory: &Inventory,
    selector: &mut S,
) -> Result<Lookup> {
    let matches = search(query, inventory.products());
    disambiguate(&matches, selector)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::error::InventoryError;
    use crate::inventory::tests::mouse_and_pad;

    /// Selector that replays scripted answers and records the candidates.
    pub(crate) struct ScriptedSelector {
        answers: Vec<Selection>,
        pub seen: Vec<Vec<String>>,
    }

    impl ScriptedSelector {
        pub(crate) fn new(answers: Vec<Selection>) -> Self {
            Self {
                answers,
                seen: Vec::new(),
            }
        }
    }

    impl Selector for ScriptedSelector {
        fn select(&mut self, _title: &str, candidates: &[&Product]) -> Result<Selection> {
            self.seen
                .push(candidates.iter().map(|p| p.code.clone()).collect());
            if self.answers.is_empty() {
                return Err(InventoryError::Interrupted);
            }
            Ok(self.answers.remove(0))
        }
    }

    #[test]
    fn matches_exact_code_regardless_of_case() {
        let inventory = mouse_and_pad();
        let found = search("a1", inventory.products());
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].code, "A1");
    }

    #[test]
    fn code_match_is_exact_not_partial() {
        let inventory = mouse_and_pad();
        assert!(search("A", inventory.products()).is_empty());
    }

    #[test]
    fn matches_name_substring_in_collection_order() {
        let inventory = mouse_and_pad();
        let found: Vec<&str> = search("mouse", inventory.products())
            .iter()
            .map(|p| p.code.as_str())
            .collect();
        assert_eq!(found, vec!["A1", "A2"]);

        let found = search("pad", inventory.products());
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].code, "A2");
    }

    #[test]
    fn empty_query_matches_nothing() {
        let inventory = mouse_and_pad();
        assert!(search("", inventory.products()).is_empty());
    }

    #[test]
    fn single_match_skips_selector() {
        let inventory = mouse_and_pad();
        let mut selector = ScriptedSelector::new(vec![]);
        let result = lookup("pad", &inventory, &mut selector).unwrap();

        assert!(matches!(result, Lookup::Found(p) if p.code == "A2"));
        assert!(selector.seen.is_empty());
    }

    #[test]
    fn no_match_is_an_outcome() {
        let inventory = mouse_and_pad();
        let mut selector = ScriptedSelector::new(vec![]);
        assert_eq!(
            lookup("teclado", &inventory, &mut selector).unwrap(),
            Lookup::NoMatch
        );
    }

    #[test]
    fn multi_match_uses_selector_choice() {
        let inventory = mouse_and_pad();
        let mut selector = ScriptedSelector::new(vec![Selection::Chosen(1)]);
        let result = lookup("MOUSE", &inventory, &mut selector).unwrap();

        assert!(matches!(result, Lookup::Found(p) if p.code == "A2"));
        assert_eq!(selector.seen, vec![vec!["A1".to_string(), "A2".to_string()]]);
    }

    #[test]
    fn multi_match_can_be_cancelled() {
        let inventory = mouse_and_pad();
        let mut selector = ScriptedSelector::new(vec![Selection::Cancelled]);
        assert_eq!(
            lookup("mouse", &inventory, &mut selector).unwrap(),
            Lookup::Cancelled
        );
    }

    #[test]
    fn out_of_range_choice_cancels() {
        let inventory = mouse_and_pad();
        let mut selector = ScriptedSelector::new(vec![Selection::Chosen(9)]);
        assert_eq!(
            lookup("mouse", &inventory, &mut selector).unwrap(),
            Lookup::Cancelled
        );
    }

    #[test]
    fn deleted_product_no_longer_found_by_code() {
        let mut inventory = mouse_and_pad();
        inventory.delete("A1").unwrap();
        assert!(search("A1", inventory.products()).is_empty());
    }
}
