use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The fixed set of categories a product can belong to.
///
/// Declaration order is the order offered to the user when picking one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "LAPTOPS")]
    Laptops,
    #[serde(rename = "PERIFÉRICOS")]
    Peripherals,
    #[serde(rename = "ACCESORIOS")]
    Accessories,
}

impl Category {
    pub const ALL: [Category; 3] = [
        Category::Laptops,
        Category::Peripherals,
        Category::Accessories,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Laptops => "LAPTOPS",
            Category::Peripherals => "PERIFÉRICOS",
            Category::Accessories => "ACCESORIOS",
        }
    }

    /// Looks up a category by its 1-based position in [`Category::ALL`].
    pub fn from_position(position: usize) -> Option<Category> {
        position
            .checked_sub(1)
            .and_then(|i| Self::ALL.get(i))
            .copied()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_uppercase();
        Self::ALL
            .iter()
            .find(|c| c.as_str() == wanted)
            .copied()
            .ok_or_else(|| format!("Categoría desconocida: {}", s))
    }
}

/// A stored product. Field names on disk follow the inventory file format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "sku")]
    pub code: String,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "categoria")]
    pub category: Category,
    #[serde(rename = "precio")]
    pub price: u64,
    pub stock: u64,
}

impl Product {
    /// Value of the units on hand (`price * stock`).
    pub fn stock_value(&self) -> u64 {
        self.price.saturating_mul(self.stock)
    }

    pub fn is_out_of_stock(&self) -> bool {
        self.stock == 0
    }
}

/// Raw, not yet validated input for a new product.
///
/// Numbers are signed so that out-of-range input can be reported instead of
/// being rejected by the type system before it reaches the store.
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub code: String,
    pub name: String,
    pub category: Category,
    pub price: i64,
    pub stock: i64,
}

impl NewProduct {
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        category: Category,
        price: i64,
        stock: i64,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            category,
            price,
            stock,
        }
    }
}

/// Trims and uppercases free text the way codes and names are stored.
pub fn normalize(text: &str) -> String {
    text.trim().to_uppercase()
}
