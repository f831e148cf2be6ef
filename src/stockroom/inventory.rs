//! # Product Store
//!
//! [`Inventory`] owns the authoritative, in-memory product collection.
//!
//! Products live in a `Vec` in insertion order, next to a `HashSet` of the
//! codes in use. Both are private and only change together inside
//! [`Inventory::create`] and [`Inventory::delete`], so no caller can
//! desynchronize them.
//!
//! Products are referenced by their normalized code. An operation on a code
//! that is no longer present (a stale reference) fails with
//! [`InventoryError::NotFound`].
//!
//! Display order (category, then name) is computed on demand by
//! [`Inventory::list`] and never stored.

use crate::error::{InventoryError, Result};
use crate::model::{normalize, NewProduct, Product};
use std::collections::HashSet;
use tracing::{debug, warn};

pub const DEFAULT_MAX_PRICE: u64 = 1_000_000_000;
pub const DEFAULT_MAX_STOCK: u64 = 1_000_000;

/// Upper bounds accepted for numeric fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    pub max_price: u64,
    pub max_stock: u64,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_price: DEFAULT_MAX_PRICE,
            max_stock: DEFAULT_MAX_STOCK,
        }
    }
}

/// Aggregates over the whole collection, consumed by renderers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub product_count: usize,
    pub total_value: u64,
    pub out_of_stock: usize,
}

/// A stored record that [`Inventory::from_products`] refused.
#[derive(Debug)]
pub struct SkippedRecord {
    pub code: String,
    pub error: InventoryError,
}

#[derive(Debug, Default)]
pub struct Inventory {
    products: Vec<Product>,
    codes: HashSet<String>,
    limits: Limits,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    /// Builds an inventory from loaded records, keeping insertion order.
    ///
    /// Code and name are normalized, then each record goes through the same
    /// checks as [`Inventory::create`]. Records that fail them, including a
    /// code already seen, are dropped and returned so the caller can report
    /// them.
    pub fn from_products(products: Vec<Product>, limits: Limits) -> (Self, Vec<SkippedRecord>) {
        let mut inventory = Self::new().with_limits(limits);
        let mut skipped = Vec::new();

        for mut product in products {
            product.code = normalize(&product.code);
            product.name = normalize(&product.name);
            if let Err(error) = inventory.admit(&product) {
                warn!(code = %product.code, error = %error, "skipping stored record");
                skipped.push(SkippedRecord {
                    code: product.code,
                    error,
                });
                continue;
            }
            inventory.codes.insert(product.code.clone());
            inventory.products.push(product);
        }

        (inventory, skipped)
    }

    pub fn limits(&self) -> Limits {
        self.limits
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Products in insertion order, as persisted.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn contains_code(&self, code: &str) -> bool {
        self.codes.contains(&normalize(code))
    }

    pub fn get(&self, code: &str) -> Option<&Product> {
        let code = normalize(code);
        self.products.iter().find(|p| p.code == code)
    }

    pub fn create(&mut self, draft: NewProduct) -> Result<&Product> {
        let code = normalize(&draft.code);
        let name = normalize(&draft.name);

        self.check_identity(&code, &name)?;
        let price = self.check_price(draft.price)?;
        let stock = self.check_stock(draft.stock)?;

        debug!(code = %code, "registering product");
        self.codes.insert(code.clone());
        self.products.push(Product {
            code,
            name,
            category: draft.category,
            price,
            stock,
        });

        // Just pushed, so the collection is non-empty.
        Ok(&self.products[self.products.len() - 1])
    }

    pub fn update_stock(&mut self, code: &str, new_stock: i64) -> Result<&Product> {
        let stock = self.check_stock(new_stock)?;
        let position = self.position(code)?;

        let product = &mut self.products[position];
        debug!(code = %product.code, old = product.stock, new = stock, "updating stock");
        product.stock = stock;
        Ok(&self.products[position])
    }

    pub fn delete(&mut self, code: &str) -> Result<Product> {
        let position = self.position(code)?;
        let removed = self.products.remove(position);
        self.codes.remove(&removed.code);
        debug!(code = %removed.code, "deleted product");
        Ok(removed)
    }

    /// Products ordered by category name, then product name.
    ///
    /// The order is recomputed on every call.
    pub fn list(&self) -> impl Iterator<Item = &Product> + '_ {
        let mut sorted: Vec<&Product> = self.products.iter().collect();
        sorted.sort_by(|a, b| {
            a.category
                .as_str()
                .cmp(b.category.as_str())
                .then_with(|| a.name.cmp(&b.name))
        });
        sorted.into_iter()
    }

    pub fn summary(&self) -> Summary {
        self.products.iter().fold(
            Summary {
                product_count: self.products.len(),
                ..Summary::default()
            },
            |mut acc, p| {
                acc.total_value = acc.total_value.saturating_add(p.stock_value());
                if p.is_out_of_stock() {
                    acc.out_of_stock += 1;
                }
                acc
            },
        )
    }

    fn position(&self, code: &str) -> Result<usize> {
        let code = normalize(code);
        if !self.codes.contains(&code) {
            return Err(InventoryError::NotFound(code));
        }
        self.products
            .iter()
            .position(|p| p.code == code)
            .ok_or(InventoryError::NotFound(code))
    }

    fn check_identity(&self, code: &str, name: &str) -> Result<()> {
        if code.is_empty() {
            return Err(InventoryError::invalid("sku", "El SKU no puede estar vacío"));
        }
        if self.codes.contains(code) {
            return Err(InventoryError::DuplicateCode(code.to_string()));
        }
        if name.is_empty() {
            return Err(InventoryError::invalid(
                "nombre",
                "El nombre no puede estar vacío",
            ));
        }
        Ok(())
    }

    /// Checks an already normalized stored record against the invariants.
    fn admit(&self, product: &Product) -> Result<()> {
        self.check_identity(&product.code, &product.name)?;
        self.check_price(i64::try_from(product.price).unwrap_or(i64::MAX))?;
        self.check_stock(i64::try_from(product.stock).unwrap_or(i64::MAX))?;
        Ok(())
    }

    fn check_price(&self, price: i64) -> Result<u64> {
        if price <= 0 {
            return Err(InventoryError::invalid(
                "precio",
                "El valor debe ser mayor a 0",
            ));
        }
        let price = price as u64;
        if price > self.limits.max_price {
            return Err(InventoryError::invalid(
                "precio",
                format!("El valor no puede superar {}", self.limits.max_price),
            ));
        }
        Ok(price)
    }

    fn check_stock(&self, stock: i64) -> Result<u64> {
        if stock < 0 {
            return Err(InventoryError::invalid(
                "stock",
                "El valor debe ser mayor o igual a 0",
            ));
        }
        let stock = stock as u64;
        if stock > self.limits.max_stock {
            return Err(InventoryError::invalid(
                "stock",
                format!("El valor no puede superar {}", self.limits.max_stock),
            ));
        }
        Ok(stock)
    }
}
