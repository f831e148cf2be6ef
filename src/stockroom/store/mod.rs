//! # Storage Layer
//!
//! The [`Storage`] trait is the persistence adapter for the inventory. It
//! reads and writes the whole product list at once.
//!
//! ## Implementations
//!
//! - [`fs::FileStorage`]: production storage in a single JSON file, with a
//!   sibling backup file used when the primary cannot be parsed.
//! - [`memory::MemoryStorage`]: in-memory storage for testing, with knobs to
//!   simulate corrupt content and failing writes.
//!
//! ## Failure Model
//!
//! Neither `load` nor `save` returns `Err`. Every failure is folded into
//! [`LoadReport`] or [`SaveOutcome`] so callers report it and carry on:
//!
//! - A missing file is not a failure: the inventory starts empty.
//! - Content that does not parse is copied to the backup location, then
//!   discarded. A failed backup is reported next to the corruption, and an
//!   empty inventory is still returned.
//! - A save either replaces the previous file completely or leaves it alone.
//!
//! ## Storage Format
//!
//! ```text
//! [
//!   {
//!     "sku": "A1",
//!     "nombre": "MOUSE",
//!     "categoria": "PERIFÉRICOS",
//!     "precio": 5000,
//!     "stock": 10
//!   }
//! ]
//! ```
//!
//! Two-space indentation, UTF-8, non-ASCII written as is.

use crate::error::{InventoryError, Result};
use crate::model::Product;
use std::path::PathBuf;

pub mod fs;
pub mod memory;

#[derive(Debug)]
pub enum BackupStatus {
    Created(PathBuf),
    Failed(InventoryError),
}

#[derive(Debug)]
pub enum LoadStatus {
    Loaded,
    /// Nothing stored yet.
    InitializedEmpty,
    /// Stored content did not parse and was discarded.
    Corrupt {
        error: InventoryError,
        backup: BackupStatus,
    },
    /// Stored content exists but could not be read.
    Unavailable(InventoryError),
}

#[derive(Debug)]
pub struct LoadReport {
    pub products: Vec<Product>,
    pub status: LoadStatus,
}

impl LoadReport {
    pub fn loaded(products: Vec<Product>) -> Self {
        Self {
            products,
            status: LoadStatus::Loaded,
        }
    }

    pub fn empty(status: LoadStatus) -> Self {
        Self {
            products: Vec::new(),
            status,
        }
    }
}

#[derive(Debug)]
pub enum SaveOutcome {
    Saved { count: usize },
    Failed(InventoryError),
}

impl SaveOutcome {
    pub fn is_saved(&self) -> bool {
        matches!(self, SaveOutcome::Saved { .. })
    }
}

/// Abstract interface for inventory persistence.
pub trait Storage {
    /// Read the stored collection. Never fails; see [`LoadStatus`].
    fn load(&mut self) -> LoadReport;

    /// Replace the stored collection. Never fails; see [`SaveOutcome`].
    fn save(&mut self, products: &[Product]) -> SaveOutcome;

    /// Human readable name of the primary location (file name, etc.)
    fn location(&self) -> String;
}

pub(crate) fn parse_products(raw: &[u8]) -> Result<Vec<Product>> {
    serde_json::from_slice(raw).map_err(InventoryError::StorageCorrupt)
}

pub(crate) fn render_products(products: &[Product]) -> Result<String> {
    serde_json::to_string_pretty(products).map_err(InventoryError::StorageCorrupt)
}
