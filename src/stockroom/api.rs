//! # API Facade
//!
//! [`InventoryApi`] is the single entry point for inventory operations,
//! whatever the UI. It owns the in-memory [`Inventory`] and the [`Storage`]
//! it was loaded from, and dispatches each call to `commands/*.rs`.
//!
//! It does no business logic and no I/O of its own. Interaction the
//! operations need (choosing between matches, confirming a delete) comes in
//! through the [`Selector`] and [`Confirmer`] collaborators.
//!
//! Mutations stay in memory until [`InventoryApi::save`] is called.
//!
//! Generic over `Storage`:
//! - Production: `InventoryApi<FileStorage>`
//! - Testing: `InventoryApi<MemoryStorage>`

use crate::commands;
use crate::error::Result;
use crate::inventory::{Inventory, Limits};
use crate::model::NewProduct;
use crate::search::{Confirmer, Selector};
use crate::store::Storage;

pub struct InventoryApi<S: Storage> {
    inventory: Inventory,
    storage: S,
}

impl<S: Storage> InventoryApi<S> {
    /// Loads the stored inventory. The returned result carries the load
    /// messages; loading itself never fails.
    pub fn open(mut storage: S, limits: Limits) -> (Self, commands::CmdResult) {
        let (inventory, result) = commands::load::run(&mut storage, limits);
        (Self { inventory, storage }, result)
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn code_in_use(&self, code: &str) -> bool {
        self.inventory.contains_code(code)
    }

    pub fn create_product(&mut self, draft: NewProduct) -> Result<commands::CmdResult> {
        commands::create::run(&mut self.inventory, draft)
    }

    pub fn list_products(&self) -> commands::CmdResult {
        commands::list::run(&self.inventory)
    }

    pub fn search_products(&self, query: &str) -> commands::CmdResult {
        commands::search::run(&self.inventory, query)
    }

    pub fn find_product<Sel: Selector + ?Sized>(
        &self,
        query: &str,
        verb: &str,
        selector: &mut Sel,
    ) -> Result<commands::CmdResult> {
        commands::find::run(&self.inventory, query, verb, selector)
    }

    pub fn update_stock(&mut self, code: &str, new_stock: i64) -> Result<commands::CmdResult> {
        commands::update::run(&mut self.inventory, code, new_stock)
    }

    pub fn delete_product<C: Confirmer + ?Sized>(
        &mut self,
        code: &str,
        confirmer: &mut C,
    ) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.inventory, code, confirmer)
    }

    pub fn save(&mut self) -> commands::CmdResult {
        commands::save::run(&self.inventory, &mut self.storage)
    }
}

pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};
