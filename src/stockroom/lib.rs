//! # Stockroom Architecture
//!
//! Stockroom is a small inventory manager for a single shop: a list of
//! products kept in memory, saved to a JSON file when asked, and edited from
//! a numbered terminal menu.
//!
//! Like any UI-agnostic library, the core never touches the terminal. The
//! binary is one client of it.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Menu loop, prompts, tables, colors, exit codes           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the Inventory and its Storage                       │
//! │  - Dispatches to commands, returns CmdResult                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One operation per module: load, create, list, find,      │
//! │    update, delete, save, search                             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (inventory.rs, search.rs, prompt.rs, store/)          │
//! │  - Product store with its uniqueness index                  │
//! │  - Search and disambiguation                                │
//! │  - Re-prompting input validation                            │
//! │  - Storage trait: FileStorage, MemoryStorage                │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Errors
//!
//! Store errors ([`error::InventoryError::DuplicateCode`], `InvalidField`,
//! `NotFound`) go back to the caller, which abandons that one operation.
//! Validation problems never leave [`prompt`]: the user is asked again.
//! Storage problems are folded into outcomes by [`store`], so neither a
//! corrupt file nor a failed save stops the program.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Business logic for each operation
//! - [`inventory`]: Product store and aggregates
//! - [`search`]: Query matching and the selection/confirmation traits
//! - [`prompt`]: Re-prompting input helpers
//! - [`store`]: Persistence adapter and implementations
//! - [`model`]: `Product`, `Category`, `NewProduct`
//! - [`config`]: `config.json` handling
//! - [`init`]: Data directory discovery and context wiring
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod init;
pub mod inventory;
pub mod model;
pub mod prompt;
pub mod search;
pub mod store;
