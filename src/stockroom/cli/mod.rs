//! # CLI Layer
//!
//! The terminal client of the stockroom library. This is the only place
//! that reads stdin, writes stdout, or picks exit codes.
//!
//! - `setup`: clap argument model
//! - `commands`: dispatch, menu loop, and one handler per menu option
//! - `render`: tables, product cards, banners, price formatting
//! - `styles`: the console theme
//! - `print`: colored message output
//! - `logging`: tracing subscriber setup

mod commands;
mod logging;
mod print;
mod render;
mod setup;
mod styles;

pub use commands::run;
