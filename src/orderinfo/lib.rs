//! # Orderinfo Architecture
//!
//! Orderinfo keeps the orders of a small electronics store in a CSV file and
//! lets one person view, add, delete and re-save them from a console menu.
//! The interesting part is the in-memory record store: it must know whether
//! the file was loaded, whether there are unsaved edits, and whether the file
//! already holds rows, so that saving either rewrites the file or appends to it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Menu loop, prompts, confirmations, table printing        │
//! │  - The ONLY place that knows about stdin/stdout/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs) + Command Layer (commands/*.rs)         │
//! │  - Dispatch, user-facing messages, returns CmdResult        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Record Store (orders.rs)                                   │
//! │  - Owned Vec<OrderRecord> plus loaded/unsaved/has-data flags│
//! │  - Chooses overwrite vs append on save                      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Persistence Gateway (store/)                               │
//! │  - Gateway trait: read_all / write_all                      │
//! │  - CsvFileGateway (production), InMemoryGateway (testing)   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes Rust arguments and returns `Result` types.
//! It never reads stdin, never prints, and never asks for confirmation; it
//! exposes the conditions that need one (`needs_load_confirmation`) instead.
//! Diagnostics go through the `log` facade.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: One module per menu operation
//! - [`orders`]: The record store and its flag lifecycle
//! - [`store`]: Gateway trait and implementations
//! - [`model`]: `OrderRecord`, `OrderStatus`, file header
//! - [`validation`]: Per-field checks for new orders
//! - [`config`]: `.orderinfo/config.json`
//! - [`logging`]: env_logger setup
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod orders;
pub mod store;
pub mod validation;
