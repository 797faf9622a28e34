//! # CLI Layer
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdin, stdout, stderr)
//! - Uses `std::process::exit` (through `main`)
//! - Handles argument parsing
//! - Formats output for human consumption
//!
//! With no subcommand it runs the interactive main menu; `list`, `add`,
//! `delete` and `config` are one-shot equivalents for scripts.

mod commands;
mod menu;
mod render;
mod setup;

pub use commands::run;
