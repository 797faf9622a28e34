//! # Persistence Gateway
//!
//! This module defines the storage abstraction for orderinfo. The [`Gateway`]
//! trait is the only thing the record store knows about the backing file: it
//! reads every row at once and writes rows back in one of two modes.
//!
//! ## Implementations
//!
//! - [`csv_file::CsvFileGateway`]: Production storage in a single CSV file
//!   - First row is the fixed 7-column header
//!   - Quoting follows standard CSV rules
//!
//! - [`memory::InMemoryGateway`]: In-memory storage for testing
//!   - No persistence
//!   - Can simulate read and write failures
//!
//! ## Storage Format
//!
//! ```text
//! Order_ID,Customer_Name,Item_Purchased,Qty,Order_Date,Total($),Status
//! 1001,Jane Doe,Laptop,1,01/05/2025,999.99,Shipped
//! ```
//!
//! Gateways deal in raw text rows. Typing and validation happen in the record
//! store, so a gateway never rejects a row because of its content.

use crate::error::Result;
use std::fmt;

pub mod csv_file;
pub mod memory;

pub type Row = Vec<String>;

/// Everything read from the backing file, header split from the data rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileContents {
    /// `None` when the file has no rows at all.
    pub header: Option<Row>,
    pub rows: Vec<Row>,
}

impl FileContents {
    pub fn has_data(&self) -> bool {
        self.header.is_some() && !self.rows.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveMode {
    /// Replace the file with the header and every given row.
    Overwrite,
    /// Add the given rows after the existing ones.
    Append,
}

impl fmt::Display for SaveMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SaveMode::Overwrite => f.write_str("overwrite"),
            SaveMode::Append => f.write_str("append"),
        }
    }
}

/// Abstract interface for the order file.
pub trait Gateway {
    /// Read the header and every data row, in file order.
    fn read_all(&self) -> Result<FileContents>;

    /// Write rows in the given mode. On append the header is only written
    /// when the target has no rows yet.
    fn write_all(&mut self, header: &[String], rows: &[Row], mode: SaveMode) -> Result<()>;

    /// Human readable location of the backing data (a path for files).
    fn location(&self) -> String;
}
