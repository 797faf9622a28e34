use super::{FileContents, Gateway, Row, SaveMode};
use crate::error::{OrderError, Result};
use std::cell::Cell;
use std::io;

/// In-memory stand-in for the order file.
/// Does NOT persist data.
///
/// Failure switches use `Cell` so tests can flip them through a shared reference.
#[derive(Default)]
pub struct InMemoryGateway {
    contents: FileContents,
    fail_reads: Cell<bool>,
    fail_writes: Cell<bool>,
    writes: Cell<usize>,
}

impl InMemoryGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// A gateway whose "file" already holds the given header and rows.
    pub fn with_contents(header: Option<Row>, rows: Vec<Row>) -> Self {
        Self {
            contents: FileContents { header, rows },
            ..Self::default()
        }
    }

    pub fn contents(&self) -> &FileContents {
        &self.contents
    }

    /// Number of successful `write_all` calls so far.
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }

    pub fn set_simulate_read_error(&self, simulate: bool) {
        self.fail_reads.set(simulate);
    }

    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.fail_writes.set(simulate);
    }
}

impl Gateway for InMemoryGateway {
    fn read_all(&self) -> Result<FileContents> {
        if self.fail_reads.get() {
            return Err(OrderError::Io(io::Error::other("simulated read error")));
        }
        Ok(self.contents.clone())
    }

    fn write_all(&mut self, header: &[String], rows: &[Row], mode: SaveMode) -> Result<()> {
        if self.fail_writes.get() {
            return Err(OrderError::Io(io::Error::other("simulated write error")));
        }

        match mode {
            SaveMode::Overwrite => {
                self.contents.header = Some(header.to_vec());
                self.contents.rows = rows.to_vec();
            }
            SaveMode::Append => {
                if self.contents.header.is_none() {
                    self.contents.header = Some(header.to_vec());
                }
                self.contents.rows.extend(rows.iter().cloned());
            }
        }
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }

    fn location(&self) -> String {
        "memory://OrderDetails.csv".to_string()
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::header_row;
    use crate::orders::OrderStore;

    /// Builds the rows of a backing file before handing it to a store.
    pub struct StoreFixture {
        header: Option<Row>,
        rows: Vec<Row>,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        /// A fixture with no file contents at all.
        pub fn new() -> Self {
            Self {
                header: None,
                rows: Vec::new(),
            }
        }

        pub fn with_header(mut self) -> Self {
            self.header = Some(header_row());
            self
        }

        /// Adds `count` valid rows with ids starting at 1001.
        pub fn with_orders(mut self, count: usize) -> Self {
            self.header = Some(header_row());
            let start = 1001 + self.rows.len() as u32;
            for i in 0..count as u32 {
                let id = start + i;
                self.rows.push(vec![
                    id.to_string(),
                    format!("Customer {}", id),
                    format!("Item {}", id),
                    "1".to_string(),
                    "01/05/2025".to_string(),
                    "10.00".to_string(),
                    "Shipped".to_string(),
                ]);
            }
            self
        }

        pub fn with_row(mut self, fields: &[&str]) -> Self {
            self.header = Some(header_row());
            self.rows.push(fields.iter().map(|f| f.to_string()).collect());
            self
        }

        pub fn gateway(self) -> InMemoryGateway {
            InMemoryGateway::with_contents(self.header, self.rows)
        }

        pub fn store(self) -> OrderStore<InMemoryGateway> {
            OrderStore::new(self.gateway())
        }
    }
}
