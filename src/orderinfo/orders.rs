//! # Record Store
//!
//! [`OrderStore`] owns every order held in memory, in insertion order (file
//! order after a load, then newly added orders), together with three flags:
//!
//! - `loaded`: the last load produced records from a file with a header
//! - `unsaved_changes`: an add or delete happened since the last successful save
//! - `backing_file_has_data`: the last read of the file found a header and at
//!   least one data row
//!
//! ## Flag Lifecycle
//!
//! ```text
//!   Fresh ──load──▶ Loaded ──add/delete──▶ Dirty ──save──▶ Clean
//!     │                                      ▲
//!     └────────────────add───────────────────┘
//! ```
//!
//! ## Save Modes
//!
//! A store that never loaded the file but knows the file already holds rows
//! saves in [`SaveMode::Append`]: only orders added since the last successful
//! load or save are written. Every other store rewrites the whole file.
//!
//! Operations either complete or leave the store as it was. The one exception
//! is a load that hits a malformed row: the store ends up empty and unloaded,
//! never half-populated.

use crate::error::{OrderError, Result};
use crate::model::{header_row, NewOrder, OrderRecord, COLUMN_HEADER};
use crate::store::{FileContents, Gateway, Row, SaveMode};
use crate::validation::OrderDraft;
use log::{debug, warn};
use std::collections::HashSet;

pub const DEFAULT_FIRST_ORDER_ID: u32 = 1001;

pub struct OrderStore<G: Gateway> {
    gateway: G,
    records: Vec<OrderRecord>,
    loaded: bool,
    unsaved_changes: bool,
    backing_file_has_data: bool,
    // ids added since the last successful load or save
    pending: Vec<u32>,
    first_order_id: u32,
}

impl<G: Gateway> OrderStore<G> {
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            records: Vec::new(),
            loaded: false,
            unsaved_changes: false,
            backing_file_has_data: false,
            pending: Vec::new(),
            first_order_id: DEFAULT_FIRST_ORDER_ID,
        }
    }

    /// Id handed out when neither memory nor the file holds any order.
    pub fn with_first_order_id(mut self, id: u32) -> Self {
        self.first_order_id = id;
        self
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    pub fn records(&self) -> &[OrderRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn find(&self, order_id: u32) -> Option<&OrderRecord> {
        self.records.iter().find(|r| r.order_id == order_id)
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn has_unsaved_changes(&self) -> bool {
        self.unsaved_changes
    }

    pub fn backing_file_has_data(&self) -> bool {
        self.backing_file_has_data
    }

    /// Loading discards in-memory edits, so callers must confirm first when this is true.
    pub fn needs_load_confirmation(&self) -> bool {
        self.unsaved_changes
    }

    /// True when the order exists on disk as far as this store knows.
    pub fn is_persisted(&self, order_id: u32) -> bool {
        self.find(order_id).is_some() && !self.pending.contains(&order_id)
    }

    pub fn clear(&mut self) {
        self.records.clear();
        self.pending.clear();
        self.loaded = false;
        self.unsaved_changes = false;
    }

    /// Reads the backing file and replaces the collection with its rows.
    ///
    /// A read failure clears the store before the error is returned.
    pub fn load(&mut self) -> Result<usize> {
        match self.gateway.read_all() {
            Ok(contents) => self.load_rows(contents),
            Err(e) => {
                self.clear();
                Err(e)
            }
        }
    }

    /// Replaces the collection with already-read file contents.
    ///
    /// No header fails with [`OrderError::EmptyFile`], a header with no data
    /// rows with [`OrderError::NoDataRows`]; both leave the records untouched.
    pub fn load_rows(&mut self, contents: FileContents) -> Result<usize> {
        if contents.header.is_none() {
            self.backing_file_has_data = false;
            return Err(OrderError::EmptyFile);
        }
        if contents.rows.is_empty() {
            self.backing_file_has_data = false;
            return Err(OrderError::NoDataRows);
        }

        self.clear();
        self.backing_file_has_data = true;
        let parsed = parse_rows(&contents.rows)?;

        let count = parsed.len();
        self.records = parsed;
        self.loaded = true;
        self.backing_file_has_data = count > 0;
        self.unsaved_changes = false;
        debug!("loaded {} orders from {}", count, self.gateway.location());
        Ok(count)
    }

    /// One more than the highest id in memory, or on disk when memory is empty.
    pub fn next_order_id(&mut self) -> Result<u32> {
        if let Some(max) = self.records.iter().map(|r| r.order_id).max() {
            return following_id(max);
        }

        let contents = match self.gateway.read_all() {
            Ok(contents) => contents,
            Err(e) if e.is_missing_file() => FileContents::default(),
            Err(e) => return Err(e),
        };
        self.backing_file_has_data = contents.has_data();

        let mut highest = None;
        for (idx, row) in contents.rows.iter().enumerate() {
            let id = row_order_id(idx + 1, row)?;
            highest = highest.max(Some(id));
        }
        let next = match highest {
            Some(id) => following_id(id)?,
            None => self.first_order_id,
        };
        debug!("next order id {} taken from {}", next, self.gateway.location());
        Ok(next)
    }

    /// Validates the draft and appends it as a new order.
    pub fn add(&mut self, draft: &OrderDraft) -> Result<OrderRecord> {
        let order = draft.validate()?;
        self.add_order(order)
    }

    /// Appends an already validated order under a freshly allocated id.
    pub fn add_order(&mut self, order: NewOrder) -> Result<OrderRecord> {
        let order_id = self.next_order_id()?;
        let record = OrderRecord::new(order_id, order);
        self.records.push(record.clone());
        self.pending.push(order_id);
        self.unsaved_changes = true;
        debug!("added order {}", order_id);
        Ok(record)
    }

    pub fn delete(&mut self, order_id: u32) -> Result<OrderRecord> {
        let index = self
            .records
            .iter()
            .position(|r| r.order_id == order_id)
            .ok_or(OrderError::NotFound(order_id))?;

        let persisted = self.is_persisted(order_id);
        let record = self.records.remove(index);
        self.pending.retain(|id| *id != order_id);
        self.unsaved_changes = true;

        if persisted && self.save_mode() == SaveMode::Append {
            warn!(
                "order {} is already in {} and will stay there: append saves cannot remove rows",
                order_id,
                self.gateway.location()
            );
        }
        debug!("deleted order {}", order_id);
        Ok(record)
    }

    pub fn save_mode(&self) -> SaveMode {
        if !self.loaded && self.backing_file_has_data {
            SaveMode::Append
        } else {
            SaveMode::Overwrite
        }
    }

    /// Writes the store through the gateway. On failure nothing changes.
    pub fn save(&mut self) -> Result<SaveMode> {
        let mode = self.save_mode();
        let rows: Vec<Row> = match mode {
            SaveMode::Overwrite => self.records.iter().map(OrderRecord::to_row).collect(),
            SaveMode::Append => self
                .records
                .iter()
                .filter(|r| self.pending.contains(&r.order_id))
                .map(OrderRecord::to_row)
                .collect(),
        };

        self.gateway.write_all(&header_row(), &rows, mode)?;

        self.pending.clear();
        self.unsaved_changes = false;
        debug!(
            "saved {} orders to {} ({})",
            rows.len(),
            self.gateway.location(),
            mode
        );
        Ok(mode)
    }
}

fn parse_rows(rows: &[Row]) -> Result<Vec<OrderRecord>> {
    let mut seen = HashSet::with_capacity(rows.len());
    let mut records = Vec::with_capacity(rows.len());
    for (idx, row) in rows.iter().enumerate() {
        let record = OrderRecord::from_row(idx + 1, row)?;
        if !seen.insert(record.order_id) {
            return Err(OrderError::malformed(
                idx + 1,
                COLUMN_HEADER[0],
                format!("{} (duplicate)", record.order_id),
            ));
        }
        records.push(record);
    }
    Ok(records)
}

fn row_order_id(row_number: usize, row: &Row) -> Result<u32> {
    let raw = row.first().map(|f| f.trim()).unwrap_or_default();
    raw.parse::<u32>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| OrderError::malformed(row_number, COLUMN_HEADER[0], raw))
}

fn following_id(id: u32) -> Result<u32> {
    id.checked_add(1).ok_or(OrderError::IdsExhausted(id))
}
