//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single
//! entry point the menu and the subcommands use.
//!
//! The facade:
//! - **Dispatches** to the matching command function
//! - **Parses inputs** that arrive as text (order ids)
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It does no printing and no prompting. Confirmation policy (discarding
//! unsaved changes on load, deleting an order) is exposed through query
//! methods and left to the caller.
//!
//! `OrderApi<G: Gateway>` is generic over the backing storage:
//! - Production: `OrderApi<CsvFileGateway>`
//! - Testing: `OrderApi<InMemoryGateway>`

use crate::commands;
use crate::error::{OrderError, Result};
use crate::model::OrderRecord;
use crate::orders::OrderStore;
use crate::store::{Gateway, SaveMode};
use crate::validation::OrderDraft;

pub struct OrderApi<G: Gateway> {
    store: OrderStore<G>,
    paths: commands::OrderPaths,
}

impl<G: Gateway> OrderApi<G> {
    pub fn new(store: OrderStore<G>, paths: commands::OrderPaths) -> Self {
        Self { store, paths }
    }

    pub fn store(&self) -> &OrderStore<G> {
        &self.store
    }

    pub fn load(&mut self) -> Result<commands::CmdResult> {
        commands::load::run(&mut self.store)
    }

    pub fn list(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn add(&mut self, draft: &OrderDraft) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, draft)
    }

    pub fn delete(&mut self, order_id: u32) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, order_id)
    }

    pub fn save(&mut self) -> Result<commands::CmdResult> {
        commands::save::run(&mut self.store)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, action)
    }

    pub fn find(&self, order_id: u32) -> Option<&OrderRecord> {
        self.store.find(order_id)
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn needs_load_confirmation(&self) -> bool {
        self.store.needs_load_confirmation()
    }

    pub fn has_unsaved_changes(&self) -> bool {
        self.store.has_unsaved_changes()
    }

    /// True when saving now would replace a file this session never loaded.
    pub fn save_would_overwrite_unloaded(&self) -> bool {
        !self.store.is_loaded() && self.store.save_mode() == SaveMode::Overwrite
    }

    pub fn paths(&self) -> &commands::OrderPaths {
        &self.paths
    }
}

/// Parses a user-typed order id.
pub fn parse_order_id(input: &str) -> Result<u32> {
    input
        .trim()
        .parse()
        .map_err(|_| OrderError::validation("order id", "please enter a valid integer"))
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel, OrderPaths};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryGateway;

    fn api(store: OrderStore<InMemoryGateway>) -> OrderApi<InMemoryGateway> {
        OrderApi::new(store, OrderPaths::new(std::env::temp_dir()))
    }

    fn draft() -> OrderDraft {
        OrderDraft {
            customer_name: "Jane Doe".into(),
            item_purchased: "Laptop".into(),
            quantity: "1".into(),
            order_date: "01/05/2025".into(),
            total_price: "999.99".into(),
            status: "Shipped".into(),
        }
    }

    #[test]
    fn dispatches_load_and_list() {
        let mut api = api(StoreFixture::new().with_orders(2).store());

        assert_eq!(api.load().unwrap().loaded_count, Some(2));
        assert_eq!(api.list().unwrap().listed_orders.len(), 2);
    }

    #[test]
    fn add_then_save_flows_through_store() {
        let mut api = api(StoreFixture::new().store());

        api.add(&draft()).unwrap();
        assert!(api.has_unsaved_changes());
        assert!(api.save_would_overwrite_unloaded());

        let saved = api.save().unwrap();
        assert_eq!(saved.save_mode, Some(SaveMode::Overwrite));
        assert!(!api.has_unsaved_changes());
    }

    #[test]
    fn unloaded_store_with_data_on_disk_does_not_warn_overwrite() {
        let mut api = api(StoreFixture::new().with_orders(1).store());
        api.add(&draft()).unwrap();
        assert!(!api.save_would_overwrite_unloaded());
    }

    #[test]
    fn parse_order_id_rejects_text() {
        assert_eq!(parse_order_id(" 1001 ").unwrap(), 1001);
        assert!(matches!(
            parse_order_id("abc").unwrap_err(),
            OrderError::Validation {
                field: "order id",
                ..
            }
        ));
    }
}
