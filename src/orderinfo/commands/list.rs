use crate::commands::{CmdMessage, CmdResult, NO_RECORDS_MESSAGE};
use crate::error::Result;
use crate::orders::OrderStore;
use crate::store::Gateway;

pub fn run<G: Gateway>(store: &OrderStore<G>) -> Result<CmdResult> {
    if store.is_empty() {
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::info(NO_RECORDS_MESSAGE));
        return Ok(result);
    }

    Ok(CmdResult::default().with_listed_orders(store.records().to_vec()))
}
