use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::orders::OrderStore;
use crate::store::Gateway;
use crate::validation::OrderDraft;

pub fn run<G: Gateway>(store: &mut OrderStore<G>, draft: &OrderDraft) -> Result<CmdResult> {
    let record = store.add(draft)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Record added successfully! (Order ID: {})",
        record.order_id
    )));
    Ok(result.with_affected_orders(vec![record]))
}
