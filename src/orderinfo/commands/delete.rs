use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::orders::OrderStore;
use crate::store::{Gateway, SaveMode};

/// Deletes one order. Confirmation with the user happens before this is called.
pub fn run<G: Gateway>(store: &mut OrderStore<G>, order_id: u32) -> Result<CmdResult> {
    let stays_on_disk = store.is_persisted(order_id) && store.save_mode() == SaveMode::Append;
    let record = store.delete(order_id)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Order ID: {} deleted successfully!",
        order_id
    )));
    if stays_on_disk {
        result.add_message(CmdMessage::warning(
            "This order is already saved and the file was never loaded; load the file before deleting to remove it there too.",
        ));
    }
    Ok(result.with_affected_orders(vec![record]))
}
