use crate::commands::{CmdMessage, CmdResult, NO_RECORDS_MESSAGE};
use crate::error::Result;
use crate::orders::OrderStore;
use crate::store::{Gateway, SaveMode};

/// Saves the store. An empty store with nothing to persist is not written,
/// but emptying a loaded store by deleting every order is.
pub fn run<G: Gateway>(store: &mut OrderStore<G>) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if store.is_empty() && !store.has_unsaved_changes() {
        result.add_message(CmdMessage::info(NO_RECORDS_MESSAGE));
        return Ok(result);
    }

    let mode = store.save()?;
    result.save_mode = Some(mode);
    let message = match mode {
        SaveMode::Overwrite => format!(
            "Records successfully saved to '{}'.",
            store.gateway().location()
        ),
        SaveMode::Append => format!(
            "New records successfully appended to '{}'.",
            store.gateway().location()
        ),
    };
    result.add_message(CmdMessage::success(message));
    Ok(result)
}
