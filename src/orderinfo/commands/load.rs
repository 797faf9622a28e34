use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::orders::OrderStore;
use crate::store::Gateway;

/// Loads the backing file. Callers must have confirmed discarding unsaved
/// changes when [`OrderStore::needs_load_confirmation`] is true.
///
/// An empty file is reported as a warning, not an error.
pub fn run<G: Gateway>(store: &mut OrderStore<G>) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    match store.load() {
        Ok(count) => {
            result.loaded_count = Some(count);
            result.add_message(CmdMessage::success(format!(
                "{} records successfully loaded from '{}'.",
                count,
                store.gateway().location()
            )));
        }
        Err(e) if e.is_empty_file() => {
            result.add_message(CmdMessage::warning(e.to_string()));
        }
        Err(e) => return Err(e),
    }
    Ok(result)
}
