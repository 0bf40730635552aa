use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::default_pois;
use crate::store::poi_store::PoiStore;
use crate::store::Storage;

/// Discards the current collection in favor of the built-in defaults.
pub fn run<S: Storage>(store: &mut PoiStore<S>) -> Result<CmdResult> {
    let defaults = default_pois();
    let count = defaults.len();
    store.replace_all(defaults)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Restored the {} default POIs",
        count
    )));
    Ok(result)
}
