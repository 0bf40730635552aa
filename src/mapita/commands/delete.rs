use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::poi_store::PoiStore;
use crate::store::Storage;

pub fn run<S: Storage>(store: &mut PoiStore<S>, id: &str) -> Result<CmdResult> {
    store.remove(id)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("POI removed: {}", id)));
    Ok(result)
}
