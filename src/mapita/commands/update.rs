use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::PoiPatch;
use crate::store::poi_store::PoiStore;
use crate::store::Storage;

pub fn run<S: Storage>(store: &mut PoiStore<S>, id: &str, patch: PoiPatch) -> Result<CmdResult> {
    if patch.is_empty() {
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::warning(format!("Nothing to update on {}", id)));
        return Ok(result);
    }

    let moved = patch.coords.is_some();
    store.update(id, patch)?;

    let poi = store.get(id).cloned();
    let mut result = CmdResult::default().with_affected(poi.into_iter().collect());
    let verb = if moved { "moved" } else { "updated" };
    result.add_message(CmdMessage::success(format!("POI {}: {}", verb, id)));
    Ok(result)
}
