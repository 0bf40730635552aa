use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{LngLat, Poi};
use crate::store::poi_store::PoiStore;
use crate::store::Storage;

pub fn run<S: Storage>(
    store: &mut PoiStore<S>,
    title: String,
    description: String,
    category: String,
    coords: LngLat,
) -> Result<CmdResult> {
    let id = store.generate_id(&title);
    let poi = Poi::new(id, title, description, category, coords);
    store.add(poi.clone())?;

    let mut result = CmdResult::default().with_affected(vec![poi.clone()]);
    result.add_message(CmdMessage::success(format!(
        "POI added: {} ({})",
        poi.title, poi.id
    )));
    Ok(result)
}
