use crate::commands::CmdResult;
use crate::error::Result;
use crate::filter::FilterState;
use crate::store::poi_store::PoiStore;
use crate::store::Storage;

pub fn run<S: Storage>(store: &PoiStore<S>, term: &str) -> Result<CmdResult> {
    super::list::run(store, &FilterState::with_query(term))
}
