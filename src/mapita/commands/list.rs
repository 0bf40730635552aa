use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::filter::FilterState;
use crate::list::project;
use crate::store::poi_store::PoiStore;
use crate::store::Storage;

pub fn run<S: Storage>(store: &PoiStore<S>, filter: &FilterState) -> Result<CmdResult> {
    let visible = filter.apply(store.list());
    let rows = project(&visible);

    let mut result = CmdResult::default().with_rows(rows);
    if result.rows.is_empty() {
        result.add_message(CmdMessage::info("No POIs match."));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemoryStorage;
    use std::collections::BTreeSet;

    #[test]
    fn lists_everything_without_filters() {
        let mut store = PoiStore::new(MemoryStorage::new());
        store.load_initial();

        let result = run(&store, &FilterState::default()).unwrap();
        assert_eq!(result.rows.len(), store.len());
        assert!(result.messages.is_empty());
    }

    #[test]
    fn category_filter_narrows_rows() {
        let mut store = PoiStore::new(MemoryStorage::new());
        store.load_initial();

        let filter = FilterState {
            query: String::new(),
            categories: BTreeSet::from(["museum".to_string()]),
        };
        let result = run(&store, &filter).unwrap();
        assert_eq!(result.rows.len(), 2); // museo-oro, museo-botero
        assert!(result.rows.iter().all(|r| r.icon == "🏺"));
    }

    #[test]
    fn no_matches_reports_info() {
        let mut store = PoiStore::new(MemoryStorage::new());
        store.load_initial();

        let filter = FilterState::with_query("zzzz");
        let result = run(&store, &filter).unwrap();
        assert!(result.rows.is_empty());
        assert_eq!(result.messages.len(), 1);
    }
}
