use crate::commands::{CmdMessage, CmdResult};
use crate::error::{MapitaError, Result};
use crate::model::Poi;
use crate::store::poi_store::PoiStore;
use crate::store::Storage;
use std::fs;
use std::path::Path;

/// Replaces the whole collection with the content of a user-selected JSON
/// file. All-or-nothing: a payload that is not an array, or any element
/// failing the POI shape check, rejects the import and leaves the store
/// untouched.
pub fn run<S: Storage>(store: &mut PoiStore<S>, path: &Path) -> Result<CmdResult> {
    let raw = fs::read_to_string(path).map_err(MapitaError::Io)?;
    let pois: Vec<Poi> = serde_json::from_str(&raw).map_err(|e| {
        MapitaError::InvalidPoi(format!("{} is not a POI array: {}", path.display(), e))
    })?;

    let count = pois.len();
    store.replace_all(pois)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Imported {} POIs from {}",
        count,
        path.display()
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{default_pois, LngLat};
    use crate::store::memory::MemoryStorage;

    fn store() -> PoiStore<MemoryStorage> {
        let mut store = PoiStore::new(MemoryStorage::new());
        store.load_initial();
        store
    }

    #[test]
    fn imports_a_valid_file_wholesale() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mis_pois.json");
        let payload = vec![Poi::new(
            "la-calera",
            "La Calera",
            "Mirador nocturno.",
            "viewpoint",
            LngLat::new(-73.97, 4.72),
        )];
        fs::write(&path, serde_json::to_string_pretty(&payload).unwrap()).unwrap();

        let mut store = store();
        run(&mut store, &path).unwrap();
        assert_eq!(store.list(), payload.as_slice());
    }

    #[test]
    fn rejects_a_non_array_payload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, "{\"not\": \"an array\"}").unwrap();

        let mut store = store();
        let before = store.list().to_vec();

        let err = run(&mut store, &path).unwrap_err();
        assert!(matches!(err, MapitaError::InvalidPoi(_)));
        assert_eq!(store.list(), before.as_slice());
    }

    #[test]
    fn one_invalid_element_rejects_the_whole_import() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mixed.json");
        fs::write(
            &path,
            r#"[
                {"id": "ok", "title": "Fine", "description": "", "category": "user", "coords": [-74.0, 4.7]},
                {"id": "bad", "title": "", "description": "", "category": "user", "coords": [-74.0, 4.7]}
            ]"#,
        )
        .unwrap();

        let mut store = store();
        let err = run(&mut store, &path).unwrap_err();
        assert!(matches!(err, MapitaError::InvalidPoi(_)));
        assert_eq!(store.len(), default_pois().len());
    }

    #[test]
    fn missing_file_reports_io_error() {
        let mut store = store();
        let err = run(&mut store, Path::new("/no/such/file.json")).unwrap_err();
        assert!(matches!(err, MapitaError::Io(_)));
    }
}
