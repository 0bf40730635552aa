use crate::commands::{CmdMessage, CmdResult};
use crate::error::{MapitaError, Result};
use crate::store::poi_store::PoiStore;
use crate::store::Storage;
use std::fs;
use std::path::{Path, PathBuf};

/// Suggested filename when the caller does not name one.
pub const DEFAULT_EXPORT_FILE: &str = "mis_pois.json";

/// Writes the collection as a standalone pretty-printed JSON document.
pub fn run<S: Storage>(store: &PoiStore<S>, path: Option<&Path>) -> Result<CmdResult> {
    let path: PathBuf = path
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_EXPORT_FILE));

    let json = store.export_json()?;
    fs::write(&path, json).map_err(MapitaError::Io)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Exported {} POIs to {}",
        store.len(),
        path.display()
    )));
    Ok(result)
}
