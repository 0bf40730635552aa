//! # Storage Layer
//!
//! This module defines the persistence abstraction for mapita. The
//! [`Storage`] trait allows the POI collection to live in different
//! backends while [`poi_store::PoiStore`] stays the single owner of the
//! in-memory state.
//!
//! ## Design Rationale
//!
//! Persistence is abstracted behind a trait to:
//! - Enable **testing** with `MemoryStorage` (no filesystem needed)
//! - Let embedding hosts plug their own durable store (a browser host
//!   maps `save`/`load` straight onto its local-storage key)
//! - Keep the store's CRUD logic **decoupled** from where bytes go
//!
//! ## Storage Format
//!
//! One versioned record, key `pois_v1`, holding a JSON array of POIs:
//!
//! ```text
//! [{"id": "...", "title": "...", "description": "...",
//!   "category": "...", "coords": [lng, lat]}, ...]
//! ```
//!
//! Absence of the record, unparseable content, a record failing the POI
//! shape check, or duplicate ids all make `load` return `None` — callers
//! treat every one of those identically to "no data" and fall back to the
//! built-in defaults. Nothing in the load path is an error.
//!
//! ## Implementations
//!
//! - [`fs::FileStorage`]: production file-based storage (`pois_v1.json` in
//!   a data directory)
//! - [`memory::MemoryStorage`]: in-memory storage for tests and embedding

use crate::error::Result;
use crate::model::Poi;
use std::collections::HashSet;

pub mod fs;
pub mod memory;
pub mod poi_store;

/// Version tag of the persisted record.
pub const STORAGE_KEY: &str = "pois_v1";

/// Durable storage for the full POI sequence.
pub trait Storage {
    /// Persist the whole collection. Best effort: the caller treats a
    /// failure as "this write was lost", not as a reason to stop.
    fn save(&mut self, pois: &[Poi]) -> Result<()>;

    /// Load the persisted collection, or `None` when there is no usable
    /// data. Never errors.
    fn load(&self) -> Option<Vec<Poi>>;
}

/// Serializes the collection the way every backend stores it.
pub(crate) fn encode(pois: &[Poi]) -> Result<String> {
    Ok(serde_json::to_string_pretty(pois)?)
}

/// Parses and shape-checks persisted text. Any defect yields `None`.
pub(crate) fn decode(raw: &str) -> Option<Vec<Poi>> {
    let pois: Vec<Poi> = serde_json::from_str(raw).ok()?;

    let mut seen = HashSet::new();
    for poi in &pois {
        if poi.validate().is_err() || !seen.insert(poi.id.as_str()) {
            return None;
        }
    }
    Some(pois)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{default_pois, LngLat, Poi};

    #[test]
    fn test_encode_decode_round_trip() {
        let pois = default_pois();
        let raw = encode(&pois).unwrap();
        assert_eq!(decode(&raw), Some(pois));
    }

    #[test]
    fn test_decode_rejects_non_array() {
        assert_eq!(decode("{\"id\": \"x\"}"), None);
        assert_eq!(decode("not json at all"), None);
    }

    #[test]
    fn test_decode_rejects_malformed_record() {
        // Missing title.
        let raw = r#"[{"id": "x", "description": "", "category": "user", "coords": [0.0, 0.0]}]"#;
        assert_eq!(decode(raw), None);

        // Empty title.
        let raw = r#"[{"id": "x", "title": " ", "description": "", "category": "user", "coords": [0.0, 0.0]}]"#;
        assert_eq!(decode(raw), None);

        // Out-of-range coordinates.
        let raw = r#"[{"id": "x", "title": "X", "description": "", "category": "user", "coords": [500.0, 0.0]}]"#;
        assert_eq!(decode(raw), None);
    }

    #[test]
    fn test_decode_rejects_duplicate_ids() {
        let twice = vec![
            Poi::new("x", "One", "", "user", LngLat::new(0.0, 0.0)),
            Poi::new("x", "Two", "", "user", LngLat::new(1.0, 1.0)),
        ];
        let raw = serde_json::to_string(&twice).unwrap();
        assert_eq!(decode(&raw), None);
    }
}
