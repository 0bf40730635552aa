use super::Storage;
use crate::error::{MapitaError, Result};
use crate::model::{default_pois, slugify, Poi, PoiPatch};
use chrono::Utc;

/// The canonical POI collection: an ordered, id-unique sequence owned by
/// exactly one store instance.
///
/// Every mutating operation persists through the storage backend and bumps
/// the revision counter; derived views (markers, list rows) re-derive when
/// the revision moves. A failed persistence write is logged and swallowed —
/// the in-memory state stays authoritative and at worst the next session
/// misses recent changes.
pub struct PoiStore<S: Storage> {
    storage: S,
    pois: Vec<Poi>,
    revision: u64,
}

impl<S: Storage> PoiStore<S> {
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            pois: Vec::new(),
            revision: 0,
        }
    }

    /// Adopts the persisted collection, or the built-in Bogotá defaults
    /// when nothing usable is stored. Never fails.
    pub fn load_initial(&mut self) {
        self.pois = match self.storage.load() {
            Some(pois) => pois,
            None => default_pois(),
        };
        self.revision += 1;
    }

    /// Appends a POI. Rejects colliding ids and malformed data.
    pub fn add(&mut self, poi: Poi) -> Result<()> {
        poi.validate().map_err(MapitaError::InvalidPoi)?;
        if self.pois.iter().any(|p| p.id == poi.id) {
            return Err(MapitaError::DuplicateId(poi.id));
        }
        self.pois.push(poi);
        self.commit();
        Ok(())
    }

    /// Applies a partial update to the POI with `id`. Only the provided
    /// fields change; id and category are immutable.
    pub fn update(&mut self, id: &str, patch: PoiPatch) -> Result<()> {
        if let Some(title) = &patch.title {
            if title.trim().is_empty() {
                return Err(MapitaError::InvalidPoi(format!(
                    "POI '{}' cannot have an empty title",
                    id
                )));
            }
        }
        if let Some(coords) = &patch.coords {
            if !coords.is_valid() {
                return Err(MapitaError::InvalidPoi(format!(
                    "POI '{}' cannot move to [{}, {}]",
                    id, coords.lng, coords.lat
                )));
            }
        }

        let poi = self
            .pois
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| MapitaError::PoiNotFound(id.to_string()))?;

        if let Some(title) = patch.title {
            poi.title = title;
        }
        if let Some(description) = patch.description {
            poi.description = description;
        }
        if let Some(coords) = patch.coords {
            poi.coords = coords;
        }
        self.commit();
        Ok(())
    }

    /// Removes the POI with `id`. A second invocation reports `PoiNotFound`.
    pub fn remove(&mut self, id: &str) -> Result<()> {
        let idx = self
            .pois
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| MapitaError::PoiNotFound(id.to_string()))?;
        self.pois.remove(idx);
        self.commit();
        Ok(())
    }

    /// Replaces the whole collection. The payload is validated first; on
    /// any defect the store is left untouched.
    pub fn replace_all(&mut self, pois: Vec<Poi>) -> Result<()> {
        for (i, poi) in pois.iter().enumerate() {
            poi.validate()
                .map_err(|reason| MapitaError::InvalidPoi(format!("element {}: {}", i, reason)))?;
            if pois[..i].iter().any(|p| p.id == poi.id) {
                return Err(MapitaError::InvalidPoi(format!(
                    "element {}: duplicate id '{}'",
                    i, poi.id
                )));
            }
        }
        self.pois = pois;
        self.commit();
        Ok(())
    }

    /// Current contents in insertion order.
    pub fn list(&self) -> &[Poi] {
        &self.pois
    }

    pub fn get(&self, id: &str) -> Option<&Poi> {
        self.pois.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.pois.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pois.is_empty()
    }

    /// Monotonic change counter; derived views re-derive when it moves.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Derives a fresh id from `seed`: a slug plus the current-time
    /// millisecond token. A collision with a present id (same seed within
    /// the same millisecond) gets a numeric suffix.
    pub fn generate_id(&self, seed: &str) -> String {
        let base = format!("{}-{}", slugify(seed), Utc::now().timestamp_millis());
        if self.get(&base).is_none() {
            return base;
        }
        let mut n = 2;
        loop {
            let candidate = format!("{}-{}", base, n);
            if self.get(&candidate).is_none() {
                return candidate;
            }
            n += 1;
        }
    }

    /// The collection as a standalone pretty-printed JSON document, the
    /// same shape the storage record uses.
    pub fn export_json(&self) -> Result<String> {
        super::encode(&self.pois)
    }

    fn commit(&mut self) {
        if let Err(e) = self.storage.save(&self.pois) {
            log::warn!("persisting {} POIs failed: {}", self.pois.len(), e);
        }
        self.revision += 1;
    }
}
