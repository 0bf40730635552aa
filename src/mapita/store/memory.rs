use super::{decode, encode, Storage};
use crate::error::{MapitaError, Result};
use crate::model::Poi;

/// In-memory storage holding the record as serialized text, like a
/// browser's local-storage slot. Used by tests and embedding hosts that
/// manage durability themselves.
#[derive(Default)]
pub struct MemoryStorage {
    raw: Option<String>,
    fail_writes: bool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seeds the raw record, including malformed content.
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            raw: Some(raw.into()),
            fail_writes: false,
        }
    }

    /// A storage whose writes always fail, as when a quota is exhausted.
    pub fn failing() -> Self {
        Self {
            raw: None,
            fail_writes: true,
        }
    }

    pub fn raw(&self) -> Option<&str> {
        self.raw.as_deref()
    }
}

impl Storage for MemoryStorage {
    fn save(&mut self, pois: &[Poi]) -> Result<()> {
        if self.fail_writes {
            return Err(MapitaError::Store("storage quota exceeded".to_string()));
        }
        self.raw = Some(encode(pois)?);
        Ok(())
    }

    fn load(&self) -> Option<Vec<Poi>> {
        self.raw.as_deref().and_then(decode)
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    /// Storage pre-populated with a well-formed collection.
    pub fn seeded(pois: &[Poi]) -> MemoryStorage {
        let mut storage = MemoryStorage::new();
        storage.save(pois).unwrap();
        storage
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::default_pois;

    #[test]
    fn test_round_trip() {
        let pois = default_pois();
        let mut storage = MemoryStorage::new();
        storage.save(&pois).unwrap();
        assert_eq!(storage.load(), Some(pois));
    }

    #[test]
    fn test_empty_loads_as_none() {
        assert_eq!(MemoryStorage::new().load(), None);
    }

    #[test]
    fn test_malformed_seed_loads_as_none() {
        let storage = MemoryStorage::with_raw("[{\"bad\": true}]");
        assert_eq!(storage.load(), None);
    }

    #[test]
    fn test_failing_storage_reports_write_error() {
        let mut storage = MemoryStorage::failing();
        assert!(storage.save(&default_pois()).is_err());
        assert_eq!(storage.load(), None);
    }
}
