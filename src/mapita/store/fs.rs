use super::{decode, encode, Storage, STORAGE_KEY};
use crate::error::{MapitaError, Result};
use crate::model::Poi;
use std::fs;
use std::path::{Path, PathBuf};

/// File-based storage: the versioned record lives as `pois_v1.json`
/// inside a data directory.
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn data_file(&self) -> PathBuf {
        self.dir.join(format!("{}.json", STORAGE_KEY))
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.dir.exists() {
            fs::create_dir_all(&self.dir).map_err(MapitaError::Io)?;
        }
        Ok(())
    }
}

impl Storage for FileStorage {
    fn save(&mut self, pois: &[Poi]) -> Result<()> {
        self.ensure_dir()?;
        let raw = encode(pois)?;
        fs::write(self.data_file(), raw).map_err(MapitaError::Io)?;
        Ok(())
    }

    fn load(&self) -> Option<Vec<Poi>> {
        let path = self.data_file();
        if !path.exists() {
            return None;
        }
        match fs::read_to_string(&path) {
            Ok(raw) => decode(&raw),
            Err(e) => {
                log::warn!("could not read {}: {}", path.display(), e);
                None
            }
        }
    }
}

/// Storage rooted at `dir` if given, otherwise at the platform data
/// directory for mapita.
pub fn open_storage(dir: Option<&Path>) -> Result<FileStorage> {
    let dir = match dir {
        Some(dir) => dir.to_path_buf(),
        None => directories::ProjectDirs::from("com", "mapita", "mapita")
            .ok_or_else(|| MapitaError::Store("Could not determine data dir".to_string()))?
            .data_dir()
            .to_path_buf(),
    };
    Ok(FileStorage::new(dir))
}
