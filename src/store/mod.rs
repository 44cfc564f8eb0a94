//! Profile persistence, saved schemes and application tracking
//!
//! Each identity owns at most one profile. Saving replaces the stored
//! profile wholesale; there is no history.

pub mod applications;
pub mod saved;

use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};

use log::{debug, info};
use rustc_hash::FxHashMap;
use tempfile::NamedTempFile;

use crate::error::Result;
use crate::models::Profile;

pub use applications::{Application, ApplicationStatus, Applications};
pub use saved::SavedSchemes;

/// Storage for one profile per identity
pub trait ProfileStore {
    /// Fetch the profile for `identity`, if one was saved
    fn load(&self, identity: &str) -> Result<Option<Profile>>;

    /// Store `profile` for `identity`, replacing any previous one
    fn save(&mut self, identity: &str, profile: &Profile) -> Result<()>;

    /// Forget the profile for `identity`
    fn clear(&mut self, identity: &str) -> Result<()>;
}

/// Profiles held in memory
#[derive(Debug, Clone, Default)]
pub struct InMemoryProfileStore {
    profiles: FxHashMap<String, Profile>,
}

impl InMemoryProfileStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProfileStore for InMemoryProfileStore {
    fn load(&self, identity: &str) -> Result<Option<Profile>> {
        Ok(self.profiles.get(identity).cloned())
    }

    fn save(&mut self, identity: &str, profile: &Profile) -> Result<()> {
        profile.validate()?;
        self.profiles.insert(identity.to_string(), profile.clone());
        Ok(())
    }

    fn clear(&mut self, identity: &str) -> Result<()> {
        self.profiles.remove(identity);
        Ok(())
    }
}

/// Profiles kept in a single JSON file keyed by identity
#[derive(Debug, Clone)]
pub struct JsonFileProfileStore {
    path: PathBuf,
}

impl JsonFileProfileStore {
    /// Create a store backed by `path`; the file is created on first save
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, Profile>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = std::fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        Ok(serde_json::from_str(&content)?)
    }

    /// Replace the backing file through a sibling temp file so readers never
    /// see a partial write
    fn write_all(&self, profiles: &BTreeMap<String, Profile>) -> Result<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut file = NamedTempFile::new_in(dir)?;
        serde_json::to_writer_pretty(&mut file, profiles)?;
        file.flush()?;
        file.persist(&self.path).map_err(|e| e.error)?;
        Ok(())
    }
}

impl ProfileStore for JsonFileProfileStore {
    fn load(&self, identity: &str) -> Result<Option<Profile>> {
        let profile = self.read_all()?.remove(identity);
        if let Some(profile) = &profile {
            profile.validate()?;
        } else {
            debug!("No stored profile for '{identity}'");
        }
        Ok(profile)
    }

    fn save(&mut self, identity: &str, profile: &Profile) -> Result<()> {
        profile.validate()?;
        let mut profiles = self.read_all()?;
        profiles.insert(identity.to_string(), profile.clone());
        self.write_all(&profiles)?;
        info!("Saved profile for '{identity}' to {}", self.path.display());
        Ok(())
    }

    fn clear(&mut self, identity: &str) -> Result<()> {
        let mut profiles = self.read_all()?;
        if profiles.remove(identity).is_some() {
            self.write_all(&profiles)?;
        }
        Ok(())
    }
}
