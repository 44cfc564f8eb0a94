//! Catalog sources
//!
//! The catalog lives in an external store. A `CatalogSource` fetches the raw
//! scheme list; `load_with_fallback` turns a failed or empty fetch into the
//! bundled catalog so the caller always has something to show.

use std::fmt::Debug;
use std::path::{Path, PathBuf};

use log::{info, warn};

use crate::catalog::{SchemeCatalog, builtin};
use crate::error::{Result, SchemeError};
use crate::models::Scheme;

/// A store the scheme list can be fetched from
pub trait CatalogSource: Debug {
    /// Fetch every scheme, in catalog order
    fn load(&self) -> Result<Vec<Scheme>>;

    /// Short description used in log messages
    fn describe(&self) -> String;
}

/// Schemes stored as a JSON array in a file
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    /// Create a source reading from `path`
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file this source reads
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogSource for JsonFileSource {
    fn load(&self) -> Result<Vec<Scheme>> {
        let content = std::fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&content)?)
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}

/// The bundled reference catalog as a source
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinSource;

impl CatalogSource for BuiltinSource {
    fn load(&self) -> Result<Vec<Scheme>> {
        Ok(builtin::schemes())
    }

    fn describe(&self) -> String {
        "builtin catalog".to_string()
    }
}

fn fetch(source: &dyn CatalogSource) -> Result<SchemeCatalog> {
    let catalog = SchemeCatalog::new(source.load()?)?;
    if catalog.is_empty() {
        return Err(SchemeError::EmptyCatalog);
    }
    Ok(catalog)
}

/// Load a catalog, falling back to the bundled one
///
/// A source that fails, returns invalid schemes, or returns no schemes at
/// all is logged and replaced by `SchemeCatalog::builtin()`.
#[must_use]
pub fn load_with_fallback(source: &dyn CatalogSource) -> SchemeCatalog {
    match fetch(source) {
        Ok(catalog) => {
            info!("Loaded {} schemes from {}", catalog.len(), source.describe());
            catalog
        }
        Err(e) => {
            warn!(
                "Could not load catalog from {} ({e}), falling back to builtin catalog",
                source.describe()
            );
            SchemeCatalog::builtin()
        }
    }
}

/// Read a catalog file asynchronously
pub async fn load_catalog_async(path: &Path) -> Result<SchemeCatalog> {
    let content = tokio::fs::read_to_string(path).await?;
    let catalog = SchemeCatalog::from_json_str(&content)?;
    info!("Loaded {} schemes from {}", catalog.len(), path.display());
    Ok(catalog)
}
