use crate::core::PlanEngine;
use crate::models::{CatalogError, PlanCatalog};
use arc_swap::ArcSwap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// A catalog together with the reload generation it was loaded at.
///
/// The generation starts at 0 and increases by one on every successful
/// reload, so anything derived from a snapshot can be tagged with it.
#[derive(Debug, Clone)]
pub struct CatalogSnapshot {
    pub generation: u64,
    pub catalog: Arc<PlanCatalog>,
}

impl CatalogSnapshot {
    /// Engine bound to this snapshot's catalog
    pub fn engine(&self) -> PlanEngine {
        PlanEngine::new(self.catalog.clone())
    }
}

/// Owns the live plan catalog.
///
/// Readers take a snapshot with [`CatalogStore::current`]; a reload builds a
/// new catalog and swaps the pointer, so in-flight requests keep the
/// snapshot they started with.
pub struct CatalogStore {
    path: Option<PathBuf>,
    current: ArcSwap<CatalogSnapshot>,
}

impl CatalogStore {
    /// Load the catalog from a `.json` or `.toml` file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref().to_path_buf();
        let catalog = read_catalog(&path)?;

        tracing::info!(
            "Loaded {} plans from {} providers ({})",
            catalog.len(),
            catalog.providers().len(),
            path.display()
        );

        Ok(Self {
            path: Some(path),
            current: ArcSwap::from_pointee(CatalogSnapshot {
                generation: 0,
                catalog: Arc::new(catalog),
            }),
        })
    }

    /// Wrap an already-built catalog; `reload` is a no-op for these
    pub fn from_catalog(catalog: PlanCatalog) -> Self {
        Self {
            path: None,
            current: ArcSwap::from_pointee(CatalogSnapshot {
                generation: 0,
                catalog: Arc::new(catalog),
            }),
        }
    }

    /// Current catalog and its generation, read together
    pub fn current(&self) -> Arc<CatalogSnapshot> {
        self.current.load_full()
    }

    /// Current catalog snapshot
    pub fn snapshot(&self) -> Arc<PlanCatalog> {
        self.current.load().catalog.clone()
    }

    /// Generation of the live catalog
    pub fn generation(&self) -> u64 {
        self.current.load().generation
    }

    /// Engine bound to the current catalog snapshot
    pub fn engine(&self) -> PlanEngine {
        self.current.load().engine()
    }

    /// Re-read the catalog file and swap it in.
    ///
    /// On error the previous catalog and generation stay live. Returns the
    /// new plan count.
    pub fn reload(&self) -> Result<usize, CatalogError> {
        let Some(path) = &self.path else {
            return Ok(self.current.load().catalog.len());
        };

        let catalog = Arc::new(read_catalog(path)?);
        let count = catalog.len();
        // only the SIGHUP task reloads, so load-then-store does not race
        let generation = self.current.load().generation + 1;
        self.current.store(Arc::new(CatalogSnapshot { generation, catalog }));

        tracing::info!("Reloaded plan catalog: {} plans (generation {})", count, generation);
        Ok(count)
    }
}

fn read_catalog(path: &Path) -> Result<PlanCatalog, CatalogError> {
    let contents = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.display().to_string(),
        source,
    })?;

    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => PlanCatalog::from_json(&contents),
        Some("toml") => PlanCatalog::from_toml(&contents),
        other => Err(CatalogError::UnsupportedFormat(
            other.unwrap_or("<none>").to_string(),
        )),
    }
}
