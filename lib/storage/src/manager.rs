use crate::artifacts::{load_encoders, load_neighbor_index};
use crate::catalog::Catalog;
use laprec_core::{EncoderTable, NeighborIndex, Result};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Locations of the dataset and the trained artifacts
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub dataset: PathBuf,
    pub encoders: PathBuf,
    pub neighbor_index: PathBuf,
}

impl StoreConfig {
    /// Default file names inside `data_dir`
    pub fn in_dir<P: AsRef<Path>>(data_dir: P) -> Self {
        let dir = data_dir.as_ref();
        Self {
            dataset: dir.join("laptops.csv"),
            encoders: dir.join("label_encoders.json"),
            neighbor_index: dir.join("knn_model.json"),
        }
    }
}

/// Everything loaded at startup; immutable afterwards
pub struct ModelStore {
    catalog: Catalog,
    encoders: EncoderTable,
    index: NeighborIndex,
}

impl ModelStore {
    pub fn open(config: &StoreConfig) -> Result<Self> {
        let catalog = Catalog::load(&config.dataset)?;
        info!("Catalog loaded: {} rows from {:?}", catalog.len(), config.dataset);

        let encoders = load_encoders(&config.encoders)?;
        info!("Label encoders loaded from {:?}", config.encoders);

        let index = load_neighbor_index(&config.neighbor_index)?;
        info!(
            "Neighbor index loaded from {:?}: {} rows, {} dims, {:?} metric",
            config.neighbor_index,
            index.len(),
            index.dim(),
            index.metric()
        );

        Ok(Self::new(catalog, encoders, index))
    }

    pub fn new(catalog: Catalog, encoders: EncoderTable, index: NeighborIndex) -> Self {
        if index.len() != catalog.len() {
            warn!(
                "Neighbor index has {} rows but catalog has {}; out-of-range neighbors will fail",
                index.len(),
                catalog.len()
            );
        }

        Self {
            catalog,
            encoders,
            index,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn encoders(&self) -> &EncoderTable {
        &self.encoders
    }

    pub fn index(&self) -> &NeighborIndex {
        &self.index
    }
}
