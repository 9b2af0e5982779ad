//! # laprec
//!
//! A laptop recommendation lookup service.
//!
//! Given a manufacturer, model name and category, laprec encodes the values with
//! the label encoders of an externally trained model, queries the fitted
//! nearest-neighbor index for the three closest catalog rows, drops rows that
//! share a display name, and converts their prices from Euros to Tanzanian
//! Shillings.
//!
//! ## Quick Start
//!
//! ### As a Server
//!
//! ```bash
//! laprec --data-dir ./data --http-port 8000
//! curl -X POST localhost:8000/api/recommend/ \
//!     -H 'Content-Type: application/json' \
//!     -d '{"manufacturer": "Apple", "model_name": "MacBook Pro", "category": "Ultrabook"}'
//! ```
//!
//! ### As a Library
//!
//! ```rust,no_run
//! use laprec::prelude::*;
//! use std::sync::Arc;
//!
//! let store = Arc::new(ModelStore::open(&StoreConfig::in_dir("./data")).unwrap());
//! let service = RecommendationService::new(store, CurrencyConverter::default());
//! let recommendations = service.recommend("Apple", "MacBook Pro", "Ultrabook").unwrap();
//! ```
//!
//! ## Crate Structure
//!
//! - `laprec-core` - Records, label encoders, neighbor index, pricing
//! - `laprec-storage` - Catalog CSV loading and trained artifact loading
//! - `laprec-api` - Recommendation and options services, REST API

// Re-export core types
pub use laprec_core::{
    CurrencyConverter, Distance, EncoderTable, Error, Field, LaptopRecord, Neighbor,
    NeighborIndex, Purpose, Result, Vector, EUR_TO_TZS,
};

// Re-export storage
pub use laprec_storage::{Catalog, ModelStore, StoreConfig};

// Re-export API
pub use laprec_api::{
    ApiError, LaptopOptions, OptionsService, Recommendation, RecommendationService, RestApi,
    MAX_RECOMMENDATIONS,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        Catalog, CurrencyConverter, EncoderTable, Error, Field, LaptopRecord, ModelStore,
        NeighborIndex, OptionsService, Recommendation, RecommendationService, Result,
        StoreConfig,
    };
}
