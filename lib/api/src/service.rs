//! Request services over the loaded model store
//!
//! Both services are stateless: every call reads the immutable [`ModelStore`]
//! shared by all HTTP workers.

use ahash::AHashSet;
use laprec_core::{CurrencyConverter, Field, LaptopRecord, Purpose, Result};
use laprec_storage::ModelStore;
use serde::ser::{Serialize, Serializer};
use std::sync::Arc;
use tracing::debug;

/// Neighbors fetched per request; duplicates are dropped, never backfilled
pub const MAX_RECOMMENDATIONS: usize = 3;

/// One recommended laptop, prices in the display currency
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Recommendation {
    pub name: String,
    pub screen_size: String,
    pub screen: String,
    pub ram: String,
    pub storage: String,
    pub gpu: String,
    pub price_tzs: u64,
}

impl Recommendation {
    fn from_record(record: &LaptopRecord, price_tzs: u64) -> Self {
        Self {
            name: record.formatted_name.clone(),
            screen_size: format!("{} inches", record.screen_size),
            screen: record.screen.clone(),
            ram: record.ram.clone(),
            storage: record.storage.clone(),
            gpu: record.gpu.clone(),
            price_tzs,
        }
    }
}

pub struct RecommendationService {
    store: Arc<ModelStore>,
    converter: CurrencyConverter,
}

impl RecommendationService {
    pub fn new(store: Arc<ModelStore>, converter: CurrencyConverter) -> Self {
        Self { store, converter }
    }

    /// Up to [`MAX_RECOMMENDATIONS`] laptops similar to the given one, nearest first.
    ///
    /// Fails without a partial result if any input is outside the trained
    /// vocabulary, if a neighbor does not resolve to a catalog row, or if a
    /// selected row has an unparseable price.
    pub fn recommend(
        &self,
        manufacturer: &str,
        model_name: &str,
        category: &str,
    ) -> Result<Vec<Recommendation>> {
        let query = self.store.encoders().encode_all(&[
            (Field::Manufacturer, manufacturer),
            (Field::ModelName, model_name),
            (Field::Category, category),
        ])?;
        debug!("Transformed user input: {:?}", query.as_slice());

        let neighbors = self.store.index().query(&query, MAX_RECOMMENDATIONS)?;
        debug!("Nearest neighbors: {:?}", neighbors);

        let catalog = self.store.catalog();
        let mut seen = AHashSet::with_capacity(neighbors.len());
        let mut unique = Vec::with_capacity(neighbors.len());
        for neighbor in &neighbors {
            let record = catalog.row_at(neighbor.index)?;
            if seen.insert(record.formatted_name.as_str()) {
                unique.push(record);
            }
        }

        unique
            .into_iter()
            .take(MAX_RECOMMENDATIONS)
            .map(|record| {
                let price = self.converter.convert_record(record)?;
                Ok(Recommendation::from_record(record, price))
            })
            .collect()
    }
}

/// Model names per manufacturer, serialized as a JSON object in catalog order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModelsByManufacturer(Vec<(String, Vec<String>)>);

impl ModelsByManufacturer {
    pub fn get(&self, manufacturer: &str) -> Option<&[String]> {
        self.0
            .iter()
            .find(|(m, _)| m == manufacturer)
            .map(|(_, models)| models.as_slice())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for ModelsByManufacturer {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|(m, models)| (m, models)))
    }
}

/// Values for populating client-side selection controls
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct LaptopOptions {
    pub manufacturers: Vec<String>,
    pub model_names: ModelsByManufacturer,
    pub categories: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct PurposeOption {
    pub purpose: Purpose,
    pub category: &'static str,
}

pub struct OptionsService {
    store: Arc<ModelStore>,
}

impl OptionsService {
    pub fn new(store: Arc<ModelStore>) -> Self {
        Self { store }
    }

    /// Distinct manufacturers, their model names, and categories, recomputed per call
    pub fn list_options(&self) -> LaptopOptions {
        let catalog = self.store.catalog();
        let manufacturers = catalog.distinct(Field::Manufacturer);

        let model_names: Vec<(String, Vec<String>)> = manufacturers
            .iter()
            .map(|manufacturer| {
                let mut seen = AHashSet::new();
                let models: Vec<String> = catalog
                    .rows_where(Field::Manufacturer, manufacturer)
                    .map(|row| row.model_name.as_str())
                    .filter(|model| seen.insert(*model))
                    .map(str::to_string)
                    .collect();
                (manufacturer.clone(), models)
            })
            .collect();

        LaptopOptions {
            manufacturers,
            model_names: ModelsByManufacturer(model_names),
            categories: catalog.distinct(Field::Category),
        }
    }

    pub fn list_purposes(&self) -> Vec<PurposeOption> {
        Purpose::ALL
            .into_iter()
            .map(|purpose| PurposeOption {
                purpose,
                category: purpose.category(),
            })
            .collect()
    }
}
