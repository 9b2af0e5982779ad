//! In-memory laptop catalog
//!
//! The dataset is a CSV file with a header row, encoded as Latin-1. Headers are
//! trimmed on load; cell values are kept verbatim.

use ahash::AHashSet;
use laprec_core::{Error, Field, LaptopRecord, Result};
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Read-only collection of laptop records, in dataset order
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    columns: Vec<String>,
    rows: Vec<LaptopRecord>,
}

/// Positions of the columns a record is built from
struct ColumnMap {
    required: Vec<(Field, usize)>,
    formatted_name: Option<usize>,
}

impl ColumnMap {
    fn resolve(headers: &csv::StringRecord, source: &str) -> Result<Self> {
        let position = |name: &str| headers.iter().position(|h| h == name);

        let required = Field::REQUIRED
            .iter()
            .map(|field| {
                position(field.column_name())
                    .map(|i| (*field, i))
                    .ok_or_else(|| {
                        Error::load(
                            source,
                            format!(
                                "missing column '{}' (available: {:?})",
                                field.column_name(),
                                headers.iter().collect::<Vec<_>>()
                            ),
                        )
                    })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            required,
            formatted_name: position(Field::FormattedName.column_name()),
        })
    }

    fn build(&self, record: &csv::StringRecord) -> LaptopRecord {
        let cell = |field: Field| -> String {
            self.required
                .iter()
                .find(|(f, _)| *f == field)
                .and_then(|(_, i)| record.get(*i))
                .unwrap_or_default()
                .to_string()
        };

        let manufacturer = cell(Field::Manufacturer);
        let model_name = cell(Field::ModelName);
        let category = cell(Field::Category);
        let cpu = cell(Field::Cpu);

        let formatted_name = match self.formatted_name.and_then(|i| record.get(i)) {
            Some(name) => name.to_string(),
            None => LaptopRecord::format_name(&manufacturer, &model_name, &category, &cpu),
        };

        LaptopRecord {
            manufacturer,
            model_name,
            category,
            cpu,
            screen_size: cell(Field::ScreenSize),
            screen: cell(Field::Screen),
            ram: cell(Field::Ram),
            storage: cell(Field::Storage),
            gpu: cell(Field::Gpu),
            price: cell(Field::Price),
            formatted_name,
        }
    }
}

/// Decode Latin-1 bytes: every byte is the code point of the same value
fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| b as char).collect()
}

impl Catalog {
    /// Load the dataset file at `path`
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let source = path.display().to_string();
        let file = std::fs::File::open(path).map_err(|e| Error::load(&source, e))?;
        Self::from_reader(file, &source)
    }

    /// Load a dataset from any byte source; `source` names it in errors
    pub fn from_reader<R: Read>(mut reader: R, source: &str) -> Result<Self> {
        let mut bytes = Vec::new();
        reader
            .read_to_end(&mut bytes)
            .map_err(|e| Error::load(source, e))?;
        let text = decode_latin1(&bytes);

        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::Headers)
            .from_reader(text.as_bytes());

        let headers = csv_reader
            .headers()
            .map_err(|e| Error::load(source, format!("failed to read headers: {}", e)))?
            .clone();
        let columns: Vec<String> = headers.iter().map(str::to_string).collect();
        debug!("Catalog columns: {:?}", columns);

        let map = ColumnMap::resolve(&headers, source)?;

        let mut rows = Vec::new();
        for (i, result) in csv_reader.records().enumerate() {
            let record = result
                .map_err(|e| Error::load(source, format!("row {}: {}", i + 1, e)))?;
            rows.push(map.build(&record));
        }

        debug!("Catalog loaded from {}: {} rows", source, rows.len());
        Ok(Self { columns, rows })
    }

    /// Build a catalog directly from records
    pub fn from_records(rows: Vec<LaptopRecord>) -> Self {
        let mut columns: Vec<String> = Field::REQUIRED
            .iter()
            .map(|f| f.column_name().to_string())
            .collect();
        columns.push(Field::FormattedName.column_name().to_string());
        Self { columns, rows }
    }

    /// Trimmed header names, in file order
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[LaptopRecord] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row_at(&self, index: usize) -> Result<&LaptopRecord> {
        self.rows.get(index).ok_or(Error::IndexOutOfBounds {
            index,
            len: self.rows.len(),
        })
    }

    /// Distinct values of `field`, in order of first appearance
    pub fn distinct(&self, field: Field) -> Vec<String> {
        let mut seen = AHashSet::new();
        self.rows
            .iter()
            .map(|row| row.get(field))
            .filter(|value| seen.insert(*value))
            .map(str::to_string)
            .collect()
    }

    /// Rows whose `field` equals `value` exactly
    pub fn rows_where<'a>(&'a self, field: Field, value: &'a str) -> impl Iterator<Item = &'a LaptopRecord> + 'a {
        self.rows.iter().filter(move |row| row.get(field) == value)
    }
}
