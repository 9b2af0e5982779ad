use serde::{Deserialize, Serialize};
use std::fmt;

/// A catalog column that can be queried or encoded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Field {
    Manufacturer,
    ModelName,
    Category,
    ScreenSize,
    Screen,
    Cpu,
    Ram,
    Storage,
    Gpu,
    Price,
    FormattedName,
}

impl Field {
    /// Columns every dataset must carry
    pub const REQUIRED: [Field; 10] = [
        Field::Manufacturer,
        Field::ModelName,
        Field::Category,
        Field::ScreenSize,
        Field::Screen,
        Field::Cpu,
        Field::Ram,
        Field::Storage,
        Field::Gpu,
        Field::Price,
    ];

    /// Header name as it appears in the dataset (after trimming)
    pub fn column_name(&self) -> &'static str {
        match self {
            Field::Manufacturer => "Manufacturer",
            Field::ModelName => "Model Name",
            Field::Category => "Category",
            Field::ScreenSize => "Screen Size",
            Field::Screen => "Screen",
            Field::Cpu => "CPU",
            Field::Ram => "RAM",
            Field::Storage => "Storage",
            Field::Gpu => "GPU",
            Field::Price => "Price (Euros)",
            Field::FormattedName => "Formatted Name",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column_name())
    }
}

/// One immutable row of the laptop catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaptopRecord {
    pub manufacturer: String,
    pub model_name: String,
    pub category: String,
    pub cpu: String,
    pub screen_size: String,
    pub screen: String,
    pub ram: String,
    pub storage: String,
    pub gpu: String,
    /// Price in the source currency, verbatim from the dataset
    pub price: String,
    pub formatted_name: String,
}

impl LaptopRecord {
    /// Display name used to tell catalog entries apart
    pub fn format_name(manufacturer: &str, model_name: &str, category: &str, cpu: &str) -> String {
        format!("{} {} {} {}", manufacturer, model_name, category, cpu)
    }

    #[inline]
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Manufacturer => &self.manufacturer,
            Field::ModelName => &self.model_name,
            Field::Category => &self.category,
            Field::ScreenSize => &self.screen_size,
            Field::Screen => &self.screen,
            Field::Cpu => &self.cpu,
            Field::Ram => &self.ram,
            Field::Storage => &self.storage,
            Field::Gpu => &self.gpu,
            Field::Price => &self.price,
            Field::FormattedName => &self.formatted_name,
        }
    }
}
