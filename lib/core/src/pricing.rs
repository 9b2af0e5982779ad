use crate::error::{Error, Result};
use crate::laptop::LaptopRecord;

/// Tanzanian Shillings per Euro
pub const EUR_TO_TZS: f64 = 2874.92;

/// Parse a dataset price, accepting either a decimal comma or a decimal point
pub fn parse_price(raw: &str) -> Option<f64> {
    let value: f64 = raw.trim().replace(',', ".").parse().ok()?;
    (value.is_finite() && value >= 0.0).then_some(value)
}

/// Fixed-rate conversion from the catalog currency to the display currency
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurrencyConverter {
    rate: f64,
}

impl Default for CurrencyConverter {
    fn default() -> Self {
        Self { rate: EUR_TO_TZS }
    }
}

impl CurrencyConverter {
    pub fn new(rate: f64) -> Self {
        Self { rate }
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Convert and round to whole units, halves to even
    #[inline]
    pub fn convert(&self, amount: f64) -> u64 {
        (amount * self.rate).round_ties_even().max(0.0) as u64
    }

    /// Converted price of a catalog row
    pub fn convert_record(&self, record: &LaptopRecord) -> Result<u64> {
        parse_price(&record.price)
            .map(|price| self.convert(price))
            .ok_or_else(|| Error::InvalidPrice {
                name: record.formatted_name.clone(),
                raw: record.price.clone(),
            })
    }
}
