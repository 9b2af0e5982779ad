//! Categorical encoder tables
//!
//! Maps raw string values of the categorical columns to the integer codes the
//! trained neighbor index was fitted on. Each field carries its own vocabulary;
//! the code of a value is its position in the training-time class list.
//! Matching is exact: no case folding, trimming or fuzzy lookup.

use crate::error::{Error, Result};
use crate::laptop::Field;
use crate::vector::Vector;
use ahash::AHashMap;
use serde::Deserialize;
use std::collections::HashMap;

/// Vocabulary of a single field
#[derive(Debug, Clone, Default)]
struct Vocabulary {
    classes: Vec<String>,
    codes: AHashMap<String, u32>,
}

impl Vocabulary {
    fn new(field: &str, classes: Vec<String>) -> Result<Self> {
        let mut codes = AHashMap::with_capacity(classes.len());
        for (code, class) in classes.iter().enumerate() {
            if codes.insert(class.clone(), code as u32).is_some() {
                return Err(Error::load(
                    "label encoders",
                    format!("field '{}' lists class {:?} twice", field, class),
                ));
            }
        }
        Ok(Self { classes, codes })
    }
}

/// Per-field label encoders produced by the training process
///
/// Deserializes from a JSON object keyed by column name, each value being the
/// ordered class list of that column.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(try_from = "HashMap<String, Vec<String>>")]
pub struct EncoderTable {
    fields: AHashMap<String, Vocabulary>,
}

impl EncoderTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the class list for a field, replacing any previous one
    pub fn with_field(mut self, field: Field, classes: Vec<String>) -> Result<Self> {
        let name = field.column_name();
        self.fields.insert(name.to_string(), Vocabulary::new(name, classes)?);
        Ok(self)
    }

    /// Integer code of `value` within `field`'s vocabulary
    pub fn encode(&self, field: Field, value: &str) -> Result<u32> {
        let vocab = self
            .fields
            .get(field.column_name())
            .ok_or_else(|| Error::UnknownField(field.column_name().to_string()))?;

        vocab.codes.get(value).copied().ok_or_else(|| Error::UnknownValue {
            field: field.column_name().to_string(),
            value: value.to_string(),
        })
    }

    /// Encode a full query into a feature vector, in the order given.
    /// Stops at the first value that is not in the vocabulary.
    pub fn encode_all(&self, inputs: &[(Field, &str)]) -> Result<Vector> {
        let codes = inputs
            .iter()
            .map(|(field, value)| self.encode(*field, value).map(|code| code as f64))
            .collect::<Result<Vec<f64>>>()?;
        Ok(Vector::new(codes))
    }

    /// Training-time classes of a field, in code order
    pub fn classes(&self, field: Field) -> Option<&[String]> {
        self.fields
            .get(field.column_name())
            .map(|v| v.classes.as_slice())
    }

    pub fn contains_field(&self, field: Field) -> bool {
        self.fields.contains_key(field.column_name())
    }
}

impl TryFrom<HashMap<String, Vec<String>>> for EncoderTable {
    type Error = Error;

    fn try_from(raw: HashMap<String, Vec<String>>) -> Result<Self> {
        let mut fields = AHashMap::with_capacity(raw.len());
        for (name, classes) in raw {
            let vocab = Vocabulary::new(&name, classes)?;
            fields.insert(name, vocab);
        }
        Ok(Self { fields })
    }
}
