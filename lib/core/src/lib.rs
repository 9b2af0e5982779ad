//! # laprec Core
//!
//! Core library for the laprec laptop recommendation service.
//!
//! This crate provides the data types and algorithms the service applies:
//!
//! - [`LaptopRecord`] - One immutable row of the laptop catalog
//! - [`EncoderTable`] - Per-field label encoders from the training process
//! - [`NeighborIndex`] - Pre-trained nearest-neighbor index over encoded rows
//! - [`CurrencyConverter`] - Fixed-rate price conversion
//! - [`Purpose`] - User-facing purposes and the categories they map to
//!
//! ## Example
//!
//! ```rust
//! use laprec_core::{Distance, EncoderTable, Field, NeighborIndex, Vector};
//!
//! let encoders = EncoderTable::new()
//!     .with_field(Field::Manufacturer, vec!["Acer".into(), "Apple".into()])
//!     .unwrap();
//!
//! let index = NeighborIndex::new(
//!     vec![Vector::new(vec![0.0]), Vector::new(vec![1.0])],
//!     Distance::Euclidean,
//!     5,
//! )
//! .unwrap();
//!
//! let query = encoders.encode_all(&[(Field::Manufacturer, "Apple")]).unwrap();
//! let neighbors = index.query(&query, 1).unwrap();
//! assert_eq!(neighbors[0].index, 1);
//! ```

pub mod error;
pub mod laptop;
pub mod encoder;
pub mod vector;
pub mod neighbors;
pub mod pricing;
pub mod purpose;

pub use error::{Error, Result};
pub use laptop::{Field, LaptopRecord};
pub use encoder::EncoderTable;
pub use vector::Vector;
pub use neighbors::{Distance, Neighbor, NeighborIndex};
pub use pricing::{parse_price, CurrencyConverter, EUR_TO_TZS};
pub use purpose::Purpose;
