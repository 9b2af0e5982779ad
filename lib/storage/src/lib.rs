pub mod catalog;
pub mod artifacts;
pub mod manager;

pub use catalog::Catalog;
pub use artifacts::{load_encoders, load_neighbor_index};
pub use manager::{ModelStore, StoreConfig};
