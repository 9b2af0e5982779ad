pub mod error;
pub mod service;
pub mod rest;

pub use error::ApiError;
pub use service::{
    LaptopOptions, ModelsByManufacturer, OptionsService, PurposeOption, Recommendation,
    RecommendationService, MAX_RECOMMENDATIONS,
};
pub use rest::{configure, RecommendRequest, RestApi};
