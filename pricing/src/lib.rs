mod artifact;
mod currency;
mod engine;
mod error;
mod estimate;
mod feature;
mod model;
mod ols;
mod synth;

pub use artifact::{read_model, write_model, ARTIFACT_PATH};
pub use currency::format_brl;
pub use engine::Engine;
pub use error::{PricingError, Result};
pub use estimate::{
    classify, estimate, Estimate, FeatureImpact, Query, Recommendation, ALIGNED_MARGIN,
};
pub use feature::{Feature, FEATURES};
pub use model::LinearModel;
pub use synth::{generate, HousingData, PRICE_FLOOR, RECORDS, SEED};
