/// One input variable of the pricing model.
///
/// The declaration order of [`FEATURES`] is load-bearing: it fixes the
/// column order of the design matrix, the coefficient order of the
/// fitted model, the row order of the impact table, and the order of
/// the UI controls.
#[derive(Debug, Clone, Copy)]
pub struct Feature {
    pub key: &'static str,
    pub label: &'static str,
    pub min: f64,
    pub max: f64,
    /// Step used by the interactive controls.
    pub step: f64,
    pub default: f64,
}

pub const FEATURES: [Feature; 3] = [
    Feature {
        key: "area_sqm",
        label: "Area (sqm)",
        min: 50.0,
        max: 300.0,
        step: 5.0,
        default: 100.0,
    },
    Feature {
        key: "bedrooms",
        label: "Bedrooms",
        min: 1.0,
        max: 5.0,
        step: 1.0,
        default: 2.0,
    },
    Feature {
        key: "distance_downtown_km",
        label: "Distance from Downtown (km)",
        min: 1.0,
        max: 20.0,
        step: 0.5,
        default: 5.0,
    },
];
