use ndarray::{Array1, Array2};
use ndarray_rand::RandomExt;
use rand::{rngs::StdRng, Rng, SeedableRng};
use rand_distr::{Normal, Uniform};

use crate::error::Result;
use crate::feature::FEATURES;

/// Seed used for the canonical dataset. Every process run synthesizes
/// the exact same records.
pub const SEED: u64 = 42;

/// Number of synthesized records.
pub const RECORDS: usize = 1000;

/// No synthesized price is ever below this floor.
pub const PRICE_FLOOR: f64 = 100_000.0;

const AREA_PRICE: f64 = 1_200.0;
const BEDROOM_PRICE: f64 = 40_000.0;
const DISTANCE_PRICE: f64 = -9_000.0;
const NOISE_STD: f64 = 70_000.0;

/// The synthesized training set.
///
/// `features` is one row per record, one column per entry of
/// [`FEATURES`], in declaration order.
#[derive(Debug, Clone)]
pub struct HousingData {
    features: Array2<f64>,
    prices: Array1<f64>,
}

impl HousingData {
    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    pub fn features(&self) -> &Array2<f64> {
        &self.features
    }

    pub fn prices(&self) -> &Array1<f64> {
        &self.prices
    }
}

/// Synthesizes [`RECORDS`] housing records from the given seed.
///
/// The target is a known linear combination of the features plus
/// Gaussian noise, floored at [`PRICE_FLOOR`].
///
/// # Errors
/// Returns `PricingError::Synthesis` if a sampling distribution cannot
/// be constructed.
pub fn generate(seed: u64) -> Result<HousingData> {
    let mut rng = StdRng::seed_from_u64(seed);

    let area = Array1::from_shape_fn(RECORDS, |_| rng.random_range(50..300) as f64);
    let bedrooms = Array1::from_shape_fn(RECORDS, |_| rng.random_range(1..=5) as f64);
    let distance = Array1::random_using(RECORDS, Uniform::new(1.0, 20.0)?, &mut rng);
    let noise = Array1::random_using(RECORDS, Normal::new(0.0, NOISE_STD)?, &mut rng);

    let prices = (&area * AREA_PRICE + &bedrooms * BEDROOM_PRICE + &distance * DISTANCE_PRICE
        + noise)
        .mapv(|p| p.max(PRICE_FLOOR));

    let mut features = Array2::zeros((RECORDS, FEATURES.len()));
    features.column_mut(0).assign(&area);
    features.column_mut(1).assign(&bedrooms);
    features.column_mut(2).assign(&distance);

    Ok(HousingData { features, prices })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_price_below_floor() {
        let data = generate(SEED).unwrap();
        assert!(data.prices().iter().all(|&p| p >= PRICE_FLOOR));
    }

    #[test]
    fn shapes_match_declared_features() {
        let data = generate(SEED).unwrap();
        assert_eq!(data.len(), RECORDS);
        assert_eq!(data.features().dim(), (RECORDS, FEATURES.len()));
    }

    #[test]
    fn columns_stay_in_bounds() {
        let data = generate(SEED).unwrap();

        for row in data.features().rows() {
            assert!((50.0..300.0).contains(&row[0]));
            assert!((1.0..=5.0).contains(&row[1]));
            assert_eq!(row[1], row[1].trunc());
            assert!((1.0..20.0).contains(&row[2]));
        }
    }

    #[test]
    fn same_seed_same_records() {
        let a = generate(SEED).unwrap();
        let b = generate(SEED).unwrap();
        assert_eq!(a.features(), b.features());
        assert_eq!(a.prices(), b.prices());
    }

    #[test]
    fn different_seed_different_records() {
        let a = generate(SEED).unwrap();
        let b = generate(SEED + 1).unwrap();
        assert_ne!(a.prices(), b.prices());
    }
}
