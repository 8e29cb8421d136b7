use serde::{Deserialize, Serialize};

/// A fitted ordinary-least-squares model.
///
/// Holds exactly one coefficient per entry of
/// [`FEATURES`](crate::FEATURES), in declaration order. Immutable once
/// fit; the type keeps its fields private so the invariant cannot be
/// broken after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearModel {
    intercept: f64,
    coefficients: Vec<f64>,
}

impl LinearModel {
    pub(crate) fn new(intercept: f64, coefficients: Vec<f64>) -> Self {
        Self { intercept, coefficients }
    }

    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// Point prediction for a single row, `intercept + Σ cᵢ·xᵢ`.
    ///
    /// The output is raw model output; it is deliberately not floored
    /// at the training-price floor.
    pub fn predict(&self, features: &[f64]) -> f64 {
        debug_assert_eq!(features.len(), self.coefficients.len());

        self.intercept
            + self
                .coefficients
                .iter()
                .zip(features)
                .map(|(c, x)| c * x)
                .sum::<f64>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn predict_is_the_linear_form() {
        let model = LinearModel::new(10_000.0, vec![1_200.0, 40_000.0, -9_000.0]);
        let x = [100.0, 2.0, 5.0];

        let expected = 10_000.0 + 1_200.0 * 100.0 + 40_000.0 * 2.0 - 9_000.0 * 5.0;
        assert!((model.predict(&x) - expected).abs() < 1e-6);
    }

    #[test]
    fn json_round_trip() {
        let model = LinearModel::new(1.5, vec![2.0, -3.0, 4.5]);
        let json = serde_json::to_string(&model).unwrap();
        let back: LinearModel = serde_json::from_str(&json).unwrap();
        assert_eq!(model, back);
    }
}
