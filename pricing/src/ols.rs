use ndarray::{Array1, Array2};

use crate::error::{PricingError, Result};
use crate::model::LinearModel;

/// Relative pivot threshold below which the system is treated as singular.
const PIVOT_EPS: f64 = 1e-9;

/// Fits an ordinary-least-squares model via the normal equations.
///
/// `x` is one row per sample, one column per feature. An intercept
/// column is added internally; no scaling or regularization is applied.
///
/// # Errors
/// Returns `PricingError::DegenerateFit` when the normal equations are
/// singular (e.g. a constant or duplicated feature column).
pub fn fit(x: &Array2<f64>, y: &Array1<f64>) -> Result<LinearModel> {
    let (rows, cols) = x.dim();
    if rows == 0 || rows != y.len() {
        return Err(PricingError::DegenerateFit("empty or mismatched training set"));
    }

    // Design matrix with a leading column of ones for the intercept.
    let mut design = Array2::ones((rows, cols + 1));
    design.slice_mut(ndarray::s![.., 1..]).assign(x);

    let xtx = design.t().dot(&design);
    let xty = design.t().dot(y);

    let params = solve(xtx, xty)?;
    let intercept = params[0];
    let coefficients = params.iter().skip(1).copied().collect();

    Ok(LinearModel::new(intercept, coefficients))
}

/// Solves `a · p = b` by Gaussian elimination with partial pivoting.
fn solve(mut a: Array2<f64>, mut b: Array1<f64>) -> Result<Array1<f64>> {
    let n = b.len();
    let scale = a.iter().fold(0.0_f64, |m, v| m.max(v.abs()));

    for col in 0..n {
        let pivot_row = (col..n)
            .max_by(|&i, &j| a[[i, col]].abs().total_cmp(&a[[j, col]].abs()))
            .unwrap_or(col);

        if a[[pivot_row, col]].abs() <= scale * PIVOT_EPS {
            return Err(PricingError::DegenerateFit("singular normal equations"));
        }

        if pivot_row != col {
            for k in 0..n {
                let tmp = a[[pivot_row, k]];
                a[[pivot_row, k]] = a[[col, k]];
                a[[col, k]] = tmp;
            }
            b.swap(pivot_row, col);
        }

        for row in col + 1..n {
            let factor = a[[row, col]] / a[[col, col]];
            for k in col..n {
                a[[row, k]] -= factor * a[[col, k]];
            }
            b[row] -= factor * b[col];
        }
    }

    let mut params = Array1::zeros(n);
    for row in (0..n).rev() {
        let tail: f64 = (row + 1..n).map(|k| a[[row, k]] * params[k]).sum();
        params[row] = (b[row] - tail) / a[[row, row]];
    }

    Ok(params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn recovers_exact_linear_data() {
        // y = 3 + 2*x0 - 5*x1, no noise.
        let x = array![
            [1.0, 2.0],
            [2.0, 1.0],
            [3.0, 4.0],
            [4.0, 0.0],
            [5.0, 3.0],
            [6.0, 6.0],
        ];
        let y: Array1<f64> = x
            .rows()
            .into_iter()
            .map(|r| 3.0 + 2.0 * r[0] - 5.0 * r[1])
            .collect();

        let model = fit(&x, &y).unwrap();

        assert!((model.intercept() - 3.0).abs() < 1e-8);
        assert!((model.coefficients()[0] - 2.0).abs() < 1e-8);
        assert!((model.coefficients()[1] + 5.0).abs() < 1e-8);
    }

    #[test]
    fn constant_column_is_degenerate() {
        // Second column duplicates the implicit intercept column.
        let x = array![[1.0, 1.0], [2.0, 1.0], [3.0, 1.0], [4.0, 1.0]];
        let y = array![1.0, 2.0, 3.0, 4.0];

        assert!(matches!(fit(&x, &y), Err(PricingError::DegenerateFit(_))));
    }

    #[test]
    fn empty_training_set_is_degenerate() {
        let x = Array2::zeros((0, 2));
        let y = Array1::zeros(0);

        assert!(matches!(fit(&x, &y), Err(PricingError::DegenerateFit(_))));
    }

    #[test]
    fn one_coefficient_per_feature() {
        let x = array![[1.0, 0.0, 2.0], [0.0, 1.0, 1.0], [2.0, 2.0, 0.0], [3.0, 1.0, 4.0]];
        let y = array![1.0, 2.0, 3.0, 4.0];

        let model = fit(&x, &y).unwrap();
        assert_eq!(model.coefficients().len(), 3);
    }
}
