use ndarray::{Array1, ArrayView1};

use super::LossFn;

/// Mean squared error loss function.
#[derive(Debug, Default, Clone, Copy)]
pub struct Mse;

impl Mse {
    /// Returns a new `Mse`.
    pub fn new() -> Self {
        Self
    }
}

impl LossFn for Mse {
    fn loss(&self, y_pred: ArrayView1<f64>, y: ArrayView1<f64>) -> f64 {
        (&y_pred - &y)
            .mapv(|x| x.powi(2))
            .mean()
            .unwrap_or_default()
    }

    fn loss_prime(&self, y_pred: ArrayView1<f64>, y: ArrayView1<f64>) -> Array1<f64> {
        (&y_pred - &y) * (2.0 / y_pred.len() as f64)
    }
}

#[cfg(test)]
mod tests {
    use ndarray::array;

    use super::*;

    #[test]
    fn loss_is_the_mean_of_squared_errors() {
        let y_pred = array![1.0, 2.0, 3.0];
        let y = array![1.0, 4.0, 0.0];

        assert_eq!(Mse.loss(y_pred.view(), y.view()), (0.0 + 4.0 + 9.0) / 3.0);
    }

    #[test]
    fn loss_prime_scales_errors_by_two_over_n() {
        let y_pred = array![2.0, 0.0];
        let y = array![1.0, 3.0];

        let prime = Mse.loss_prime(y_pred.view(), y.view());

        assert_eq!(prime, array![1.0, -3.0]);
    }

    #[test]
    fn perfect_predictions_have_no_loss() {
        let y = array![10.0, 50.0, 150.0];

        assert_eq!(Mse::new().loss(y.view(), y.view()), 0.0);
    }
}
