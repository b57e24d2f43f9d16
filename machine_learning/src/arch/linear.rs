use ndarray::{Array1, ArrayView1};

use super::loss::LossFn;

const SLOPE: usize = 0;
const INTERCEPT: usize = 1;

/// A single input, single output linear model `y = slope * x + intercept`.
///
/// Both parameters live in one contiguous buffer so optimizers can step them as a slice,
/// the slope first and the intercept second.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct LinearModel {
    params: [f64; 2],
}

impl LinearModel {
    /// Returns a new `LinearModel` with both parameters set to zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the amount of parameters in the model.
    pub fn size(&self) -> usize {
        self.params.len()
    }

    pub fn slope(&self) -> f64 {
        self.params[SLOPE]
    }

    pub fn intercept(&self) -> f64 {
        self.params[INTERCEPT]
    }

    pub fn params_mut(&mut self) -> &mut [f64] {
        &mut self.params
    }

    /// Computes the model's predictions for every input.
    pub fn forward(&self, x: ArrayView1<f64>) -> Array1<f64> {
        let (slope, intercept) = (self.slope(), self.intercept());
        x.mapv(|x| slope * x + intercept)
    }

    /// Computes the loss of the model's current parameters over the provided points and writes
    /// the gradient of that loss with respect to the parameters into `grad`.
    ///
    /// The parameters are not modified, the caller decides how to step them.
    ///
    /// # Arguments
    /// * `x` - The inputs.
    /// * `y` - The expected outputs.
    /// * `loss_fn` - The loss function.
    /// * `grad` - A buffer of `size()` values the gradient gets written into.
    ///
    /// # Returns
    /// The loss before any update.
    pub fn backprop<L: LossFn>(
        &self,
        x: ArrayView1<f64>,
        y: ArrayView1<f64>,
        loss_fn: &L,
        grad: &mut [f64],
    ) -> f64 {
        let y_pred = self.forward(x);
        let loss = loss_fn.loss(y_pred.view(), y);
        let delta = loss_fn.loss_prime(y_pred.view(), y);

        grad[SLOPE] = delta.dot(&x);
        grad[INTERCEPT] = delta.sum();

        loss
    }
}

#[cfg(test)]
mod tests {
    use ndarray::array;

    use super::*;
    use crate::arch::loss::Mse;

    #[test]
    fn starts_at_the_origin() {
        let model = LinearModel::new();

        assert_eq!(model.size(), 2);
        assert_eq!(model.slope(), 0.0);
        assert_eq!(model.intercept(), 0.0);
    }

    #[test]
    fn forward_applies_slope_and_intercept() {
        let mut model = LinearModel::new();
        model.params_mut().copy_from_slice(&[2.0, 1.0]);

        let y_pred = model.forward(array![0.0, 1.0, 2.0].view());

        assert_eq!(y_pred, array![1.0, 3.0, 5.0]);
    }

    #[test]
    fn backprop_on_the_origin() {
        let model = LinearModel::new();
        let x = array![0.0, 1.0, 2.0, 3.0, 4.0];
        let y = array![10.0, 50.0, 150.0, 450.0, 625.0];
        let mut grad = [0.0; 2];

        let loss = model.backprop(x.view(), y.view(), &Mse, &mut grad);

        assert_eq!(loss, 123645.0);
        assert!((grad[0] + 1680.0).abs() < 1e-9, "got dm = {}", grad[0]);
        assert!((grad[1] + 514.0).abs() < 1e-9, "got db = {}", grad[1]);
    }

    #[test]
    fn backprop_leaves_params_untouched() {
        let model = LinearModel::new();
        let x = array![1.0, 2.0];
        let y = array![3.0, 5.0];
        let mut grad = [0.0; 2];

        model.backprop(x.view(), y.view(), &Mse, &mut grad);

        assert_eq!(model, LinearModel::new());
    }
}
