use std::iter::FusedIterator;

use log::trace;

use super::EpochSnapshot;
use crate::{
    arch::{LinearModel, loss::LossFn},
    dataset::Dataset,
    optimization::Optimizer,
};

/// The amount of epochs every training run goes through.
pub const EPOCHS: usize = 200;

/// Fits a `LinearModel` to a dataset, one full batch epoch at a time.
///
/// There is no convergence check, `into_epochs` always runs up to exactly `EPOCHS` epochs.
pub struct Trainer<'d, O, L>
where
    O: Optimizer,
    L: LossFn,
{
    model: LinearModel,
    optimizer: O,
    dataset: Dataset<'d>,
    loss_fn: L,

    grad: Vec<f64>,
    epoch: usize,
}

impl<'d, O, L> Trainer<'d, O, L>
where
    O: Optimizer,
    L: LossFn,
{
    /// Returns a new `Trainer` whose model starts with every parameter at zero.
    ///
    /// # Arguments
    /// * `optimizer` - Dictates how the parameters are stepped each epoch.
    /// * `dataset` - The points the model gets fitted to.
    /// * `loss_fn` - Measures the difference between the model's output and the expected one.
    pub fn new(optimizer: O, dataset: Dataset<'d>, loss_fn: L) -> Self {
        let model = LinearModel::new();
        let grad = vec![0.0; model.size()];

        Self {
            model,
            optimizer,
            dataset,
            loss_fn,
            grad,
            epoch: 0,
        }
    }

    /// Returns the amount of epochs run so far.
    pub fn epoch(&self) -> usize {
        self.epoch
    }

    pub fn model(&self) -> &LinearModel {
        &self.model
    }

    /// Runs a single epoch.
    ///
    /// The loss is measured before the update and reported next to the updated parameters.
    ///
    /// # Returns
    /// The snapshot of the epoch that just finished.
    pub fn step(&mut self) -> EpochSnapshot {
        let loss = self.model.backprop(
            self.dataset.x(),
            self.dataset.y(),
            &self.loss_fn,
            &mut self.grad,
        );

        self.optimizer
            .update_params(self.model.params_mut(), &self.grad);
        self.epoch += 1;

        let snapshot = EpochSnapshot {
            epoch: self.epoch,
            slope: self.model.slope(),
            intercept: self.model.intercept(),
            loss,
        };

        trace!(
            epoch = snapshot.epoch,
            m = snapshot.slope,
            b = snapshot.intercept,
            loss = snapshot.loss;
            "epoch finished"
        );

        snapshot
    }

    /// Turns this trainer into an iterator over the remaining epochs of the run.
    ///
    /// Every call to `next` runs exactly one epoch, nothing is computed ahead.
    pub fn into_epochs(self) -> Epochs<'d, O, L> {
        Epochs { trainer: self }
    }
}

/// Lazily runs a `Trainer` up to `EPOCHS` epochs, see `Trainer::into_epochs`.
pub struct Epochs<'d, O, L>
where
    O: Optimizer,
    L: LossFn,
{
    trainer: Trainer<'d, O, L>,
}

impl<O, L> Iterator for Epochs<'_, O, L>
where
    O: Optimizer,
    L: LossFn,
{
    type Item = EpochSnapshot;

    fn next(&mut self) -> Option<Self::Item> {
        if self.trainer.epoch >= EPOCHS {
            return None;
        }

        Some(self.trainer.step())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = EPOCHS.saturating_sub(self.trainer.epoch);
        (remaining, Some(remaining))
    }
}

impl<O, L> ExactSizeIterator for Epochs<'_, O, L>
where
    O: Optimizer,
    L: LossFn,
{
}

impl<O, L> FusedIterator for Epochs<'_, O, L>
where
    O: Optimizer,
    L: LossFn,
{
}
