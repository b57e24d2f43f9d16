use ndarray::ArrayView1;

use crate::error::{MlErr, Result};

/// The points the model gets fitted to, an input sequence and an output sequence of
/// equal and non zero length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dataset<'a> {
    x: &'a [f64],
    y: &'a [f64],
}

/// The embedded dataset every run is fitted to.
pub const MONOPOLY: Dataset<'static> = Dataset {
    x: &[0.0, 1.0, 2.0, 3.0, 4.0],
    y: &[10.0, 50.0, 150.0, 450.0, 625.0],
};

const _: () = assert!(MONOPOLY.x.len() == MONOPOLY.y.len() && !MONOPOLY.x.is_empty());

impl<'a> Dataset<'a> {
    /// Creates a new `Dataset`.
    ///
    /// # Arguments
    /// * `x` - The inputs.
    /// * `y` - The expected outputs, one per input.
    ///
    /// # Errors
    /// `MlErr::EmptyDataset` if there are no points and `MlErr::SizeMismatch` if both
    /// sequences differ in length.
    pub fn new(x: &'a [f64], y: &'a [f64]) -> Result<Self> {
        if x.is_empty() {
            return Err(MlErr::EmptyDataset);
        }

        if x.len() != y.len() {
            return Err(MlErr::SizeMismatch {
                a: "x",
                b: "y",
                got: y.len(),
                expected: x.len(),
            });
        }

        Ok(Self { x, y })
    }

    /// Returns the amount of points.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// A `Dataset` is never empty, so this is always `false`.
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn x(&self) -> ArrayView1<'a, f64> {
        ArrayView1::from(self.x)
    }

    pub fn y(&self) -> ArrayView1<'a, f64> {
        ArrayView1::from(self.y)
    }
}
