/// The state of a training run right after one epoch.
///
/// `slope` and `intercept` are the parameters *after* the epoch's update while `loss` was
/// measured with the parameters as they were *before* it. Consumers pair them as is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EpochSnapshot {
    /// 1-based index of the epoch.
    pub epoch: usize,
    pub slope: f64,
    pub intercept: f64,
    pub loss: f64,
}
