pub mod callback;
mod ffi;

use comms::{Reporter, Sink};
use log::info;
use machine_learning::{
    arch::loss::Mse, dataset::MONOPOLY, optimization::GradientDescent, training::Trainer,
};

pub use callback::{CallbackSink, StreamDataFn};
pub use ffi::{register_stream_data, run_gradient_descent};

/// Fits the embedded dataset with gradient descent and streams the progress into `sink`.
///
/// Every call starts from a fresh model, nothing is shared between runs. The learning rate
/// is not validated.
///
/// # Arguments
/// * `learning_rate` - The step length of the optimizer.
/// * `sink` - Receives one payload per epoch and then the terminal one.
///
/// # Returns
/// The sink, once the terminal payload was delivered.
pub fn run<S: Sink>(learning_rate: f64, sink: S) -> S {
    info!(learning_rate = learning_rate; "starting gradient descent");

    let optimizer = GradientDescent::new(learning_rate);
    let trainer = Trainer::new(optimizer, MONOPOLY, Mse);
    let sink = Reporter::new(sink).stream(trainer.into_epochs());

    info!("gradient descent finished");
    sink
}

#[cfg(test)]
mod tests {
    use machine_learning::training::EPOCHS;

    use super::*;

    #[test]
    fn run_streams_every_epoch_and_the_sentinel() {
        let payloads = run(0.01, Vec::new());

        assert_eq!(payloads.len(), EPOCHS + 1);
        assert_eq!(
            payloads[0],
            r#"{"epoch": 1, "m": 16.8000, "b": 5.1400, "loss": 123645.0000}"#
        );
        assert_eq!(payloads[EPOCHS], r#"{"epoch": "complete"}"#);
    }

    #[test]
    fn runs_do_not_share_state() {
        let first = run(0.05, Vec::new());
        let second = run(0.05, Vec::new());

        assert_eq!(first, second);
    }

    #[test]
    fn absent_sink_still_runs_to_completion() {
        assert!(run(0.01, None::<Vec<String>>).is_none());
    }
}
