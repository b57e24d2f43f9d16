use crate::callback::{self, CallbackSink, StreamDataFn};

/// Runs a full training with `learning_rate`, handing every progress payload to the
/// registered `stream_data` callback. Returns once the terminal payload was handed over.
#[unsafe(no_mangle)]
pub extern "C" fn run_gradient_descent(learning_rate: f64) {
    crate::run(learning_rate, CallbackSink);
}

/// Registers the host's `stream_data` callback. Passing a null pointer removes it, later
/// payloads are then dropped.
#[unsafe(no_mangle)]
pub extern "C" fn register_stream_data(callback: Option<StreamDataFn>) {
    callback::register(callback);
}
