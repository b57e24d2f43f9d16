use std::{
    ffi::{CStr, c_char},
    io::{self, Write},
};

use anyhow::Result;
use log::{info, warn};

mod config;
mod event;

use config::HostConfig;
use event::HostEvent;

unsafe extern "C" fn stream_data(payload: *const c_char) {
    // SAFETY: the core always hands over a valid NUL terminated string that outlives the call.
    let payload = unsafe { CStr::from_ptr(payload) };

    let event = match payload.to_str() {
        Ok(payload) => HostEvent::from_payload(payload),
        Err(e) => HostEvent::StreamError {
            error: e.to_string(),
        },
    };

    if let Err(e) = emit(&event) {
        warn!("failed to write {event:?}: {e}");
    }
}

fn emit(event: &HostEvent) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer(&mut stdout, event)?;
    writeln!(stdout)?;
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    let config = HostConfig::from_env()?;
    info!(learning_rate = config.learning_rate; "host ready");

    node::register_stream_data(Some(stream_data));
    emit(&HostEvent::TrainingStarted {
        learning_rate: config.learning_rate,
    })?;

    node::run_gradient_descent(config.learning_rate);

    info!("wrapping up");
    Ok(())
}
