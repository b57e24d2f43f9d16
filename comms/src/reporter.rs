use log::{debug, trace, warn};
use machine_learning::training::EpochSnapshot;

use crate::{msg::ProgressMsg, sink::Sink};

/// Turns epoch snapshots into progress messages and hands them to a `Sink`, one at a time.
///
/// Every message is delivered before the next one is built, nothing gets buffered.
pub struct Reporter<S: Sink> {
    sink: S,
    buf: Vec<u8>,
    delivered: usize,
}

impl<S: Sink> Reporter<S> {
    /// Creates a new `Reporter`.
    ///
    /// # Arguments
    /// * `sink` - Where the messages get delivered to.
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            buf: Vec::with_capacity(64),
            delivered: 0,
        }
    }

    /// Returns how many messages were handed to the sink so far.
    pub fn delivered(&self) -> usize {
        self.delivered
    }

    /// Delivers the message for a single epoch.
    pub fn report(&mut self, snapshot: &EpochSnapshot) {
        self.send(&ProgressMsg::from(snapshot));
    }

    /// Delivers the terminal message and gives the sink back.
    pub fn complete(mut self) -> S {
        self.send(&ProgressMsg::complete());
        debug!(delivered = self.delivered; "progress stream complete");
        self.sink
    }

    /// Reports every snapshot as it is produced and then completes the stream.
    ///
    /// `snapshots` is pulled lazily, so each epoch's message reaches the sink before the
    /// following epoch is computed.
    ///
    /// # Returns
    /// The sink, after the terminal message was delivered.
    pub fn stream<I>(mut self, snapshots: I) -> S
    where
        I: IntoIterator<Item = EpochSnapshot>,
    {
        debug!("streaming progress");

        for snapshot in snapshots {
            self.report(&snapshot);
        }

        self.complete()
    }

    fn send(&mut self, msg: &ProgressMsg) {
        match msg.encode(&mut self.buf) {
            Ok(payload) => {
                trace!(payload = payload; "delivering");
                self.sink.deliver(payload);
                self.delivered += 1;
            }
            Err(e) => warn!("failed to encode {msg:?}, dropping it: {e}"),
        }
    }
}
