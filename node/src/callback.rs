use std::ffi::{CString, c_char};

use comms::Sink;
use log::{trace, warn};
use parking_lot::RwLock;

/// The host function progress payloads are handed to.
///
/// `payload` points to a NUL terminated UTF-8 string that is only valid during the call.
pub type StreamDataFn = unsafe extern "C" fn(payload: *const c_char);

static STREAM_DATA: RwLock<Option<StreamDataFn>> = RwLock::new(None);

/// Installs `callback` as the host function, `None` removes the current one.
pub fn register(callback: Option<StreamDataFn>) {
    *STREAM_DATA.write() = callback;
}

/// Returns the host function registered right now, if any.
pub fn registered() -> Option<StreamDataFn> {
    *STREAM_DATA.read()
}

/// Delivers payloads to the host function registered at delivery time.
///
/// With nothing registered the payload is dropped. The registry lock is released before the
/// host is called, so the host may register again from inside its callback.
#[derive(Debug, Default, Clone, Copy)]
pub struct CallbackSink;

impl Sink for CallbackSink {
    fn deliver(&mut self, payload: &str) {
        let Some(callback) = registered() else {
            trace!("no stream_data callback registered, dropping payload");
            return;
        };

        let payload = match CString::new(payload) {
            Ok(payload) => payload,
            Err(e) => {
                warn!("payload can't cross the host boundary, dropping it: {e}");
                return;
            }
        };

        // SAFETY: `payload` stays alive until the call returns and it's a valid NUL
        //         terminated string, which is all `StreamDataFn` asks for.
        unsafe { callback(payload.as_ptr()) };
    }
}

#[cfg(test)]
mod tests {
    use std::{ffi::CStr, sync::atomic::{AtomicUsize, Ordering}};

    use super::*;

    static CALLS: AtomicUsize = AtomicUsize::new(0);

    unsafe extern "C" fn count(payload: *const c_char) {
        // SAFETY: `CallbackSink` always hands over a valid C string.
        let payload = unsafe { CStr::from_ptr(payload) };
        assert_eq!(payload.to_str().unwrap(), "hello");
        CALLS.fetch_add(1, Ordering::SeqCst);
    }

    #[test]
    fn delivers_only_while_registered() {
        let mut sink = CallbackSink;

        register(None);
        assert!(registered().is_none());
        sink.deliver("hello");
        assert_eq!(CALLS.load(Ordering::SeqCst), 0);

        register(Some(count));
        assert!(registered().is_some());
        sink.deliver("hello");
        sink.deliver("hello");
        assert_eq!(CALLS.load(Ordering::SeqCst), 2);

        register(None);
        sink.deliver("hello");
        assert_eq!(CALLS.load(Ordering::SeqCst), 2);

        register(Some(count));
        sink.deliver("hel\0lo");
        assert_eq!(CALLS.load(Ordering::SeqCst), 2);
        register(None);
    }
}
