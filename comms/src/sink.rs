use log::trace;

/// Where progress payloads get delivered to.
///
/// Delivery is fire and forget, a sink reports nothing back and a payload is never retried.
pub trait Sink {
    fn deliver(&mut self, payload: &str);
}

/// Keeps every payload in memory, in delivery order.
impl Sink for Vec<String> {
    fn deliver(&mut self, payload: &str) {
        self.push(payload.to_owned());
    }
}

/// A missing sink drops every payload.
impl<S: Sink> Sink for Option<S> {
    fn deliver(&mut self, payload: &str) {
        match self {
            Some(sink) => sink.deliver(payload),
            None => trace!("no sink attached, dropping payload"),
        }
    }
}

impl<S: Sink + ?Sized> Sink for &mut S {
    fn deliver(&mut self, payload: &str) {
        (**self).deliver(payload);
    }
}

impl<S: Sink + ?Sized> Sink for Box<S> {
    fn deliver(&mut self, payload: &str) {
        (**self).deliver(payload);
    }
}
