mod msg;
mod reporter;
mod serialize;
mod sink;

pub use msg::{ProgressMsg, Sentinel};
pub use reporter::Reporter;
pub use serialize::WireFormatter;
pub use sink::Sink;
