use std::io::{self, Write};

use serde::Serialize;
use serde_json::ser::Formatter;

/// JSON formatter for the progress wire format.
///
/// Floats are written in fixed point with exactly four decimals, keys are followed by `": "`
/// and members are separated by `", "`. Rust's float formatting does not depend on the
/// locale, so the output is the same on every platform.
#[derive(Debug, Default, Clone, Copy)]
pub struct WireFormatter;

impl Formatter for WireFormatter {
    fn write_f64<W>(&mut self, writer: &mut W, value: f64) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        write!(writer, "{value:.4}")
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        if first {
            return Ok(());
        }

        writer.write_all(b", ")
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        writer.write_all(b": ")
    }
}

/// Serializes `value` into `buf` using the `WireFormatter`.
///
/// `buf` is cleared first so it can be reused between messages.
///
/// # Returns
/// The written text, borrowed from `buf`.
pub(crate) fn serialize_into<'b, T>(value: &T, buf: &'b mut Vec<u8>) -> serde_json::Result<&'b str>
where
    T: ?Sized + Serialize,
{
    buf.clear();

    let mut ser = serde_json::Serializer::with_formatter(&mut *buf, WireFormatter);
    value.serialize(&mut ser)?;

    std::str::from_utf8(buf).map_err(<serde_json::Error as serde::ser::Error>::custom)
}
