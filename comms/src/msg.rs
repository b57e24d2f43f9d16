use machine_learning::training::EpochSnapshot;
use serde::{Deserialize, Serialize};

use crate::serialize;

/// The value of `epoch` in the terminal message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sentinel {
    #[serde(rename = "complete")]
    Complete,
}

/// A progress message as seen by the host.
///
/// Both variants share the `epoch` key, an integer for epoch messages and the string
/// `"complete"` for the terminal one, so readers tell them apart by its type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProgressMsg {
    Epoch {
        epoch: usize,
        m: f64,
        b: f64,
        loss: f64,
    },
    Complete {
        epoch: Sentinel,
    },
}

impl ProgressMsg {
    /// Returns the terminal message of a run.
    pub fn complete() -> Self {
        Self::Complete {
            epoch: Sentinel::Complete,
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, Self::Complete { .. })
    }

    /// Writes the wire representation of this message into `buf`, replacing its contents.
    ///
    /// # Returns
    /// The payload text, borrowed from `buf`.
    pub fn encode<'b>(&self, buf: &'b mut Vec<u8>) -> serde_json::Result<&'b str> {
        serialize::serialize_into(self, buf)
    }

    /// Returns the wire representation of this message.
    pub fn to_wire(&self) -> serde_json::Result<String> {
        let mut buf = Vec::with_capacity(64);
        let payload = self.encode(&mut buf)?;
        Ok(payload.to_owned())
    }

    /// Parses a payload produced by `encode` or `to_wire`.
    pub fn from_wire(payload: &str) -> serde_json::Result<Self> {
        serde_json::from_str(payload)
    }
}

impl From<&EpochSnapshot> for ProgressMsg {
    /// Non finite values can't be written as JSON numbers, infinities saturate to the
    /// largest finite value of the same sign and NaN to `f64::MAX`. A NaN carries no
    /// usable sign, so it always comes out positive.
    fn from(snapshot: &EpochSnapshot) -> Self {
        Self::Epoch {
            epoch: snapshot.epoch,
            m: saturate(snapshot.slope),
            b: saturate(snapshot.intercept),
            loss: saturate(snapshot.loss),
        }
    }
}

fn saturate(value: f64) -> f64 {
    if value.is_nan() {
        return f64::MAX;
    }

    value.clamp(f64::MIN, f64::MAX)
}
