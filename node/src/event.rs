use comms::ProgressMsg;
use serde::Serialize;

/// What the demo host reports on stdout, one JSON line per event.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HostEvent {
    TrainingStarted {
        learning_rate: f64,
    },
    StreamData {
        epoch: usize,
        m: f64,
        b: f64,
        loss: f64,
    },
    ModelComplete {
        success: bool,
    },
    StreamError {
        error: String,
    },
}

impl HostEvent {
    /// Translates a payload received from the core.
    pub fn from_payload(payload: &str) -> Self {
        match ProgressMsg::from_wire(payload) {
            Ok(ProgressMsg::Epoch { epoch, m, b, loss }) => Self::StreamData { epoch, m, b, loss },
            Ok(ProgressMsg::Complete { .. }) => Self::ModelComplete { success: true },
            Err(e) => Self::StreamError {
                error: e.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch_payloads_become_stream_data() {
        let event =
            HostEvent::from_payload(r#"{"epoch": 1, "m": 16.8000, "b": 5.1400, "loss": 123645.0000}"#);

        assert_eq!(
            event,
            HostEvent::StreamData {
                epoch: 1,
                m: 16.8,
                b: 5.14,
                loss: 123645.0,
            }
        );
    }

    #[test]
    fn saturated_payloads_become_stream_data() {
        let payload = ProgressMsg::Epoch {
            epoch: 73,
            m: f64::MAX,
            b: f64::MIN,
            loss: f64::MAX,
        }
        .to_wire()
        .unwrap();

        let event = HostEvent::from_payload(&payload);

        assert_eq!(
            event,
            HostEvent::StreamData {
                epoch: 73,
                m: f64::MAX,
                b: f64::MIN,
                loss: f64::MAX,
            }
        );
    }

    #[test]
    fn sentinel_becomes_model_complete() {
        let event = HostEvent::from_payload(r#"{"epoch": "complete"}"#);

        assert_eq!(event, HostEvent::ModelComplete { success: true });
    }

    #[test]
    fn garbage_becomes_stream_error() {
        let event = HostEvent::from_payload("{");

        assert!(matches!(event, HostEvent::StreamError { .. }));
    }

    #[test]
    fn events_are_tagged_by_type() {
        let event = HostEvent::ModelComplete { success: true };

        assert_eq!(
            serde_json::to_string(&event).unwrap(),
            r#"{"type":"MODEL_COMPLETE","payload":{"success":true}}"#
        );
    }
}
