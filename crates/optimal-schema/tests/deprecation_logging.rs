//! Deprecated fields are reported through `tracing`, never as errors.

use std::io;
use std::sync::{Arc, Mutex};

use optimal_schema::{fields, shape, string, Criteria, Schema, Value};
use serde_json::json;
use tracing_subscriber::fmt::MakeWriter;

/// Collects formatted log lines in memory.
#[derive(Clone, Default)]
struct Capture(Arc<Mutex<Vec<u8>>>);

impl Capture {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl io::Write for Capture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for Capture {
    type Writer = Capture;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

fn with_capture<F: FnOnce()>(run: F) -> String {
    let capture = Capture::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(capture.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::INFO)
        .finish();
    tracing::subscriber::with_default(subscriber, run);
    capture.contents()
}

#[test]
fn deprecated_fields_log_once_per_call() {
    let schema = shape(fields! {
        "old" => string().deprecate("Use `new` instead."),
        "new" => string(),
    });

    let logs = with_capture(|| {
        let result = schema.validate(&Value::from(json!({"old": "x"})));
        assert_eq!(result, Ok(Value::from(json!({"old": "x", "new": ""}))));
    });

    assert_eq!(logs.matches("is deprecated").count(), 1);
    assert!(logs.contains("Field \"old\" is deprecated. Use `new` instead."));
    assert!(logs.contains("INFO"));
}

#[test]
fn missing_deprecated_fields_are_silent() {
    let schema = shape(fields! { "old" => string().deprecate("Gone soon.") });
    let logs = with_capture(|| {
        assert!(schema.validate(&Value::from(json!({}))).is_ok());
    });
    assert!(logs.is_empty(), "unexpected log output: {logs}");
}
