//! Contact form resource
//!
//! POSTs a JSON document to an echo endpoint (httpbin-style) and
//! reports the fields the server confirms it received under its
//! `json` echo key.

use crate::error::ReportError;
use crate::types::Report;
use serde::Deserialize;
use serde_json::Value;

/// Echo-server response (partial)
#[derive(Debug, Deserialize)]
struct FormEcho {
    json: Option<Value>,
}

pub(crate) fn build_report(body: &[u8]) -> Result<Report, ReportError> {
    let echo: FormEcho = serde_json::from_slice(body)?;

    let fields = match echo.json {
        Some(Value::Object(map)) => map,
        _ => {
            return Err(ReportError::Empty(
                "server did not echo the submitted form".to_string(),
            ))
        }
    };

    let mut report = Report::new();
    for (name, value) in fields {
        report.push(name, render_value(&value));
    }
    Ok(report)
}

/// Render an echoed JSON value without quoting plain strings
fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
