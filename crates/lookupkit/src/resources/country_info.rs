//! Country info resource
//!
//! Extracts a summary from the REST Countries name search, which
//! answers with an array of matching records; the first match wins.

use crate::error::ReportError;
use crate::types::Report;
use crate::UNKNOWN_DEFAULT;
use serde::Deserialize;
use serde_json::Value;

/// REST Countries record (partial)
#[derive(Debug, Deserialize)]
struct Country {
    name: CountryName,
    capital: Option<Vec<String>>,
    population: u64,
    currencies: Option<serde_json::Map<String, Value>>,
    region: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CountryName {
    common: String,
}

pub(crate) fn build_report(body: &[u8]) -> Result<Report, ReportError> {
    let mut matches: Vec<Country> = serde_json::from_slice(body)?;
    if matches.is_empty() {
        return Err(ReportError::Empty("no matching country records".to_string()));
    }
    let country = matches.remove(0);

    let capital = country
        .capital
        .and_then(|mut c| if c.is_empty() { None } else { Some(c.remove(0)) })
        .unwrap_or_else(|| UNKNOWN_DEFAULT.to_string());

    let currency = country
        .currencies
        .and_then(|c| c.keys().next().cloned())
        .unwrap_or_else(|| UNKNOWN_DEFAULT.to_string());

    let mut report = Report::new();
    report.push("country", country.name.common);
    report.push("capital", capital);
    report.push("population", format_thousands(country.population));
    report.push("currency", currency);
    report.push(
        "region",
        country.region.unwrap_or_else(|| UNKNOWN_DEFAULT.to_string()),
    );
    Ok(report)
}

/// Render a count with thousands separators (1234567 -> "1,234,567")
fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
