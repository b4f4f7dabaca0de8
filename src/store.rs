// src/store.rs
//
// Row source: a local CSV file or a published sheet (JSON array of flat objects).
// Everything comes back as the same header + rows shape.
use std::{fs, path::Path};

use serde_json::Value;
use tracing::info;

use crate::config::options::Source;
use crate::core::net;
use crate::error::{Error, Result};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DataSet {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl DataSet {
    pub fn is_empty(&self) -> bool { self.rows.is_empty() }
    pub fn len(&self) -> usize { self.rows.len() }
}

pub fn load(source: &Source) -> Result<DataSet> {
    match source {
        Source::Csv(path) => load_csv(path),
        Source::Sheet(url) => load_sheet(url),
    }
}

pub fn load_csv(path: &Path) -> Result<DataSet> {
    if !path.is_file() {
        return Err(Error::MissingInput(path.to_path_buf()));
    }
    let text = fs::read_to_string(path)?;
    let ds = crate::csv::read_dataset(&text)?;
    info!("Loaded {} row(s) from {}", ds.len(), path.display());
    Ok(ds)
}

pub fn load_sheet(url: &str) -> Result<DataSet> {
    let body = net::http_get(url)?;
    let ds = parse_sheet_json(&body)?;
    info!("Loaded {} row(s) from {}", ds.len(), url);
    Ok(ds)
}

/// Headers are the union of object keys in first-seen order; missing keys read as "".
pub fn parse_sheet_json(body: &str) -> Result<DataSet> {
    let value: Value = serde_json::from_str(body)?;
    let Value::Array(items) = value else {
        return Err(Error::Invalid(s!("sheet response is not a JSON array")));
    };

    let mut headers: Vec<String> = Vec::new();
    let mut objects = Vec::with_capacity(items.len());
    for item in items {
        let Value::Object(map) = item else {
            return Err(Error::Invalid(s!("sheet row is not a JSON object")));
        };
        for key in map.keys() {
            if !headers.iter().any(|h| h == key) {
                headers.push(key.clone());
            }
        }
        objects.push(map);
    }

    let rows = objects
        .iter()
        .map(|map| {
            headers
                .iter()
                .map(|h| match map.get(h) {
                    Some(Value::String(s)) => s.clone(),
                    Some(Value::Null) | None => s!(),
                    Some(other) => other.to_string(),
                })
                .collect()
        })
        .collect();

    Ok(DataSet { headers, rows })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sheet_json_keeps_key_order_and_fills_gaps() {
        let body = r#"[
            {"File": "wise.html", "Brand": "Wise", "Category": "Banking"},
            {"File": "monzo.html", "Brand": "Monzo", "Rank": 2}
        ]"#;
        let ds = parse_sheet_json(body).unwrap();
        assert_eq!(ds.headers, vec!["File", "Brand", "Category", "Rank"]);
        assert_eq!(ds.rows[0], vec!["wise.html", "Wise", "Banking", ""]);
        assert_eq!(ds.rows[1], vec!["monzo.html", "Monzo", "", "2"]);
    }

    #[test]
    fn sheet_json_rejects_non_arrays() {
        assert!(matches!(parse_sheet_json(r#"{"a": 1}"#), Err(Error::Invalid(_))));
        assert!(matches!(parse_sheet_json("[1, 2]"), Err(Error::Invalid(_))));
        assert!(matches!(parse_sheet_json("not json"), Err(Error::Json(_))));
    }

    #[test]
    fn missing_csv_is_reported() {
        let p = std::env::temp_dir().join("offer_pages_definitely_missing.csv");
        assert!(matches!(load_csv(&p), Err(Error::MissingInput(_))));
    }
}
