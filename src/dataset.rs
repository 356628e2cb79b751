// src/dataset.rs
//
// The dataset document: `{ "<grade>": [ { record }, ... ], ... }`.
// Loaded once; read-only afterwards. Grade and field order follow the
// document (serde_json `preserve_order`).

use std::{error::Error, fs, path::Path};

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::core::net;

/// One student's flat record, fields in document order.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct StudentRecord(Map<String, Value>);

impl StudentRecord {
    pub fn get(&self, key: &str) -> Option<&Value> { self.0.get(key) }

    /// Fields in original key order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn student_id(&self) -> Option<&Value> { self.0.get("Student_ID") }

    pub fn name(&self) -> Option<&str> { self.0.get("name").and_then(Value::as_str) }

    pub fn len(&self) -> usize { self.0.len() }
    pub fn is_empty(&self) -> bool { self.0.is_empty() }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Grade {
    pub key: String,
    pub records: Vec<StudentRecord>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dataset {
    grades: Vec<Grade>,
}

impl Dataset {
    pub fn from_json(text: &str) -> Result<Self, Box<dyn Error>> {
        let doc: Value = serde_json::from_str(text)?;
        let Value::Object(top) = doc else {
            return Err("Dataset must be a JSON object keyed by grade".into());
        };

        let mut grades = Vec::with_capacity(top.len());
        for (key, v) in top {
            let records: Vec<StudentRecord> = serde_json::from_value(v)
                .map_err(|e| format!("Grade '{}': {}", key, e))?;
            grades.push(Grade { key, records });
        }
        Ok(Self { grades })
    }

    pub fn grade(&self, key: &str) -> Option<&[StudentRecord]> {
        self.grades.iter()
            .find(|g| g.key == key)
            .map(|g| g.records.as_slice())
    }

    pub fn grade_keys(&self) -> impl Iterator<Item = &str> {
        self.grades.iter().map(|g| g.key.as_str())
    }

    pub fn grade_count(&self) -> usize { self.grades.len() }

    pub fn record_count(&self) -> usize {
        self.grades.iter().map(|g| g.records.len()).sum()
    }
}

/// Whether the one startup load produced a dataset.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum DatasetState {
    #[default]
    NotLoaded,
    Loaded(Dataset),
}

impl DatasetState {
    pub fn dataset(&self) -> Option<&Dataset> {
        match self {
            DatasetState::Loaded(ds) => Some(ds),
            DatasetState::NotLoaded => None,
        }
    }

    pub fn is_loaded(&self) -> bool { matches!(self, DatasetState::Loaded(_)) }
}

/// Read the raw document from a local path or an `http://` URL.
pub fn fetch(source: &str) -> Result<String, Box<dyn Error>> {
    if source.trim_start().starts_with("http://") {
        let (host, port, path) = net::parse_http_url(source)
            .ok_or_else(|| format!("Invalid URL: {}", source))?;
        net::http_get(&host, port, &path)
    } else if source.contains("://") {
        Err(format!("Unsupported scheme: {}", source).into())
    } else {
        Ok(fs::read_to_string(Path::new(source))?)
    }
}

pub fn load(source: &str) -> Result<Dataset, Box<dyn Error>> {
    let text = fetch(source)?;
    Dataset::from_json(&text)
}

/// Load once; failures are logged and leave the state unset.
pub fn load_state(source: &str) -> DatasetState {
    match load(source) {
        Ok(ds) => {
            logf!(
                "Data: Loaded {} (grades={}, records={})",
                source, ds.grade_count(), ds.record_count()
            );
            DatasetState::Loaded(ds)
        }
        Err(e) => {
            loge!("Data: Load failed for {}: {}", source, e);
            DatasetState::NotLoaded
        }
    }
}
