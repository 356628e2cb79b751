// src/card.rs
//
// Report card model: what the result panel (and the printable page) shows
// for one matched record.

use serde_json::Value;

use crate::{
    core::{number, sanitize::normalize_ws},
    dataset::StudentRecord,
    subjects::{self, Icon},
};

/// Identity/total fields; never rendered as subject rows.
pub const RESERVED_KEYS: &[&str] = &["id", "name", "Student_ID", "total"];

pub const TOTAL_PLACEHOLDER: &str = "-";

#[derive(Clone, Debug, PartialEq)]
pub struct SubjectRow {
    pub code: String,
    pub label: String,
    pub icon: Icon,
    pub value: String,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Total {
    /// Numeric total; counted up to on screen
    Score(f64),
    /// Present but not a number; shown as-is
    Text(String),
    /// No total field
    Missing,
}

impl Total {
    fn from_value(v: Option<&Value>) -> Self {
        match v {
            None | Some(Value::Null) => Total::Missing,
            Some(v) => match number::as_number(v) {
                Some(n) => Total::Score(n),
                None => Total::Text(number::value_text(v)),
            },
        }
    }

    /// Final text once any animation is over.
    pub fn final_text(&self) -> String {
        match self {
            Total::Score(n) => number::format_number(*n),
            Total::Text(t) => t.clone(),
            Total::Missing => s!(TOTAL_PLACEHOLDER),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ReportCard {
    pub name: String,
    pub rows: Vec<SubjectRow>,
    pub total: Total,
}

impl ReportCard {
    pub fn from_record(rec: &StudentRecord) -> Self {
        let name = rec.name()
            .map(normalize_ws)
            .or_else(|| rec.get("name").map(number::value_text))
            .unwrap_or_default();

        let rows = rec.fields()
            .filter(|(k, _)| !RESERVED_KEYS.contains(k))
            .map(|(code, v)| {
                let disp = subjects::display_for(code);
                SubjectRow {
                    code: s!(code),
                    label: s!(disp.label),
                    icon: disp.icon,
                    value: number::value_text(v),
                }
            })
            .collect();

        Self { name, rows, total: Total::from_value(rec.get("total")) }
    }
}
