// src/lookup.rs
//
// Grade → linear scan on Student_ID. First match wins.

use serde_json::Value;

use crate::{
    card::ReportCard,
    dataset::{DatasetState, StudentRecord},
    validate::{self, FieldError},
};

#[derive(Debug, PartialEq)]
pub enum SearchOutcome<'a> {
    /// One or both inputs failed validation
    Invalid(Vec<FieldError>),
    /// Inputs fine but nothing to search in; reported only in the log
    NotLoaded,
    GradeUnavailable,
    NotFound,
    Found(&'a StudentRecord),
}

impl SearchOutcome<'_> {
    /// Inline messages the form should show for this outcome.
    pub fn field_errors(&self) -> Vec<FieldError> {
        match self {
            SearchOutcome::Invalid(errs) => errs.clone(),
            SearchOutcome::GradeUnavailable => vec![FieldError::GradeUnavailable],
            SearchOutcome::NotFound => vec![FieldError::NotFound],
            SearchOutcome::NotLoaded | SearchOutcome::Found(_) => Vec::new(),
        }
    }
}

/// What a search attempt does to the result panel.
#[derive(Debug, PartialEq)]
pub enum PanelChange {
    Show(ReportCard),
    Hide,
    /// Leave whatever is on screen as it is
    Keep,
}

/// Form messages and panel change for one attempt.
/// The messages replace any left from the previous attempt.
#[derive(Debug, PartialEq)]
pub struct SearchFeedback {
    pub errors: Vec<FieldError>,
    pub panel: PanelChange,
}

impl SearchFeedback {
    pub fn from_outcome(outcome: &SearchOutcome<'_>) -> Self {
        let panel = match outcome {
            SearchOutcome::Found(rec) => PanelChange::Show(ReportCard::from_record(rec)),
            SearchOutcome::NotFound => PanelChange::Hide,
            SearchOutcome::Invalid(_)
            | SearchOutcome::NotLoaded
            | SearchOutcome::GradeUnavailable => PanelChange::Keep,
        };
        Self { errors: outcome.field_errors(), panel }
    }
}

/// Does a record's `Student_ID` match the (trimmed) input?
///
/// Strings compare exactly after trimming. Numbers compare numerically
/// against the input parsed as f64, so `100`, `"100"` and `100.0` agree.
/// Any other JSON type never matches.
pub fn id_matches(student_id: &Value, input: &str) -> bool {
    let input = input.trim();
    match student_id {
        Value::String(s) => s.trim() == input,
        Value::Number(n) => match (n.as_f64(), input.parse::<f64>()) {
            (Some(a), Ok(b)) => b.is_finite() && a == b,
            _ => false,
        },
        _ => false,
    }
}

pub fn find_student<'a>(records: &'a [StudentRecord], id: &str) -> Option<&'a StudentRecord> {
    records.iter()
        .find(|r| r.student_id().is_some_and(|sid| id_matches(sid, id)))
}

pub fn search<'a>(state: &'a DatasetState, grade: &str, id_text: &str) -> SearchOutcome<'a> {
    let query = match validate::validate(grade, id_text) {
        Ok(q) => q,
        Err(errs) => {
            logd!("Search: Invalid input {:?}", errs);
            return SearchOutcome::Invalid(errs);
        }
    };

    let Some(ds) = state.dataset() else {
        logd!("Search: grade={} id={} but dataset is not loaded", query.grade, query.id);
        return SearchOutcome::NotLoaded;
    };

    let Some(records) = ds.grade(&query.grade) else {
        logf!("Search: grade={} unavailable", query.grade);
        return SearchOutcome::GradeUnavailable;
    };

    match find_student(records, &query.id) {
        Some(rec) => {
            logf!("Search: grade={} id={} found", query.grade, query.id);
            SearchOutcome::Found(rec)
        }
        None => {
            logf!("Search: grade={} id={} not found", query.grade, query.id);
            SearchOutcome::NotFound
        }
    }
}
