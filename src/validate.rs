// src/validate.rs
//
// Both inputs are checked every time; one failing never skips the other.

use std::fmt;

use crate::config::consts::GRADE_PLACEHOLDER;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Grade,
    Id,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldError {
    GradeUnset,
    IdEmpty,
    GradeUnavailable,
    NotFound,
}

impl FieldError {
    pub fn field(self) -> Field {
        match self {
            FieldError::GradeUnset | FieldError::GradeUnavailable => Field::Grade,
            FieldError::IdEmpty | FieldError::NotFound => Field::Id,
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            FieldError::GradeUnset => "Please select a grade",
            FieldError::IdEmpty => "Please enter a seating number",
            FieldError::GradeUnavailable => "Data for this grade is not available yet",
            FieldError::NotFound => "Seating number is incorrect or not found in this grade",
        };
        f.write_str(msg)
    }
}

/// Validated search input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Query {
    pub grade: String,
    pub id: String,
}

pub fn is_grade_unset(grade: &str) -> bool {
    let g = grade.trim();
    g.is_empty() || g == GRADE_PLACEHOLDER
}

pub fn validate(grade: &str, id_text: &str) -> Result<Query, Vec<FieldError>> {
    let id = id_text.trim();
    let mut errors = Vec::new();

    if is_grade_unset(grade) {
        errors.push(FieldError::GradeUnset);
    }
    if id.is_empty() {
        errors.push(FieldError::IdEmpty);
    }

    if errors.is_empty() {
        Ok(Query { grade: s!(grade), id: s!(id) })
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_or_placeholder_grade_is_unset() {
        assert!(is_grade_unset(""));
        assert!(is_grade_unset("   "));
        assert!(is_grade_unset(GRADE_PLACEHOLDER));
        assert!(is_grade_unset(&format!(" {GRADE_PLACEHOLDER} ")));
        assert!(!is_grade_unset("Grade 6"));
    }
}
