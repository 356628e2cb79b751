// tests/report_card.rs
//
// Record → card model: row order, reserved fields, label fallback, totals.

use result_card::card::{ReportCard, Total, TOTAL_PLACEHOLDER};
use result_card::dataset::StudentRecord;
use result_card::subjects::{self, DEFAULT_ICON, Icon};

fn record(json: &str) -> StudentRecord {
    serde_json::from_str(json).unwrap()
}

#[test]
fn rows_follow_document_order_and_skip_reserved() {
    let rec = record(r#"{
        "id": 7,
        "Student_ID": "100",
        "technology": 40,
        "name": "Mona",
        "Arabic": 88.5,
        "robotics": "A",
        "mathematics": 95,
        "total": "223.5"
    }"#);
    let card = ReportCard::from_record(&rec);

    let codes: Vec<&str> = card.rows.iter().map(|r| r.code.as_str()).collect();
    assert_eq!(codes, vec!["technology", "Arabic", "robotics", "mathematics"]);

    let values: Vec<&str> = card.rows.iter().map(|r| r.value.as_str()).collect();
    assert_eq!(values, vec!["40", "88.5", "A", "95"]);

    assert_eq!(card.rows[0].label, "Technology");
    assert_eq!(card.rows[0].icon, Icon::Laptop);

    // unknown code: raw code + default icon
    assert_eq!(card.rows[2].label, "robotics");
    assert_eq!(card.rows[2].icon, DEFAULT_ICON);
    assert!(!subjects::is_known("robotics"));

    assert_eq!(card.name, "Mona");
    assert_eq!(card.total, Total::Score(223.5));
}

#[test]
fn one_row_per_non_reserved_key() {
    let rec = record(r#"{"Student_ID":"1","name":"X","a":1,"b":2,"c":3}"#);
    let card = ReportCard::from_record(&rec);
    assert_eq!(card.rows.len(), rec.len() - 2);
}

#[test]
fn missing_total_shows_placeholder() {
    let card = ReportCard::from_record(&record(r#"{"Student_ID":"1","name":"X","art":9}"#));
    assert_eq!(card.total, Total::Missing);
    assert_eq!(card.total.final_text(), TOTAL_PLACEHOLDER);

    let card = ReportCard::from_record(&record(r#"{"Student_ID":"1","total":null}"#));
    assert_eq!(card.total, Total::Missing);
}

#[test]
fn non_numeric_total_is_shown_verbatim() {
    let card = ReportCard::from_record(&record(r#"{"Student_ID":"1","total":"absent"}"#));
    assert_eq!(card.total, Total::Text("absent".into()));
    assert_eq!(card.total.final_text(), "absent");
}

#[test]
fn missing_name_is_blank() {
    let card = ReportCard::from_record(&record(r#"{"Student_ID":"1","art":9}"#));
    assert_eq!(card.name, "");
    assert_eq!(card.rows.len(), 1);
}
