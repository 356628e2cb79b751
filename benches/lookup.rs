// benches/lookup.rs
// Scan + card build only; `lookup::search` also writes the log file.
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use result_card::{
    card::ReportCard,
    dataset::{Dataset, DatasetState},
    lookup,
};

/// Synthetic dataset: 6 grades × 2000 students, 10 subjects each.
fn build_sample() -> String {
    let subjects = [
        "Arabic", "mathematics", "english", "Sciences", "Social_Studies",
        "technology", "art", "Religious_Education", "physical_education", "robotics",
    ];
    let mut doc = String::from("{");
    for g in 0..6 {
        if g > 0 { doc.push(','); }
        doc.push_str(&format!("\"Grade {}\":[", g + 1));
        for s in 0..2000 {
            if s > 0 { doc.push(','); }
            doc.push_str(&format!("{{\"Student_ID\":{},\"name\":\"Student {}\"", 10_000 * (g + 1) + s, s));
            for (i, subj) in subjects.iter().enumerate() {
                doc.push_str(&format!(",\"{}\":{}", subj, (s + i) % 100));
            }
            doc.push_str(",\"total\":500}");
        }
        doc.push(']');
    }
    doc.push('}');
    doc
}

fn bench_lookup(c: &mut Criterion) {
    let doc = build_sample();
    let state = DatasetState::Loaded(Dataset::from_json(&doc).expect("sample parses"));
    let ds = state.dataset().expect("loaded");

    c.bench_function("parse_dataset", |b| {
        b.iter(|| {
            let ds = Dataset::from_json(black_box(&doc)).unwrap();
            black_box(ds.record_count())
        })
    });

    c.bench_function("search_last_in_grade", |b| {
        b.iter(|| {
            let records = ds.grade(black_box("Grade 6")).unwrap();
            black_box(lookup::find_student(records, black_box("61999")).is_some())
        })
    });

    c.bench_function("search_and_build_card", |b| {
        b.iter(|| {
            let records = ds.grade("Grade 3").unwrap();
            if let Some(rec) = lookup::find_student(records, black_box("30500")) {
                black_box(ReportCard::from_record(rec).rows.len());
            }
        })
    });
}

criterion_group!(benches, bench_lookup);
criterion_main!(benches);
