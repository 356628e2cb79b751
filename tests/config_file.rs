// tests/config_file.rs
//
// key=value config layered over defaults.

use std::fs;
use std::path::Path;

use result_card::config::{self, consts::DEFAULT_DATA_SOURCE, options::AppOptions};

#[test]
fn parses_known_keys() {
    let opts = config::file::parse(
        "# dataset\n\
         data = http://127.0.0.1:8000/results.json\n\
         grades = Grade 1, Grade 2 ,,Grade 3\n\
         out_dir = exports/cards\n\
         scale = 3\n\
         background = #f8fafc\n",
    );
    assert_eq!(opts.data_source, "http://127.0.0.1:8000/results.json");
    assert_eq!(opts.grades, vec!["Grade 1", "Grade 2", "Grade 3"]);
    assert!(opts.export.out_dir().ends_with("cards"));
    assert_eq!(opts.export.scale, 3.0);
    assert_eq!(opts.export.background, [0xf8, 0xfa, 0xfc]);
}

#[test]
fn bad_values_keep_defaults() {
    let defaults = AppOptions::default();
    let opts = config::file::parse("scale = -2\nbackground = blue\nmystery = 1\nnot a pair\ndata =\n");
    assert_eq!(opts.export.scale, defaults.export.scale);
    assert_eq!(opts.export.background, defaults.export.background);
    assert_eq!(opts.data_source, DEFAULT_DATA_SOURCE);
}

#[test]
fn missing_file_means_defaults() {
    let opts = config::file::load(Path::new("definitely/not/here.cfg"));
    assert_eq!(opts, AppOptions::default());
}

#[test]
fn loads_from_disk() {
    let mut p = std::env::temp_dir();
    p.push("result_card_cfg_test.cfg");
    fs::write(&p, "data=grades.json\n").unwrap();
    let opts = config::file::load(&p);
    assert_eq!(opts.data_source, "grades.json");
}
