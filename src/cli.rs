// src/cli.rs
use std::{error::Error, fmt::Write as _, fs, path::{Path, PathBuf}};

use crate::{
    card::ReportCard,
    config::{self, consts::CONFIG_FILE},
    dataset::{self, DatasetState},
    lookup::{self, SearchOutcome},
    print,
};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Params {
    pub grade: String,
    pub id: String,
    pub data: Option<String>,
    pub config: Option<PathBuf>,
    pub html_out: Option<PathBuf>,
    pub print: bool,
    pub list_grades: bool,
    pub help: bool,
}

pub fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<Params, Box<dyn Error>> {
    let mut params = Params::default();
    let mut args = args.into_iter();
    while let Some(a) = args.next() {
        match a.as_str()
        {
            "-g" | "--grade" => params.grade = args.next().ok_or("Missing value for --grade")?,
            "-i" | "--id" => params.id = args.next().ok_or("Missing value for --id")?,
            "-d" | "--data" => params.data = Some(args.next().ok_or("Missing dataset source")?),
            "-c" | "--config" => {
                params.config = Some(PathBuf::from(args.next().ok_or("Missing config path")?)); }
            "--html" => {
                params.html_out = Some(PathBuf::from(args.next().ok_or("Missing output path")?)); }
            "--print" => params.print = true,
            "--list-grades" => params.list_grades = true,
            "-h" | "--help" => params.help = true,
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }
    Ok(params)
}

pub fn help() -> &'static str {
    include_str!("cli_help.txt")
}

/// Plain-text card for the terminal.
pub fn render_text(card: &ReportCard) -> String {
    let width = card.rows.iter()
        .map(|r| r.label.chars().count())
        .max()
        .unwrap_or(0)
        .max("Total".len());

    let mut out = String::new();
    let _ = writeln!(out, "{}", card.name);
    let _ = writeln!(out, "{}", "-".repeat(width + 12));
    for row in &card.rows {
        let _ = writeln!(out, "{} {:<width$}  {:>6}", row.icon.glyph(), row.label, row.value);
    }
    let _ = writeln!(out, "{}", "-".repeat(width + 12));
    let _ = writeln!(out, "   {:<width$}  {:>6}", "Total", card.total.final_text());
    out
}

pub fn run(params: Params) -> Result<(), Box<dyn Error>> {
    if params.help {
        println!("{}", help());
        return Ok(());
    }

    let cfg_path = params.config.clone().unwrap_or_else(|| PathBuf::from(CONFIG_FILE));
    let mut options = config::file::load(&cfg_path);
    if let Some(src) = &params.data {
        options.data_source = src.clone();
    }

    let state = dataset::load_state(&options.data_source);

    if params.list_grades {
        let ds = state.dataset()
            .ok_or_else(|| format!("Could not load dataset from {}", options.data_source))?;
        for key in ds.grade_keys() {
            println!("{}", key);
        }
        return Ok(());
    }

    let card = lookup_card(&state, &params.grade, &params.id, &options.data_source)?;
    print!("{}", render_text(&card));

    if let Some(path) = &params.html_out {
        write_html(&card, path)?;
        println!("Wrote {}", path.display());
    }
    if params.print {
        let path = print::print_card(&card, options.export.out_dir())?;
        println!("Opened {}", path.display());
    }
    Ok(())
}

fn lookup_card(
    state: &DatasetState,
    grade: &str,
    id: &str,
    source: &str,
) -> Result<ReportCard, Box<dyn Error>> {
    match lookup::search(state, grade, id) {
        SearchOutcome::Found(rec) => Ok(ReportCard::from_record(rec)),
        SearchOutcome::NotLoaded => Err(format!("Could not load dataset from {}", source).into()),
        other => {
            let msgs: Vec<String> = other.field_errors().iter().map(|e| e.to_string()).collect();
            Err(msgs.join("; ").into())
        }
    }
}

fn write_html(card: &ReportCard, path: &Path) -> Result<(), Box<dyn Error>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            crate::file::ensure_directory(parent)?;
        }
    }
    fs::write(path, print::to_html(card))?;
    Ok(())
}
