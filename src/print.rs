// src/print.rs
//
// Print = write a self-contained printable page for the card and hand it to
// the platform opener. The page opens the print dialog on load.

use std::{
    error::Error,
    fmt::Write as _,
    path::{Path, PathBuf},
    process::Command,
};

use crate::{
    card::ReportCard,
    core::sanitize::escape_html,
    export::file_stem_for,
    file,
};

const PAGE_STYLE: &str = "\
body{font-family:sans-serif;background:#fff;color:#0f172a;margin:2rem}\
.card{max-width:40rem;margin:auto;border:1px solid #e2e8f0;border-radius:1rem;padding:1.5rem}\
h1{font-size:1.5rem;margin:0 0 1rem}\
table{width:100%;border-collapse:collapse}\
td{padding:.6rem;border-bottom:1px solid #f1f5f9}\
td.v{text-align:center;font-weight:900;font-size:1.3rem}\
tr.total td{border-top:2px solid #0f172a;font-weight:900}\
@media print{body{margin:0}.card{border:none}}";

pub fn to_html(card: &ReportCard) -> String {
    let mut out = String::with_capacity(2048);
    out.push_str("<!DOCTYPE html>\n<html><head><meta charset=\"utf-8\">");
    let _ = write!(out, "<title>{}</title>", escape_html(&card.name));
    let _ = write!(out, "<style>{PAGE_STYLE}</style>");
    out.push_str("</head><body onload=\"window.print()\">\n<div class=\"card\">\n");
    let _ = writeln!(out, "<h1>{}</h1>", escape_html(&card.name));
    out.push_str("<table>\n");
    for row in &card.rows {
        let _ = writeln!(
            out,
            "<tr><td><span class=\"icon icon-{}\">{}</span> {}</td><td class=\"v\">{}</td></tr>",
            row.icon.name(),
            row.icon.glyph(),
            escape_html(&row.label),
            escape_html(&row.value)
        );
    }
    let _ = writeln!(
        out,
        "<tr class=\"total\"><td>Total</td><td class=\"v\">{}</td></tr>",
        escape_html(&card.total.final_text())
    );
    out.push_str("</table>\n</div>\n</body></html>\n");
    out
}

/// Write the printable page into `dir`. Returns the file written.
pub fn write_page(card: &ReportCard, dir: &Path) -> Result<PathBuf, Box<dyn Error>> {
    let stem = file_stem_for(&card.name);
    file::write_unique(dir, &stem, "html", to_html(card).as_bytes())
}

fn opener(path: &Path) -> Command {
    #[cfg(target_os = "windows")]
    {
        let mut c = Command::new("cmd");
        c.args(["/C", "start", ""]).arg(path);
        c
    }
    #[cfg(target_os = "macos")]
    {
        let mut c = Command::new("open");
        c.arg(path);
        c
    }
    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        let mut c = Command::new("xdg-open");
        c.arg(path);
        c
    }
}

/// Write the page and open it; the system handler shows the print dialog.
pub fn print_card(card: &ReportCard, dir: &Path) -> Result<PathBuf, Box<dyn Error>> {
    let path = write_page(card, dir)?;
    logf!("Print: Page written → {}", path.display());
    opener(&path)
        .spawn()
        .map_err(|e| format!("Could not open {}: {}", path.display(), e))?;
    Ok(path)
}
