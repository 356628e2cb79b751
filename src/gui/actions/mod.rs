// src/gui/actions/mod.rs
//
// Folder module facade: re-export public entrypoints.
// Submodules stay private; consumers only see actions::{download,resume_download,print,search}.

mod download; // src/gui/actions/download.rs
mod print;    // src/gui/actions/print.rs
mod search;   // src/gui/actions/search.rs

pub use download::{download, resume_download};
pub use print::print;
pub use search::search;
