// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod core;

pub mod card;
pub mod count_up;
pub mod dataset;
pub mod export;
pub mod file;
pub mod lookup;
pub mod print;
pub mod subjects;
pub mod validate;

pub mod cli;
pub mod gui;
