// src/core/mod.rs

pub mod net;
pub mod number;
pub mod sanitize;
