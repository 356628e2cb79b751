// src/gui/mod.rs
pub mod actions;
pub mod anim;
pub mod app;
pub mod components;
pub mod snapshot;

pub use app::run;
