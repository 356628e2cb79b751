// src/gui/components/mod.rs
pub mod action_buttons;
pub mod alert;
pub mod result_card;
pub mod search_form;
