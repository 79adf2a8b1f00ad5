// src/gui/components/mod.rs
pub mod export_bar;
pub mod header;
pub mod recipe_table;
pub mod type_picker;
