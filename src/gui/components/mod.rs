// src/gui/components/mod.rs
pub mod control_panel;
pub mod records_table;
