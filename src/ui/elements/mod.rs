// src/ui/elements/mod.rs
pub mod editor;
pub mod popups;
