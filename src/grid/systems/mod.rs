// src/grid/systems/mod.rs
pub mod logic;
pub mod startup;
