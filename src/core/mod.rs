// src/core/mod.rs

pub mod alphabet;
pub mod engine;
pub mod extract;
pub mod pattern;
pub mod types;
