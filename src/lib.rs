// src/lib.rs

pub mod core;
pub mod dictionary;
pub mod persistence;

pub use crate::core::alphabet::Alphabet;
pub use crate::core::engine::{AnalysisEngine, AnalysisReport, EngineConfig};
pub use crate::core::types::{AnalysisError, Result};
pub use crate::dictionary::{Dictionary, LexicographicTrie};
