// src/lib.rs

pub mod config;
pub mod core;
pub mod error;
pub mod fetch;
pub mod persistence;

pub use crate::config::GeneratorConfig;
pub use crate::core::engine::{build_dictionary, DictGenerator, GenerationSummary};
pub use crate::core::types::PinyinDict;
pub use crate::error::{DictError, LineError};
