pub mod converter;
pub mod engine;
pub mod parser;
pub mod types;
