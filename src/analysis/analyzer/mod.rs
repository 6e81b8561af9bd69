//! Analyzer implementations that combine tokenizers and filters.

mod analyzer;
mod function;
pub mod language;
mod pipeline;

pub use analyzer::Analyzer;
pub use function::FnAnalyzer;
pub use language::english::{EnglishAnalyzer, english_tokenizer};
pub use pipeline::PipelineAnalyzer;
