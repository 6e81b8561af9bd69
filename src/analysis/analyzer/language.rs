//! Language-specific analyzers.
//!
//! # Examples
//!
//! ```
//! use bayestag::analysis::analyzer::Analyzer;
//! use bayestag::analysis::analyzer::language::english::EnglishAnalyzer;
//!
//! let analyzer = EnglishAnalyzer::new().unwrap();
//! let words = analyzer.words("Hello the world").unwrap();
//!
//! // "the" is a stop word
//! assert_eq!(words, vec!["hello", "world"]);
//! ```

pub mod english;
