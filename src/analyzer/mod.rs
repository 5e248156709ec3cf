pub mod bump_analyzer;

pub use bump_analyzer::BumpAnalyzer;
