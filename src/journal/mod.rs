//! Journal module: entry construction and AI-assisted generation

pub mod builder;
pub mod gemini;

pub use builder::*;
pub use gemini::GeminiJournalGenerator;
