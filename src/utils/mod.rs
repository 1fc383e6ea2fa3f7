//! Utility modules

pub mod format;
pub mod static_generator;
pub mod validation;

pub use format::*;
pub use static_generator::*;
pub use validation::*;
