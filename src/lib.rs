//! # Fincalc Core
//!
//! Indian personal finance calculations for small businesses and their
//! accountants.
//!
//! ## Features
//!
//! - **Income tax**: FY 2024-25 new and old regime computation with slab trace, section 87A rebate and 4% cess
//! - **Regime comparison**: side-by-side totals with a recommendation
//! - **GST splitting**: inclusive/exclusive decomposition into CGST, SGST and IGST
//! - **Journal entries**: AI-assisted translation of a transaction description into a double-entry journal entry
//! - **Formatting**: Indian-locale rupee formatting with lakh/crore grouping
//!
//! ## Quick Start
//!
//! ```rust
//! use fincalc_core::{compute_new_regime, split_gst, format_inr};
//! use bigdecimal::BigDecimal;
//!
//! let tax = compute_new_regime(BigDecimal::from(1200000));
//! assert_eq!(format_inr(&tax.total_tax, 0), "₹71,500");
//!
//! let gst = split_gst(BigDecimal::from(10000), BigDecimal::from(18), false);
//! assert_eq!(gst.cgst, BigDecimal::from(900));
//! ```

pub mod config;
pub mod journal;
pub mod tax;
pub mod traits;
pub mod types;
pub mod utils;

// Re-export commonly used types
pub use config::{ConfigError, GeminiConfig};
pub use journal::{GeminiJournalGenerator, JournalEntryBuilder};
pub use tax::*;
pub use traits::*;
pub use types::*;
pub use utils::format::{format_inr, money_from_f64};
pub use utils::static_generator::StaticJournalGenerator;

// Re-export journal patterns for convenience
pub use journal::builder::patterns;
