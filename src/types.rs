//! Core types and data structures for the tax, GST and journal modules

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

/// Income-tax regimes modeled by the slab engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaxRegime {
    /// Old regime - lower standard deduction, itemized deductions allowed
    #[serde(rename = "OLD")]
    Old,
    /// New regime - default since FY 2023-24, wider slabs, no itemized deductions
    #[serde(rename = "NEW")]
    New,
}

impl TaxRegime {
    /// Display name used in reports
    pub fn name(&self) -> &'static str {
        match self {
            TaxRegime::Old => "Old Regime",
            TaxRegime::New => "New Regime",
        }
    }
}

impl std::fmt::Display for TaxRegime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Tax contributed by a single slab
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlabAmount {
    /// Slab label, e.g. "3L - 7L"
    pub slab: String,
    /// Marginal rate label, e.g. "5%"
    pub rate: String,
    /// Tax computed for the income falling inside this slab
    pub amount: BigDecimal,
}

/// Full income-tax breakdown for one regime
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxBreakdown {
    /// Regime that produced this result
    pub regime: TaxRegime,
    /// Gross income as supplied by the caller
    pub gross_income: BigDecimal,
    /// Standard deduction plus itemized deductions (old regime only)
    pub deductions: BigDecimal,
    /// max(0, gross income - deductions)
    pub taxable_income: BigDecimal,
    /// Slab tax after the rebate override, before cess
    pub tax_amount: BigDecimal,
    /// Health and education cess (4% of tax amount)
    pub cess: BigDecimal,
    /// Tax amount plus cess
    pub total_tax: BigDecimal,
    /// Per-slab trace in ascending bracket order.
    ///
    /// The rebate overrides `tax_amount` only; the trace keeps the
    /// pre-rebate amounts.
    pub slabs: Vec<SlabAmount>,
}

impl TaxBreakdown {
    /// Income left after paying tax and cess
    pub fn take_home(&self) -> BigDecimal {
        &self.gross_income - &self.total_tax
    }

    /// Sum of the slab trace (the tax before any rebate)
    pub fn slab_total(&self) -> BigDecimal {
        self.slabs.iter().map(|s| &s.amount).sum()
    }

    /// Whether the rebate wiped out a non-zero slab tax
    pub fn rebate_applied(&self) -> bool {
        let zero = BigDecimal::from(0);
        self.tax_amount == zero && self.slab_total() > zero
    }
}

/// Side-by-side result of both regimes with a recommendation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegimeComparison {
    pub new_regime: TaxBreakdown,
    pub old_regime: TaxBreakdown,
    /// Regime with the lower total tax (old regime on a tie)
    pub recommended: TaxRegime,
    /// Absolute difference between the two total tax figures
    pub savings: BigDecimal,
}

impl RegimeComparison {
    /// Breakdown of the recommended regime
    pub fn recommended_breakdown(&self) -> &TaxBreakdown {
        match self.recommended {
            TaxRegime::New => &self.new_regime,
            TaxRegime::Old => &self.old_regime,
        }
    }
}

/// GST decomposition of a single amount
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GstBreakdown {
    /// Net (pre-tax) value
    pub base_amount: BigDecimal,
    /// Requested GST rate percentage (e.g. 18 for 18%)
    pub gst_rate: BigDecimal,
    /// Central GST - half of total GST
    pub cgst: BigDecimal,
    /// State GST - half of total GST
    pub sgst: BigDecimal,
    /// Integrated GST - the full GST amount.
    ///
    /// Alternate inter-state view of the same tax, never added to CGST + SGST.
    pub igst: BigDecimal,
    /// Base amount plus CGST and SGST
    pub total_amount: BigDecimal,
    /// Whether the input amount already included GST
    pub is_inclusive: bool,
}

impl GstBreakdown {
    /// Total GST charged (same as IGST)
    pub fn total_gst(&self) -> &BigDecimal {
        &self.igst
    }

    /// CGST/SGST rate percentage, half of the GST rate
    pub fn half_rate(&self) -> BigDecimal {
        &self.gst_rate / BigDecimal::from(2)
    }
}

/// Types of entries in double-entry bookkeeping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntryType {
    /// Debit entry - increases Assets and Expenses, decreases Liabilities, Equity, and Income
    #[serde(rename = "Dr")]
    Debit,
    /// Credit entry - increases Liabilities, Equity, and Income, decreases Assets and Expenses
    #[serde(rename = "Cr")]
    Credit,
}

impl EntryType {
    /// Conventional ledger abbreviation
    pub fn abbreviation(&self) -> &'static str {
        match self {
            EntryType::Debit => "Dr",
            EntryType::Credit => "Cr",
        }
    }
}

/// One line in the particulars column of a journal entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalLine {
    /// Account name following Indian conventions, e.g. "Cash A/c"
    pub account: String,
    /// Debit or credit side
    #[serde(rename = "type")]
    pub entry_type: EntryType,
    /// Amount posted to the account
    #[serde(with = "amount_serde")]
    pub amount: BigDecimal,
}

impl JournalLine {
    /// Create a debit line
    pub fn debit(account: impl Into<String>, amount: BigDecimal) -> Self {
        Self {
            account: account.into(),
            entry_type: EntryType::Debit,
            amount,
        }
    }

    /// Create a credit line
    pub fn credit(account: impl Into<String>, amount: BigDecimal) -> Self {
        Self {
            account: account.into(),
            entry_type: EntryType::Credit,
            amount,
        }
    }
}

/// Double-entry journal entry produced from a transaction description
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalEntry {
    /// Transaction date as suggested by the generator
    pub date: String,
    /// Debit and credit lines in posting order
    pub particulars: Vec<JournalLine>,
    /// Narration, conventionally starting with "Being ..."
    pub narration: String,
    /// Explanation of the golden rules applied
    pub reasoning: String,
}

impl JournalEntry {
    /// Debit lines in posting order
    pub fn debits(&self) -> impl Iterator<Item = &JournalLine> {
        self.particulars
            .iter()
            .filter(|l| l.entry_type == EntryType::Debit)
    }

    /// Credit lines in posting order
    pub fn credits(&self) -> impl Iterator<Item = &JournalLine> {
        self.particulars
            .iter()
            .filter(|l| l.entry_type == EntryType::Credit)
    }

    /// Calculate total debits
    pub fn total_debits(&self) -> BigDecimal {
        self.debits().map(|l| &l.amount).sum()
    }

    /// Calculate total credits
    pub fn total_credits(&self) -> BigDecimal {
        self.credits().map(|l| &l.amount).sum()
    }

    /// Check if the entry is balanced (debits = credits)
    pub fn is_balanced(&self) -> bool {
        self.total_debits() == self.total_credits()
    }
}

/// Errors that can occur while generating a journal entry
#[derive(Debug, thiserror::Error)]
pub enum JournalError {
    #[error("Gemini API key is not configured")]
    MissingApiKey,
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Generation service returned {status}: {message}")]
    Api { status: u16, message: String },
    #[error("Generation service returned no content")]
    EmptyResponse,
    #[error("Malformed journal entry: {0}")]
    MalformedEntry(#[from] serde_json::Error),
    #[error("Invalid journal entry: {0}")]
    InvalidEntry(String),
}

impl JournalError {
    /// Message shown to end users regardless of the underlying cause
    pub fn user_message(&self) -> &'static str {
        "Failed to generate journal entry. Please try again."
    }
}

/// Result type for journal operations
pub type JournalResult<T> = Result<T, JournalError>;

/// Amounts arrive as JSON numbers from the generation service and as
/// strings from our own serializer; both parse through the decimal text
/// so no binary float rounding leaks into the ledger.
mod amount_serde {
    use bigdecimal::BigDecimal;
    use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
    use std::str::FromStr;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Number(serde_json::Number),
        Text(String),
    }

    pub fn serialize<S: Serializer>(value: &BigDecimal, serializer: S) -> Result<S::Ok, S::Error> {
        value.serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<BigDecimal, D::Error> {
        let text = match Repr::deserialize(deserializer)? {
            Repr::Number(n) => n.to_string(),
            Repr::Text(s) => s,
        };
        BigDecimal::from_str(text.trim()).map_err(de::Error::custom)
    }
}
