//! Fluent construction of journal entries

use bigdecimal::BigDecimal;
use chrono::NaiveDate;

use crate::types::*;
use crate::utils::validation::validate_journal_entry;

/// Journal entry builder for creating multi-line entries
#[derive(Debug)]
pub struct JournalEntryBuilder {
    entry: JournalEntry,
}

impl JournalEntryBuilder {
    /// Create a new builder dated today
    pub fn new() -> Self {
        Self::dated(chrono::Local::now().date_naive())
    }

    /// Create a new builder for a specific date
    pub fn dated(date: NaiveDate) -> Self {
        Self {
            entry: JournalEntry {
                date: date.format("%Y-%m-%d").to_string(),
                particulars: Vec::new(),
                narration: String::new(),
                reasoning: String::new(),
            },
        }
    }

    /// Override the date with free-form text
    pub fn date(mut self, date: impl Into<String>) -> Self {
        self.entry.date = date.into();
        self
    }

    /// Add a debit line
    pub fn debit(mut self, account: impl Into<String>, amount: BigDecimal) -> Self {
        self.entry
            .particulars
            .push(JournalLine::debit(account, amount));
        self
    }

    /// Add a credit line
    pub fn credit(mut self, account: impl Into<String>, amount: BigDecimal) -> Self {
        self.entry
            .particulars
            .push(JournalLine::credit(account, amount));
        self
    }

    pub fn narration(mut self, narration: impl Into<String>) -> Self {
        self.entry.narration = narration.into();
        self
    }

    pub fn reasoning(mut self, reasoning: impl Into<String>) -> Self {
        self.entry.reasoning = reasoning.into();
        self
    }

    /// Build the entry, checking double-entry rules
    pub fn build(self) -> JournalResult<JournalEntry> {
        validate_journal_entry(&self.entry)?;
        Ok(self.entry)
    }

    /// Build the entry without any checks
    pub fn build_unchecked(self) -> JournalEntry {
        self.entry
    }
}

impl Default for JournalEntryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Common journal entry patterns
pub mod patterns {
    use super::*;
    use crate::tax::gst::split_gst;

    /// Capital introduced in cash (debit cash, credit capital)
    pub fn capital_introduced(date: NaiveDate, amount: BigDecimal) -> JournalResult<JournalEntry> {
        JournalEntryBuilder::dated(date)
            .debit("Cash A/c", amount.clone())
            .credit("Capital A/c", amount)
            .narration("Being capital introduced into the business in cash")
            .reasoning("Cash is a real account: debit what comes in. Capital is a personal account: credit the giver.")
            .build()
    }

    /// Intra-state purchase with input CGST/SGST paid to a supplier
    pub fn purchase_with_gst(
        date: NaiveDate,
        supplier: &str,
        base_amount: BigDecimal,
        rate_percent: BigDecimal,
    ) -> JournalResult<JournalEntry> {
        let gst = split_gst(base_amount, rate_percent, false);

        JournalEntryBuilder::dated(date)
            .debit("Purchases A/c", gst.base_amount.clone())
            .debit("Input CGST A/c", gst.cgst.clone())
            .debit("Input SGST A/c", gst.sgst.clone())
            .credit(format!("{supplier} A/c"), gst.total_amount.clone())
            .narration(format!("Being goods purchased from {supplier} on credit"))
            .reasoning("Purchases is a nominal account: debit expenses. Input GST is recoverable. The supplier is a personal account: credit the giver.")
            .build()
    }

    /// Intra-state cash sale with output CGST/SGST collected
    pub fn cash_sale_with_gst(
        date: NaiveDate,
        base_amount: BigDecimal,
        rate_percent: BigDecimal,
    ) -> JournalResult<JournalEntry> {
        let gst = split_gst(base_amount, rate_percent, false);

        JournalEntryBuilder::dated(date)
            .debit("Cash A/c", gst.total_amount.clone())
            .credit("Sales A/c", gst.base_amount.clone())
            .credit("Output CGST A/c", gst.cgst.clone())
            .credit("Output SGST A/c", gst.sgst.clone())
            .narration("Being goods sold for cash")
            .reasoning("Cash is a real account: debit what comes in. Sales is a nominal account: credit incomes. Output GST is a liability.")
            .build()
    }
}
