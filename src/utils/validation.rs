//! Validation utilities for journal entries

use bigdecimal::BigDecimal;

use crate::types::*;

/// Validate that an amount is positive
pub fn validate_positive_amount(amount: &BigDecimal) -> JournalResult<()> {
    if *amount <= BigDecimal::from(0) {
        Err(JournalError::InvalidEntry(
            "Amount must be positive".to_string(),
        ))
    } else {
        Ok(())
    }
}

/// Validate that an account name is valid
pub fn validate_account_name(name: &str) -> JournalResult<()> {
    if name.trim().is_empty() {
        return Err(JournalError::InvalidEntry(
            "Account name cannot be empty".to_string(),
        ));
    }

    if name.len() > 100 {
        return Err(JournalError::InvalidEntry(
            "Account name cannot exceed 100 characters".to_string(),
        ));
    }

    Ok(())
}

/// Check a journal entry against double-entry rules
///
/// Generated entries are returned as-is; callers that post them to a
/// ledger can run this first.
pub fn validate_journal_entry(entry: &JournalEntry) -> JournalResult<()> {
    if entry.particulars.len() < 2 {
        return Err(JournalError::InvalidEntry(
            "Journal entry must have at least two lines for double-entry bookkeeping"
                .to_string(),
        ));
    }

    for line in &entry.particulars {
        validate_account_name(&line.account)?;
        validate_positive_amount(&line.amount)?;
    }

    if entry.debits().next().is_none() || entry.credits().next().is_none() {
        return Err(JournalError::InvalidEntry(
            "Journal entry needs at least one debit and one credit".to_string(),
        ));
    }

    if !entry.is_balanced() {
        return Err(JournalError::InvalidEntry(format!(
            "Journal entry is not balanced: debits = {}, credits = {}",
            entry.total_debits(),
            entry.total_credits()
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(lines: Vec<JournalLine>) -> JournalEntry {
        JournalEntry {
            date: "2024-04-01".to_string(),
            particulars: lines,
            narration: "Being test".to_string(),
            reasoning: String::new(),
        }
    }

    #[test]
    fn test_valid_entry() {
        let e = entry(vec![
            JournalLine::debit("Cash A/c", BigDecimal::from(100)),
            JournalLine::credit("Sales A/c", BigDecimal::from(100)),
        ]);

        assert!(validate_journal_entry(&e).is_ok());
    }

    #[test]
    fn test_single_line_rejected() {
        let e = entry(vec![JournalLine::debit("Cash A/c", BigDecimal::from(100))]);

        assert!(validate_journal_entry(&e).is_err());
    }

    #[test]
    fn test_one_sided_entry_rejected() {
        let e = entry(vec![
            JournalLine::debit("Cash A/c", BigDecimal::from(100)),
            JournalLine::debit("Bank A/c", BigDecimal::from(100)),
        ]);

        let err = validate_journal_entry(&e).unwrap_err();
        assert!(err.to_string().contains("one debit and one credit"));
    }

    #[test]
    fn test_zero_amount_rejected() {
        let e = entry(vec![
            JournalLine::debit("Cash A/c", BigDecimal::from(0)),
            JournalLine::credit("Sales A/c", BigDecimal::from(0)),
        ]);

        assert!(validate_journal_entry(&e).is_err());
    }

    #[test]
    fn test_blank_account_rejected() {
        let e = entry(vec![
            JournalLine::debit("  ", BigDecimal::from(100)),
            JournalLine::credit("Sales A/c", BigDecimal::from(100)),
        ]);

        assert!(validate_journal_entry(&e).is_err());
    }

    #[test]
    fn test_unbalanced_entry_rejected() {
        let e = entry(vec![
            JournalLine::debit("Cash A/c", BigDecimal::from(100)),
            JournalLine::credit("Sales A/c", BigDecimal::from(90)),
        ]);

        let err = validate_journal_entry(&e).unwrap_err();
        assert!(err.to_string().contains("not balanced"));
    }
}
