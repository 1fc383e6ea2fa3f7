//! Integration tests for fincalc-core

use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use fincalc_core::{
    compare_regimes, compute_new_regime, compute_old_regime, compute_regime, format_inr, patterns,
    split_gst, utils::validate_journal_entry, EntryType, GstCategory, JournalError,
    JournalGenerator, RegimeConfig, StaticJournalGenerator, TaxRegime,
};
use pretty_assertions::assert_eq;
use std::str::FromStr;

fn dec(s: &str) -> BigDecimal {
    BigDecimal::from_str(s).unwrap()
}

fn assert_close(actual: &BigDecimal, expected: &BigDecimal) {
    let tolerance = dec("0.0000001");
    assert!(
        (actual - expected).abs() < tolerance,
        "{actual} is not within {tolerance} of {expected}"
    );
}

#[test]
fn test_rebated_incomes_pay_nothing() {
    // new regime: gross up to 7L + 75k standard deduction
    for income in (0..=775_000).step_by(25_000) {
        let result = compute_new_regime(BigDecimal::from(income));
        assert_eq!(result.total_tax, BigDecimal::from(0), "new regime at {income}");
    }

    // old regime: gross up to 5L + 50k standard deduction
    for income in (0..=550_000).step_by(25_000) {
        let result = compute_old_regime(BigDecimal::from(income), BigDecimal::from(0));
        assert_eq!(result.total_tax, BigDecimal::from(0), "old regime at {income}");
    }
}

#[test]
fn test_taxable_income_and_cess_properties() {
    let incomes = [0, 250_000, 600_000, 999_999, 1_500_000, 4_000_000];
    let deductions = [0, 50_000, 150_000, 2_000_000];

    for income in incomes {
        for extra in deductions {
            let result = compute_old_regime(BigDecimal::from(income), BigDecimal::from(extra));
            let expected_taxable =
                (BigDecimal::from(income) - BigDecimal::from(50_000 + extra)).max(BigDecimal::from(0));

            assert_eq!(result.taxable_income, expected_taxable);
            assert_eq!(
                result.total_tax,
                &result.tax_amount * BigDecimal::from(104) / BigDecimal::from(100)
            );
        }
    }
}

#[test]
fn test_total_tax_is_monotonic_in_income() {
    for regime in [TaxRegime::New, TaxRegime::Old] {
        let config = RegimeConfig::for_regime(regime);
        let mut previous = BigDecimal::from(0);

        for income in (0..=3_000_000).step_by(10_000) {
            let result = compute_regime(
                &config,
                BigDecimal::from(income),
                BigDecimal::from(100_000),
            );
            assert!(
                result.total_tax >= previous,
                "{regime} tax decreased at {income}"
            );
            previous = result.total_tax;
        }
    }
}

#[test]
fn test_slab_trace_sums_to_tax_without_rebate() {
    for income in [900_000, 1_200_000, 1_800_000, 5_000_000] {
        let new = compute_new_regime(BigDecimal::from(income));
        assert_eq!(new.slab_total(), new.tax_amount);
        assert!(!new.rebate_applied());

        let old = compute_old_regime(BigDecimal::from(income), BigDecimal::from(0));
        assert_eq!(old.slab_total(), old.tax_amount);
    }
}

#[test]
fn test_published_new_regime_table() {
    let result = compute_new_regime(BigDecimal::from(1200000));

    assert_eq!(result.taxable_income, BigDecimal::from(1125000));
    let labels: Vec<&str> = result.slabs.iter().map(|s| s.slab.as_str()).collect();
    assert_eq!(labels, vec!["0 - 3L", "3L - 7L", "7L - 10L", "10L - 12L"]);
    let rates: Vec<&str> = result.slabs.iter().map(|s| s.rate.as_str()).collect();
    assert_eq!(rates, vec!["0%", "5%", "10%", "15%"]);
    assert_eq!(result.total_tax, BigDecimal::from(71500));
    assert_eq!(format_inr(&result.total_tax, 0), "₹71,500");
}

#[test]
fn test_rebate_scenarios() {
    let new = compute_new_regime(BigDecimal::from(700000));
    assert_eq!(new.taxable_income, BigDecimal::from(625000));
    assert_eq!(new.total_tax, BigDecimal::from(0));
    assert_eq!(new.slab_total(), BigDecimal::from(16250));

    let old = compute_old_regime(BigDecimal::from(600000), BigDecimal::from(150000));
    assert_eq!(old.deductions, BigDecimal::from(200000));
    assert_eq!(old.taxable_income, BigDecimal::from(400000));
    assert_eq!(old.total_tax, BigDecimal::from(0));
}

#[test]
fn test_regime_comparison_serializes() {
    let comparison = compare_regimes(BigDecimal::from(1200000), BigDecimal::from(150000));
    let json = serde_json::to_value(&comparison).unwrap();

    assert_eq!(json["recommended"], "NEW");
    assert_eq!(json["new_regime"]["regime"], "NEW");
    assert_eq!(json["old_regime"]["slabs"].as_array().unwrap().len(), 3);
}

#[test]
fn test_gst_scenarios() {
    let exclusive = split_gst(BigDecimal::from(10000), BigDecimal::from(18), false);
    assert_eq!(exclusive.base_amount, BigDecimal::from(10000));
    assert_eq!(exclusive.cgst, BigDecimal::from(900));
    assert_eq!(exclusive.sgst, BigDecimal::from(900));
    assert_eq!(exclusive.igst, BigDecimal::from(1800));
    assert_eq!(exclusive.total_amount, BigDecimal::from(11800));

    let inclusive = split_gst(BigDecimal::from(11800), BigDecimal::from(18), true);
    assert_close(&inclusive.base_amount, &BigDecimal::from(10000));
    assert_close(&inclusive.igst, &BigDecimal::from(1800));
    assert_close(&inclusive.total_amount, &BigDecimal::from(11800));
}

#[test]
fn test_gst_round_trip_and_symmetry() {
    let amounts = ["0", "1", "999.99", "12345.67", "1000000"];
    let rates = ["0", "0.25", "3", "5", "12", "18", "28"];

    for amount in amounts {
        for rate in rates {
            let x = dec(amount);
            let r = dec(rate);

            let forward = split_gst(x.clone(), r.clone(), false);
            let back = split_gst(forward.total_amount.clone(), r.clone(), true);
            assert_close(&back.base_amount, &x);

            for result in [&forward, &back] {
                assert_eq!(result.cgst, result.sgst);
                assert_close(&(&result.cgst * BigDecimal::from(2)), &result.igst);
                assert_close(&result.total_amount, &(&result.base_amount + &result.igst));
            }
        }
    }
}

#[test]
fn test_gst_presets_match_calculator_buttons() {
    let rates: Vec<u32> = GstCategory::PRESETS.iter().map(|c| c.percent()).collect();

    assert_eq!(rates, vec![5, 12, 18, 28]);
}

#[tokio::test]
async fn test_generated_entry_from_static_generator() {
    let date = NaiveDate::from_ymd_opt(2024, 4, 1).unwrap();
    let entry = patterns::purchase_with_gst(
        date,
        "Sharma Traders",
        BigDecimal::from(10000),
        BigDecimal::from(18),
    )
    .unwrap();
    let generator = StaticJournalGenerator::new().with_entry("Bought goods from Sharma Traders", entry);

    let generated = generator
        .generate("Bought goods from Sharma Traders")
        .await
        .unwrap();

    assert!(validate_journal_entry(&generated).is_ok());
    assert_eq!(generated.debits().count(), 3);
    assert_eq!(generated.particulars[3].entry_type, EntryType::Credit);
    assert_eq!(generated.total_credits(), BigDecimal::from(11800));

    let missing = generator.generate("Paid rent").await.unwrap_err();
    assert!(matches!(missing, JournalError::EmptyResponse));
    assert_eq!(
        missing.user_message(),
        "Failed to generate journal entry. Please try again."
    );
}

#[test]
fn test_journal_entry_json_round_trip() {
    let json = r#"{
        "date": "2024-04-01",
        "particulars": [
            {"account": "Salary A/c", "type": "Dr", "amount": 25000.5},
            {"account": "Bank A/c", "type": "Cr", "amount": 25000.5}
        ],
        "narration": "Being salary paid by bank transfer",
        "reasoning": "Salary is a nominal account; Bank is a personal account"
    }"#;

    let entry: fincalc_core::JournalEntry = serde_json::from_str(json).unwrap();
    assert_eq!(entry.total_debits(), dec("25000.5"));

    let reparsed: fincalc_core::JournalEntry =
        serde_json::from_str(&serde_json::to_string(&entry).unwrap()).unwrap();
    assert_eq!(reparsed, entry);
}
