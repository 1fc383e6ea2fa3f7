//! Income-tax computation for the old and new regimes (FY 2024-25)
//!
//! Both regimes run through [`compute_regime`]; they differ only in the
//! [`RegimeConfig`] they pass in.

use bigdecimal::BigDecimal;
use tracing::debug;

use crate::tax::slab::{SlabTable, NEW_REGIME_SLABS, OLD_REGIME_SLABS};
use crate::types::*;

/// Health and education cess, in percent of the tax amount
pub const CESS_PERCENT: u32 = 4;

/// Statutory parameters of one regime
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegimeConfig {
    pub regime: TaxRegime,
    /// Standard deduction applied to every taxpayer
    pub standard_deduction: u64,
    /// Taxable income at or below which the section 87A rebate waives all tax
    pub rebate_threshold: u64,
    pub table: SlabTable,
}

impl RegimeConfig {
    /// New regime parameters
    pub const fn new_regime() -> Self {
        Self {
            regime: TaxRegime::New,
            standard_deduction: 75_000,
            rebate_threshold: 700_000,
            table: NEW_REGIME_SLABS,
        }
    }

    /// Old regime parameters
    pub const fn old_regime() -> Self {
        Self {
            regime: TaxRegime::Old,
            standard_deduction: 50_000,
            rebate_threshold: 500_000,
            table: OLD_REGIME_SLABS,
        }
    }

    /// Parameters for the given regime
    pub const fn for_regime(regime: TaxRegime) -> Self {
        match regime {
            TaxRegime::New => Self::new_regime(),
            TaxRegime::Old => Self::old_regime(),
        }
    }
}

/// Compute the tax breakdown for any regime.
///
/// `extra_deductions` is added to the standard deduction. The rebate sets
/// `tax_amount` to zero but leaves the slab trace untouched.
pub fn compute_regime(
    config: &RegimeConfig,
    gross_income: BigDecimal,
    extra_deductions: BigDecimal,
) -> TaxBreakdown {
    let zero = BigDecimal::from(0);

    let deductions = BigDecimal::from(config.standard_deduction) + extra_deductions;
    let taxable_income = (&gross_income - &deductions).max(zero.clone());

    let (slab_tax, slabs) = config.table.apply(&taxable_income);

    let tax_amount = if taxable_income <= BigDecimal::from(config.rebate_threshold) {
        if slab_tax > zero {
            debug!(
                regime = %config.regime,
                taxable_income = %taxable_income,
                waived = %slab_tax,
                "section 87A rebate applied"
            );
        }
        zero
    } else {
        slab_tax
    };

    let cess = &tax_amount * BigDecimal::from(CESS_PERCENT) / BigDecimal::from(100);
    let total_tax = &tax_amount + &cess;

    debug!(
        regime = %config.regime,
        taxable_income = %taxable_income,
        total_tax = %total_tax,
        "computed income tax"
    );

    TaxBreakdown {
        regime: config.regime,
        gross_income,
        deductions,
        taxable_income,
        tax_amount,
        cess,
        total_tax,
        slabs,
    }
}

/// Tax under the new regime. Itemized deductions are not allowed.
pub fn compute_new_regime(gross_income: BigDecimal) -> TaxBreakdown {
    compute_regime(
        &RegimeConfig::new_regime(),
        gross_income,
        BigDecimal::from(0),
    )
}

/// Tax under the old regime with caller-supplied itemized deductions
/// (80C, 80D and similar).
pub fn compute_old_regime(gross_income: BigDecimal, itemized_deductions: BigDecimal) -> TaxBreakdown {
    compute_regime(&RegimeConfig::old_regime(), gross_income, itemized_deductions)
}

/// Compute both regimes and recommend the cheaper one.
///
/// The new regime is recommended only when it is strictly cheaper.
pub fn compare_regimes(gross_income: BigDecimal, itemized_deductions: BigDecimal) -> RegimeComparison {
    let new_regime = compute_new_regime(gross_income.clone());
    let old_regime = compute_old_regime(gross_income, itemized_deductions);

    let (recommended, savings) = if new_regime.total_tax < old_regime.total_tax {
        (TaxRegime::New, &old_regime.total_tax - &new_regime.total_tax)
    } else {
        (TaxRegime::Old, &new_regime.total_tax - &old_regime.total_tax)
    };

    RegimeComparison {
        new_regime,
        old_regime,
        recommended,
        savings,
    }
}
