//! Income tax regime comparison examples

use bigdecimal::BigDecimal;
use fincalc_core::{compare_regimes, compute_new_regime, format_inr, TaxBreakdown};

fn show(breakdown: &TaxBreakdown) {
    println!("  {}:", breakdown.regime);
    println!("    Taxable Income: {}", format_inr(&breakdown.taxable_income, 0));
    for slab in &breakdown.slabs {
        println!(
            "      {:<10} {:>4}  {}",
            slab.slab,
            slab.rate,
            format_inr(&slab.amount, 0)
        );
    }
    println!("    Basic Tax:      {}", format_inr(&breakdown.tax_amount, 0));
    println!("    Cess:           {}", format_inr(&breakdown.cess, 0));
    println!("    Total Tax:      {}", format_inr(&breakdown.total_tax, 0));
}

fn main() {
    println!("💰 Fincalc Core - Income Tax Examples (FY 2024-25)\n");

    // 1. Full breakdown for a salaried taxpayer
    println!("📋 ₹12,00,000 gross with ₹1,50,000 of 80C/80D deductions:");
    let comparison = compare_regimes(BigDecimal::from(1200000), BigDecimal::from(150000));
    show(&comparison.new_regime);
    show(&comparison.old_regime);
    println!(
        "  ➡️ The {} saves you {}.",
        comparison.recommended,
        format_inr(&comparison.savings, 0)
    );
    println!();

    // 2. Rebate under section 87A keeps the slab trace
    println!("🎁 Rebate example (₹7,00,000 gross, new regime):");
    let rebated = compute_new_regime(BigDecimal::from(700000));
    show(&rebated);
    println!(
        "  Slab trace still sums to {} before the rebate.",
        format_inr(&rebated.slab_total(), 0)
    );
    println!();

    // 3. Where the regimes cross over
    println!("📈 Total tax by income (no itemized deductions):");
    for lakhs in [5, 8, 10, 15, 20, 30, 50] {
        let income = BigDecimal::from(lakhs * 100_000);
        let c = compare_regimes(income.clone(), BigDecimal::from(0));
        println!(
            "  {:>12}  new {:>10}  old {:>10}  take home {:>12}",
            format_inr(&income, 0),
            format_inr(&c.new_regime.total_tax, 0),
            format_inr(&c.old_regime.total_tax, 0),
            format_inr(&c.recommended_breakdown().take_home(), 0)
        );
    }
}
