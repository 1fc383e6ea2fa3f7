//! GST calculation examples

use bigdecimal::BigDecimal;
use fincalc_core::{format_inr, split_gst, GstCategory};

fn main() {
    println!("🧾 Fincalc Core - GST Calculation Examples\n");

    // 1. Standard GST rates by category
    println!("📊 Standard GST Rates by Category:");
    let categories = [
        (GstCategory::Essential, "Essential items (medicines, food)"),
        (GstCategory::Reduced, "Reduced rate items"),
        (GstCategory::Standard, "Standard rate items"),
        (GstCategory::Higher, "Higher rate items (most services)"),
        (GstCategory::Luxury, "Luxury/Sin goods"),
    ];

    for (category, description) in categories.iter() {
        println!("  {:?}: {}% - {}", category, category.percent(), description);
    }
    println!();

    // 2. Exclusive amount: GST added on top of the base
    println!("➕ GST Exclusive (18% on ₹10,000):");
    let exclusive = split_gst(BigDecimal::from(10000), BigDecimal::from(18), false);

    println!("  Base Amount: {}", format_inr(&exclusive.base_amount, 2));
    println!("  CGST (9%):   {}", format_inr(&exclusive.cgst, 2));
    println!("  SGST (9%):   {}", format_inr(&exclusive.sgst, 2));
    println!("  IGST (18%):  {} (inter-state view)", format_inr(&exclusive.igst, 2));
    println!("  Final Total: {}", format_inr(&exclusive.total_amount, 2));
    println!();

    // 3. Inclusive amount: recover the base from a tax-included price
    println!("🔄 GST Inclusive (₹11,800 including 18%):");
    let inclusive = split_gst(BigDecimal::from(11800), BigDecimal::from(18), true);

    println!("  Given Total: {}", format_inr(&BigDecimal::from(11800), 2));
    println!("  Base Amount: {}", format_inr(&inclusive.base_amount, 2));
    println!("  GST Amount:  {}", format_inr(inclusive.total_gst(), 2));
    println!("  CGST:        {}", format_inr(&inclusive.cgst, 2));
    println!("  SGST:        {}", format_inr(&inclusive.sgst, 2));
    println!();

    // 4. The calculator presets on an awkward price
    println!("🎚️ Preset rates on ₹999 (inclusive):");
    for category in GstCategory::PRESETS {
        let result = category.split(BigDecimal::from(999), true);
        println!(
            "  {:>2}%: base {} + GST {}",
            category.percent(),
            format_inr(&result.base_amount, 2),
            format_inr(&result.igst, 2)
        );
    }

    println!("\n🎉 GST calculation examples completed successfully!");
}
