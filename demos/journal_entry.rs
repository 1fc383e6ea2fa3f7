//! Journal entry examples
//!
//! Runs offline against the in-memory generator. Set GEMINI_API_KEY to send
//! the same transaction to the Gemini API instead.

use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use fincalc_core::{
    format_inr, patterns, EntryType, GeminiConfig, GeminiJournalGenerator, JournalEntry,
    JournalGenerator, StaticJournalGenerator,
};

fn print_entry(entry: &JournalEntry) {
    println!("  Date: {}", entry.date);
    for line in &entry.particulars {
        match line.entry_type {
            EntryType::Debit => println!(
                "    {:<36} Dr  {:>14}",
                line.account,
                format_inr(&line.amount, 2)
            ),
            EntryType::Credit => println!(
                "        To {:<32}     {:>14}",
                line.account,
                format_inr(&line.amount, 2)
            ),
        }
    }
    println!("    ({})", entry.narration);
    println!("  Balanced: {}", entry.is_balanced());
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("📒 Fincalc Core - Journal Entry Examples\n");

    let date = NaiveDate::from_ymd_opt(2024, 4, 1).ok_or("invalid date")?;
    let transaction = "Purchased goods worth 10000 from Sharma Traders on credit, GST 18%";

    let generator: Box<dyn JournalGenerator> = match GeminiConfig::from_env() {
        Ok(config) => {
            println!("🤖 Using Gemini model {}\n", config.model);
            Box::new(GeminiJournalGenerator::new(config)?)
        }
        Err(_) => {
            println!("📦 GEMINI_API_KEY not set, using canned entries\n");
            let entry = patterns::purchase_with_gst(
                date,
                "Sharma Traders",
                BigDecimal::from(10000),
                BigDecimal::from(18),
            )?;
            Box::new(StaticJournalGenerator::new().with_entry(transaction, entry))
        }
    };

    println!("📝 {transaction}");
    match generator.generate(transaction).await {
        Ok(entry) => {
            print_entry(&entry);
            println!("  Reasoning: {}", entry.reasoning);
        }
        Err(e) => println!("  ❌ {}", e.user_message()),
    }
    println!();

    println!("💵 Cash sale of ₹5,000 at 12% GST:");
    print_entry(&patterns::cash_sale_with_gst(
        date,
        BigDecimal::from(5000),
        BigDecimal::from(12),
    )?);

    Ok(())
}
