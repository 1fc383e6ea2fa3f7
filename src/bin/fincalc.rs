use anyhow::{Context, Result};
use bigdecimal::BigDecimal;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use fincalc_core::{
    compare_regimes, format_inr, split_gst, GeminiConfig, GeminiJournalGenerator, JournalGenerator,
    TaxBreakdown,
};

/// Indian income tax, GST and journal entry calculator.
///
/// Set RUST_LOG=debug to trace the computations. The journal command reads
/// GEMINI_API_KEY (or API_KEY), GEMINI_MODEL, GEMINI_BASE_URL and
/// GEMINI_TIMEOUT_SECS from the environment.
#[derive(Parser, Debug)]
#[command(name = "fincalc")]
#[command(version, about, long_about = None)]
struct Args {
    /// Print results as JSON
    #[arg(long, global = true, default_value_t = false)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compare income tax under the new and old regimes (FY 2024-25)
    Tax {
        /// Annual gross income in rupees
        #[arg(short, long)]
        income: BigDecimal,

        /// Itemized deductions (80C, 80D, ...), old regime only
        #[arg(short, long, default_value = "0")]
        deductions: BigDecimal,
    },
    /// Split an amount into base value, CGST, SGST and IGST
    Gst {
        /// Amount in rupees
        #[arg(short, long)]
        amount: BigDecimal,

        /// GST rate in percent
        #[arg(short, long, default_value = "18")]
        rate: BigDecimal,

        /// The amount already includes GST
        #[arg(long, default_value_t = false)]
        inclusive: bool,
    },
    /// Translate a transaction description into a journal entry
    Journal {
        /// Transaction description, e.g. "Bought goods worth 5000 from Ram on credit"
        transaction: String,
    },
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn percent(rate: &BigDecimal) -> String {
    if rate.is_integer() {
        rate.with_scale(0).to_string()
    } else {
        rate.normalized().to_string()
    }
}

fn print_breakdown(breakdown: &TaxBreakdown) {
    println!("{}", breakdown.regime);
    println!("  Gross Income:     {}", format_inr(&breakdown.gross_income, 0));
    println!("  Deductions:       {}", format_inr(&breakdown.deductions, 0));
    println!("  Taxable Income:   {}", format_inr(&breakdown.taxable_income, 0));
    for slab in &breakdown.slabs {
        println!(
            "    {:<12} @ {:>4}  {}",
            slab.slab,
            slab.rate,
            format_inr(&slab.amount, 0)
        );
    }
    if breakdown.rebate_applied() {
        println!("  Rebate u/s 87A:   full");
    }
    println!("  Basic Tax:        {}", format_inr(&breakdown.tax_amount, 0));
    println!("  Cess (4%):        {}", format_inr(&breakdown.cess, 0));
    println!("  Total Tax:        {}", format_inr(&breakdown.total_tax, 0));
    println!("  Take Home:        {}", format_inr(&breakdown.take_home(), 0));
    println!();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    match args.command {
        Command::Tax { income, deductions } => {
            let comparison = compare_regimes(income, deductions);

            if args.json {
                println!("{}", serde_json::to_string_pretty(&comparison)?);
                return Ok(());
            }

            print_breakdown(&comparison.new_regime);
            print_breakdown(&comparison.old_regime);
            println!(
                "Recommendation: the {} saves you {}.",
                comparison.recommended,
                format_inr(&comparison.savings, 0)
            );
        }
        Command::Gst {
            amount,
            rate,
            inclusive,
        } => {
            let gst = split_gst(amount, rate, inclusive);

            if args.json {
                println!("{}", serde_json::to_string_pretty(&gst)?);
                return Ok(());
            }

            let half_rate = percent(&gst.half_rate());
            println!("Base Amount:            {}", format_inr(&gst.base_amount, 2));
            println!("CGST (Central - {half_rate}%):  {}", format_inr(&gst.cgst, 2));
            println!("SGST (State - {half_rate}%):    {}", format_inr(&gst.sgst, 2));
            println!(
                "IGST (Inter-state - {}%): {}",
                percent(&gst.gst_rate),
                format_inr(&gst.igst, 2)
            );
            println!("Total Amount:           {}", format_inr(&gst.total_amount, 2));
        }
        Command::Journal { transaction } => {
            let config = GeminiConfig::from_env().context("Failed to load Gemini configuration")?;
            let generator =
                GeminiJournalGenerator::new(config).context("Failed to create Gemini client")?;

            let entry = match generator.generate(&transaction).await {
                Ok(entry) => entry,
                Err(err) => {
                    tracing::error!(error = %err, "journal generation failed");
                    anyhow::bail!(err.user_message());
                }
            };

            if args.json {
                println!("{}", serde_json::to_string_pretty(&entry)?);
                return Ok(());
            }

            println!("Date: {}", entry.date);
            for line in &entry.particulars {
                let account = match line.entry_type {
                    fincalc_core::EntryType::Debit => format!("{} ... Dr", line.account),
                    fincalc_core::EntryType::Credit => format!("    To {}", line.account),
                };
                println!("  {:<40} {:>16}", account, format_inr(&line.amount, 2));
            }
            println!("  ({})", entry.narration);
            println!();
            println!("Reasoning: {}", entry.reasoning);
        }
    }

    Ok(())
}
