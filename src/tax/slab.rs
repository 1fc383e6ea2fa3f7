//! Progressive slab tables and the bracket-walking routine shared by both regimes

use bigdecimal::BigDecimal;

use crate::types::SlabAmount;

/// One income bracket with its marginal rate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slab {
    /// Cumulative upper bound of the bracket; `None` for the top bracket
    pub upper_limit: Option<u64>,
    /// Marginal rate in whole percent
    pub rate_percent: u32,
    /// Human-readable bracket label
    pub label: &'static str,
}

impl Slab {
    const fn new(upper_limit: Option<u64>, rate_percent: u32, label: &'static str) -> Self {
        Self {
            upper_limit,
            rate_percent,
            label,
        }
    }

    /// Rate label as shown in the slab trace, e.g. "15%"
    pub fn rate_label(&self) -> String {
        format!("{}%", self.rate_percent)
    }
}

/// Ordered set of brackets, ascending by upper limit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlabTable {
    slabs: &'static [Slab],
}

/// FY 2024-25 new regime slabs (Budget 2024)
pub const NEW_REGIME_SLABS: SlabTable = SlabTable {
    slabs: &[
        Slab::new(Some(300_000), 0, "0 - 3L"),
        Slab::new(Some(700_000), 5, "3L - 7L"),
        Slab::new(Some(1_000_000), 10, "7L - 10L"),
        Slab::new(Some(1_200_000), 15, "10L - 12L"),
        Slab::new(Some(1_500_000), 20, "12L - 15L"),
        Slab::new(None, 30, "Above 15L"),
    ],
};

/// Old regime slabs for individuals below 60
pub const OLD_REGIME_SLABS: SlabTable = SlabTable {
    slabs: &[
        Slab::new(Some(250_000), 0, "0 - 2.5L"),
        Slab::new(Some(500_000), 5, "2.5L - 5L"),
        Slab::new(Some(1_000_000), 20, "5L - 10L"),
        Slab::new(None, 30, "Above 10L"),
    ],
};

impl SlabTable {
    /// Brackets in ascending order
    pub fn slabs(&self) -> &'static [Slab] {
        self.slabs
    }

    /// Walk the brackets and compute tax on `taxable_income`.
    ///
    /// Returns the summed tax and the trace of every bracket that received
    /// a non-zero share of the income. Brackets above the income are not
    /// visited.
    pub fn apply(&self, taxable_income: &BigDecimal) -> (BigDecimal, Vec<SlabAmount>) {
        let zero = BigDecimal::from(0);
        let hundred = BigDecimal::from(100);

        let mut tax = BigDecimal::from(0);
        let mut trace = Vec::new();
        let mut remaining = taxable_income.clone();
        let mut previous_limit = BigDecimal::from(0);

        for slab in self.slabs {
            let positive = remaining.clone().max(zero.clone());
            let applicable = match slab.upper_limit {
                Some(limit) => {
                    let limit = BigDecimal::from(limit);
                    let width = &limit - &previous_limit;
                    previous_limit = limit;
                    positive.min(width)
                }
                None => positive,
            };

            if applicable > zero {
                let amount = &applicable * BigDecimal::from(slab.rate_percent) / &hundred;
                tax += &amount;
                trace.push(SlabAmount {
                    slab: slab.label.to_string(),
                    rate: slab.rate_label(),
                    amount,
                });
            }

            remaining -= &applicable;
            if remaining <= zero {
                break;
            }
        }

        (tax, trace)
    }
}
