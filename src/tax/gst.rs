//! GST (Goods and Services Tax) splitting for Indian tax compliance

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::types::GstBreakdown;

/// Split an amount into base value and GST components.
///
/// With `inclusive` set, `amount` is treated as a GST-inclusive price and the
/// base is recovered as `amount / (1 + rate/100)`. Otherwise `amount` is the
/// base and GST is added on top. CGST and SGST are each half of the GST;
/// IGST carries the full GST as the inter-state view of the same tax.
///
/// Inputs are expected to be non-negative. Nothing is rejected: a rate of
/// exactly -100 in inclusive mode yields a zero base instead of dividing by
/// zero.
pub fn split_gst(amount: BigDecimal, rate_percent: BigDecimal, inclusive: bool) -> GstBreakdown {
    let hundred = BigDecimal::from(100);

    let (base_amount, total_gst) = if inclusive {
        let divisor = BigDecimal::from(1) + &rate_percent / &hundred;
        let base_amount = if divisor == BigDecimal::from(0) {
            warn!(rate = %rate_percent, "GST rate leaves no base amount");
            BigDecimal::from(0)
        } else {
            &amount / &divisor
        };
        let total_gst = &amount - &base_amount;
        (base_amount, total_gst)
    } else {
        let total_gst = &amount * &rate_percent / &hundred;
        (amount, total_gst)
    };

    let half = &total_gst / BigDecimal::from(2);
    let total_amount = &base_amount + &total_gst;

    debug!(
        base = %base_amount,
        gst = %total_gst,
        rate = %rate_percent,
        inclusive,
        "split GST"
    );

    GstBreakdown {
        base_amount,
        gst_rate: rate_percent,
        cgst: half.clone(),
        sgst: half,
        igst: total_gst,
        total_amount,
        is_inclusive: inclusive,
    }
}

/// Standard GST rates for different categories of goods and services
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GstCategory {
    /// Essential items (food, medicines, etc.) - 0%
    Essential,
    /// Reduced rate items - 5%
    Reduced,
    /// Standard rate items - 12%
    Standard,
    /// Higher rate items - 18%
    Higher,
    /// Luxury/Sin goods - 28%
    Luxury,
}

impl GstCategory {
    /// Every category, lowest rate first
    pub const ALL: [GstCategory; 5] = [
        GstCategory::Essential,
        GstCategory::Reduced,
        GstCategory::Standard,
        GstCategory::Higher,
        GstCategory::Luxury,
    ];

    /// Rates offered as one-click presets in the calculator
    pub const PRESETS: [GstCategory; 4] = [
        GstCategory::Reduced,
        GstCategory::Standard,
        GstCategory::Higher,
        GstCategory::Luxury,
    ];

    /// Rate in whole percent
    pub fn percent(&self) -> u32 {
        match self {
            GstCategory::Essential => 0,
            GstCategory::Reduced => 5,
            GstCategory::Standard => 12,
            GstCategory::Higher => 18,
            GstCategory::Luxury => 28,
        }
    }

    /// Get the standard GST rate for this category
    pub fn rate(&self) -> BigDecimal {
        BigDecimal::from(self.percent())
    }

    /// Look up the category carrying a given whole-percent rate
    pub fn from_percent(percent: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.percent() == percent)
    }

    /// Split an amount at this category's rate
    pub fn split(&self, amount: BigDecimal, inclusive: bool) -> GstBreakdown {
        split_gst(amount, self.rate(), inclusive)
    }
}
