// src/domain/pricing.rs

use crate::apimo::models::Scalar;
use crate::domain::mappings::TransactionKind;
use serde::Serialize;

pub const PRICE_ON_REQUEST: &str = "Nous contacter";

/// fr-FR thousands separator (narrow no-break space).
const GROUP_SEPARATOR: char = '\u{202f}';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum BudgetCategory {
    #[serde(rename = "0-800")]
    RentUpTo800,
    #[serde(rename = "800-1500")]
    RentUpTo1500,
    #[serde(rename = "1500+")]
    RentAbove1500,
    #[serde(rename = "0-200k")]
    SaleUpTo200k,
    #[serde(rename = "200k-500k")]
    SaleUpTo500k,
    #[serde(rename = "500k-1M")]
    SaleUpTo1M,
    #[serde(rename = "1M+")]
    SaleAbove1M,
}

impl BudgetCategory {
    /// Upper bounds are inclusive: exactly 800 is `0-800`.
    pub fn for_price(price: i64, transaction: TransactionKind) -> Self {
        if transaction.is_rental() {
            if price <= 800 {
                BudgetCategory::RentUpTo800
            } else if price <= 1_500 {
                BudgetCategory::RentUpTo1500
            } else {
                BudgetCategory::RentAbove1500
            }
        } else if price <= 200_000 {
            BudgetCategory::SaleUpTo200k
        } else if price <= 500_000 {
            BudgetCategory::SaleUpTo500k
        } else if price <= 1_000_000 {
            BudgetCategory::SaleUpTo1M
        } else {
            BudgetCategory::SaleAbove1M
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BudgetCategory::RentUpTo800 => "0-800",
            BudgetCategory::RentUpTo1500 => "800-1500",
            BudgetCategory::RentAbove1500 => "1500+",
            BudgetCategory::SaleUpTo200k => "0-200k",
            BudgetCategory::SaleUpTo500k => "200k-500k",
            BudgetCategory::SaleUpTo1M => "500k-1M",
            BudgetCategory::SaleAbove1M => "1M+",
        }
    }
}

/// Integer price, `0` when absent or unparsable.
pub fn raw_price(price: Option<&Scalar>) -> i64 {
    price.and_then(Scalar::parse_int).unwrap_or(0)
}

/// Display price for the listing card.
pub fn format_price(price: Option<&Scalar>, transaction: TransactionKind) -> String {
    let n = match price.filter(|p| p.is_truthy()).and_then(Scalar::parse_int) {
        Some(n) if n != 0 => n,
        _ => return PRICE_ON_REQUEST.to_string(),
    };

    if transaction.is_rental() {
        return format!("{} €/mois", group_thousands(n));
    }

    if n >= 1_000_000 {
        return format!("{} M€", format_millions(n).replace('.', ","));
    }

    format!("{} €", group_thousands(n))
}

/// `n / 1e6` with two decimals, halves rounded up.
///
/// Only odd multiples of 1/8 are exact binary ties, where `{:.2}` would
/// round to even. Decimal ties like 1.005 are not exact and keep `{:.2}`.
fn format_millions(n: i64) -> String {
    const EIGHTH: i64 = 125_000;
    if n % EIGHTH == 0 && (n / EIGHTH) % 2 == 1 {
        let cents = (n + 5_000) / 10_000;
        return format!("{}.{:02}", cents / 100, cents % 100);
    }
    format!("{:.2}", n as f64 / 1_000_000.0)
}

/// `1234567` -> `1 234 567` with fr-FR separators.
pub fn group_thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        out.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(GROUP_SEPARATOR);
        }
        out.push(c);
    }
    out
}
