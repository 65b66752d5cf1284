//! Prize label formatting
//!
//! Published labels carry the amount inline ("1st Prize Rs :10000000/-").
//! Display wants the Indian short scale: crore, lakh, thousand.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // "Rs 10,000,000", "Rs :5000", "rs:500"
    static ref RS_AMOUNT_RE: Regex = Regex::new(r"(?i)Rs\s?:?([\d,]+)").unwrap();
}

const CRORE: u64 = 10_000_000;
const LAKH: u64 = 100_000;
const THOUSAND: u64 = 1_000;

/// Extract the rupee amount from a published prize label
pub fn extract_rupee_amount(label: &str) -> Option<u64> {
    let caps = RS_AMOUNT_RE.captures(label)?;
    caps[1].replace(',', "").parse().ok()
}

/// Indian short scale: "1 Cr", "5 Lakhs", "5K", or the plain number
/// below a thousand
pub fn format_inr_short(amount: u64) -> String {
    if amount >= CRORE {
        format!("{} Cr", scaled(amount, CRORE))
    } else if amount >= LAKH {
        format!("{} Lakhs", scaled(amount, LAKH))
    } else if amount >= THOUSAND {
        format!("{}K", scaled(amount, THOUSAND))
    } else {
        amount.to_string()
    }
}

/// Human-readable tier label: "4th Prize Rs :5000/-" → "4th Prize - ₹5K".
/// Labels without a recognizable amount come back upper-cased verbatim.
pub fn format_prize_label(label: &str) -> String {
    let Some(caps) = RS_AMOUNT_RE.captures(label) else {
        return label.to_uppercase();
    };
    let amount: u64 = match caps[1].replace(',', "").parse() {
        Ok(amount) => amount,
        Err(_) => return label.to_uppercase(),
    };
    let rs_start = caps.get(0).map_or(0, |m| m.start());
    let prefix = label[..rs_start].trim();
    format!("{} - ₹{}", prefix, format_inr_short(amount))
}

// Fractional scale values print without trailing zeros: 1.5 Cr, not 1.50 Cr
fn scaled(amount: u64, unit: u64) -> String {
    format!("{}", amount as f64 / unit as f64)
}
