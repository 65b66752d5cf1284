//! Ticket matching core
//!
//! Decides whether a candidate ticket number won a prize in a draw:
//! 1. Normalize the candidate (trim, upper-case, collapse spaces)
//! 2. Scan the tiers in published order
//! 3. High tiers (1st/2nd/3rd/Consolation) pay on the whole published
//!    string, series letters included; low tiers pay on the published
//!    4-digit suffix or the full 6-digit number, series ignored

use crate::format::format_prize_label;
use crate::types::PrizeTable;

/// Shortest input worth scanning; low tiers publish 4-digit suffixes
const MIN_TICKET_LEN: usize = 4;

/// Logical prize rank, derived from the published label text.
///
/// Classification looks only at the label, never at the numbers a tier
/// holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TierClass {
    First,
    Second,
    Third,
    Consolation,
    Other,
}

impl TierClass {
    /// Classify a published tier label by case-insensitive token search
    pub fn classify(label: &str) -> Self {
        let lower = label.to_lowercase();
        if lower.contains("1st") || lower.contains("first") {
            TierClass::First
        } else if lower.contains("2nd") || lower.contains("second") {
            TierClass::Second
        } else if lower.contains("3rd") || lower.contains("third") {
            TierClass::Third
        } else if lower.contains("consolation") {
            TierClass::Consolation
        } else {
            TierClass::Other
        }
    }

    /// High tiers require the complete published ticket string; low
    /// tiers (4th rank and below) publish digit suffixes shared by many
    /// tickets across series.
    pub fn is_high(&self) -> bool {
        !matches!(self, TierClass::Other)
    }
}

/// Matching options
#[derive(Debug, Clone)]
pub struct CheckOptions {
    /// Collapse internal whitespace runs to a single space while
    /// normalizing. Disabling leaves inner whitespace as typed and only
    /// trims and upper-cases.
    pub collapse_whitespace: bool,
}

impl Default for CheckOptions {
    fn default() -> Self {
        Self {
            collapse_whitespace: true,
        }
    }
}

/// Outcome of checking one candidate against one draw
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchResult {
    pub won: bool,
    /// Winning tier label, formatted for display
    pub tier_label: Option<String>,
}

/// Normalize a ticket string for comparison: trim, upper-case, and (by
/// default) collapse internal whitespace runs. Idempotent.
pub fn normalize_ticket(raw: &str, options: &CheckOptions) -> String {
    let upper = raw.trim().to_uppercase();
    if !options.collapse_whitespace {
        return upper;
    }
    upper.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Strip every non-digit character. Used for suffix and whole-number
/// comparisons only, never for exact-string matching.
pub fn digits_only(s: &str) -> String {
    s.chars().filter(|c| c.is_ascii_digit()).collect()
}

// Whole-ticket comparison ignores the spacing between series letters
// and digits: "SK123456" and "SK 123456" are the same ticket
fn compact(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Check a candidate ticket against a draw's prize table with default
/// options.
pub fn check_ticket(prizes: &PrizeTable, candidate: &str) -> MatchResult {
    check_ticket_with(prizes, candidate, &CheckOptions::default())
}

/// Check a candidate ticket against a draw's prize table.
///
/// Tiers are scanned in published order and the first tier containing a
/// matching number is reported; later tiers never override an earlier
/// match. Inputs shorter than 4 characters after normalization are
/// rejected without scanning. Never errors: an empty or malformed table
/// simply reports no win.
pub fn check_ticket_with(
    prizes: &PrizeTable,
    candidate: &str,
    options: &CheckOptions,
) -> MatchResult {
    let input = normalize_ticket(candidate, options);
    if input.chars().count() < MIN_TICKET_LEN {
        return MatchResult::default();
    }
    let input_digits = digits_only(&input);
    let input_compact = compact(&input);

    for entry in prizes.iter() {
        let tier = TierClass::classify(&entry.label);
        let hit = entry.numbers.iter().any(|number| {
            let win_num = normalize_ticket(number, options);
            if tier.is_high() {
                // The complete published string, series included; no
                // digit-suffix logic for these tiers
                return compact(&win_num) == input_compact;
            }
            let win_digits = digits_only(&win_num);
            match win_digits.len() {
                4 => input_digits.ends_with(&win_digits),
                6 => input_digits == win_digits,
                // No published rule for other lengths; see scan_oddities
                _ => false,
            }
        });

        if hit {
            return MatchResult {
                won: true,
                tier_label: Some(format_prize_label(&entry.label)),
            };
        }
    }

    MatchResult::default()
}

/// Report low-tier winning numbers whose digit count has no matching
/// rule (anything other than 4 or 6 digits silently never matches).
/// Such tokens indicate an unanticipated data shape upstream.
pub fn scan_oddities(prizes: &PrizeTable) -> Vec<String> {
    let mut oddities = Vec::new();
    for entry in prizes.iter() {
        if TierClass::classify(&entry.label).is_high() {
            continue;
        }
        for number in &entry.numbers {
            let digits = digits_only(number);
            if digits.len() != 4 && digits.len() != 6 {
                oddities.push(format!(
                    "{}: \"{}\" has {} digits",
                    entry.label,
                    number,
                    digits.len()
                ));
            }
        }
    }
    oddities
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PrizeEntry;

    fn table(entries: &[(&str, &[&str])]) -> PrizeTable {
        entries
            .iter()
            .map(|(label, numbers)| {
                PrizeEntry::new(*label, numbers.iter().map(|n| n.to_string()).collect())
            })
            .collect()
    }

    fn sample_table() -> PrizeTable {
        table(&[
            ("1st Prize Rs 10,000,000/-", &["SK 123456"]),
            ("Consolation Prize", &["SK 111111", "SL 222222"]),
            ("4th Prize Rs 5,000/-", &["0298", "1144"]),
        ])
    }

    // =============================================
    // Normalization
    // =============================================

    #[test]
    fn test_normalize_trims_and_uppercases() {
        let options = CheckOptions::default();
        assert_eq!(normalize_ticket("  sk 123456  ", &options), "SK 123456");
    }

    #[test]
    fn test_normalize_collapses_whitespace_runs() {
        let options = CheckOptions::default();
        assert_eq!(normalize_ticket("sk   123456", &options), "SK 123456");
        assert_eq!(normalize_ticket("sk \t 123456", &options), "SK 123456");
    }

    #[test]
    fn test_normalize_without_collapsing() {
        let options = CheckOptions {
            collapse_whitespace: false,
        };
        assert_eq!(normalize_ticket(" sk  123456 ", &options), "SK  123456");
    }

    #[test]
    fn test_normalize_idempotent() {
        let options = CheckOptions::default();
        let once = normalize_ticket("  sk   123456 ", &options);
        assert_eq!(normalize_ticket(&once, &options), once);
    }

    #[test]
    fn test_digits_only() {
        assert_eq!(digits_only("SK 123456"), "123456");
        assert_eq!(digits_only("no digits"), "");
        assert_eq!(digits_only("0298"), "0298");
    }

    // =============================================
    // Tier classification
    // =============================================

    #[test]
    fn test_classify_high_tiers() {
        assert_eq!(TierClass::classify("1st Prize Rs :10000000/-"), TierClass::First);
        assert_eq!(TierClass::classify("FIRST PRIZE"), TierClass::First);
        assert_eq!(TierClass::classify("2nd Prize Rs :3000000/-"), TierClass::Second);
        assert_eq!(TierClass::classify("3rd Prize Rs :500000/-"), TierClass::Third);
        assert_eq!(TierClass::classify("Consolation Prize"), TierClass::Consolation);
    }

    #[test]
    fn test_classify_low_tiers() {
        assert_eq!(TierClass::classify("4th Prize Rs :5000/-"), TierClass::Other);
        assert_eq!(TierClass::classify("8th Prize Rs :100/-"), TierClass::Other);
        assert!(!TierClass::classify("7th Prize").is_high());
        assert!(TierClass::classify("Consolation Prize").is_high());
    }

    #[test]
    fn test_classify_ignores_numbers() {
        // Only the label text matters
        assert_eq!(TierClass::classify("Prize of the day"), TierClass::Other);
        assert_eq!(TierClass::classify("second chance draw"), TierClass::Second);
    }

    // =============================================
    // Matching policy
    // =============================================

    #[test]
    fn test_short_input_rejected_without_scan() {
        let result = check_ticket(&sample_table(), "  029 ");
        assert!(!result.won);
        assert_eq!(result.tier_label, None);
    }

    #[test]
    fn test_empty_input_rejected() {
        let result = check_ticket(&sample_table(), "   ");
        assert!(!result.won);
    }

    #[test]
    fn test_high_tier_spacing_insensitive() {
        // "SK 123456" is published with a space; the user may not type one
        assert!(check_ticket(&sample_table(), "sk 123456").won);
        assert!(check_ticket(&sample_table(), "sk123456").won);
        assert!(check_ticket(&sample_table(), "  SK   123456 ").won);
    }

    #[test]
    fn test_high_tier_never_matches_by_suffix() {
        let t = table(&[("1st Prize Rs :10000000/-", &["SK 123456"])]);
        // Wrong or missing series letters lose even with matching digits
        assert!(!check_ticket(&t, "XX 123456").won);
        assert!(!check_ticket(&t, "123456").won);
        assert!(!check_ticket(&t, "3456").won);
    }

    #[test]
    fn test_consolation_requires_exact_match() {
        let result = check_ticket(&sample_table(), "sl 222222");
        assert!(result.won);
        assert!(!check_ticket(&sample_table(), "zz 222222").won);
    }

    #[test]
    fn test_low_tier_four_digit_suffix() {
        let result = check_ticket(&sample_table(), "XA140298");
        assert!(result.won, "digits 140298 end with published 0298");

        let result = check_ticket(&sample_table(), "XA140299");
        assert!(!result.won);
    }

    #[test]
    fn test_low_tier_six_digit_equality() {
        let t = table(&[("5th Prize Rs :2000/-", &["140298"])]);
        assert!(check_ticket(&t, "ZZ140298").won, "series letters are ignored");
        assert!(!check_ticket(&t, "ZZ140299").won);
        // Suffix containment is not enough for 6-digit tokens
        assert!(!check_ticket(&t, "A1140298X9").won);
    }

    #[test]
    fn test_low_tier_other_digit_lengths_never_match() {
        let t = table(&[("6th Prize Rs :500/-", &["12345", "1234567", ""])]);
        assert!(!check_ticket(&t, "AB112345").won);
        assert!(!check_ticket(&t, "1234567").won);
    }

    #[test]
    fn test_first_match_wins_across_tiers() {
        // 140298 matches both the 5th and 7th tier; the earlier one is
        // reported
        let t = table(&[
            ("5th Prize Rs :2000/-", &["0298"]),
            ("7th Prize Rs :500/-", &["0298"]),
        ]);
        let result = check_ticket(&t, "XA140298");
        assert!(result.won);
        assert_eq!(result.tier_label.as_deref(), Some("5th Prize - ₹2K"));
    }

    #[test]
    fn test_empty_table_reports_no_win() {
        let result = check_ticket(&PrizeTable::new(), "SK 123456");
        assert!(!result.won);
        assert_eq!(result.tier_label, None);
    }

    #[test]
    fn test_both_normalization_variants_agree_on_outcomes() {
        let strict = CheckOptions {
            collapse_whitespace: false,
        };
        let t = sample_table();
        for candidate in ["sk 123456", "sk  123456", "XA140298", "SK 999999"] {
            assert_eq!(
                check_ticket(&t, candidate).won,
                check_ticket_with(&t, candidate, &strict).won,
                "variants disagree on {:?}",
                candidate
            );
        }
    }

    // =============================================
    // End-to-end scenario
    // =============================================

    #[test]
    fn test_end_to_end_scenario() {
        let t = sample_table();

        let won = check_ticket(&t, "sk123456");
        assert!(won.won);
        assert!(won.tier_label.as_deref().unwrap_or("").contains("1 Cr"));

        let lost = check_ticket(&t, "SK 999999");
        assert!(!lost.won);
        assert_eq!(lost.tier_label, None);

        let suffix_win = check_ticket(&t, "xy990298");
        assert!(suffix_win.won);
        assert!(suffix_win.tier_label.as_deref().unwrap_or("").contains("4th"));
    }

    // =============================================
    // Diagnostics
    // =============================================

    #[test]
    fn test_scan_oddities_flags_unmatched_shapes() {
        let t = table(&[
            ("4th Prize Rs :5000/-", &["0298", "12345"]),
            ("1st Prize Rs :10000000/-", &["SK 12345"]), // high tier, not flagged
        ]);
        let oddities = scan_oddities(&t);
        assert_eq!(oddities.len(), 1);
        assert!(oddities[0].contains("12345"));
        assert!(oddities[0].contains("5 digits"));
    }

    #[test]
    fn test_scan_oddities_clean_table() {
        assert!(scan_oddities(&sample_table()).is_empty());
    }
}
