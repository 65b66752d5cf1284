//! Terminal presentation of draw results
//!
//! Three views, mirroring what the results service publishes:
//! - dashboard: latest-draw summary with the jackpot amount
//! - full result: every tier with its winning numbers
//! - history: one line per past draw

use kerala_lotto_common::{
    extract_rupee_amount, format_inr_short, format_prize_label, DrawResult, MatchResult,
    PrizeEntry, TierClass,
};

const NUMBERS_PER_ROW: usize = 8;

/// Latest-draw summary: name, code, date, first prize and the short
/// jackpot amount
pub fn print_dashboard(draw: &DrawResult) {
    println!("🎫 {}", draw.name);
    println!("   Draw {} · {}", draw.code, draw.draw_date);
    println!();

    let first = draw.prizes.first_prize();
    let winner = first
        .and_then(PrizeEntry::headline_number)
        .unwrap_or("---");
    println!("🏆 1st Prize Winner: {}", winner);
    println!("   Jackpot: {}", short_amount(first));

    for token in ["2nd", "3rd"] {
        if let Some(entry) = draw.prizes.find_tier(token) {
            println!(
                "   {} Prize: {} ({})",
                token,
                short_amount(Some(entry)),
                entry.headline_number().unwrap_or("---")
            );
        }
    }
}

/// Full result of one draw, tier by tier in published order
pub fn print_full_result(draw: &DrawResult) {
    println!("🎫 {}", draw.name);
    println!("   Draw {} · {}", draw.code, draw.draw_date);

    for entry in draw.prizes.iter() {
        println!();
        match TierClass::classify(&entry.label) {
            TierClass::First => {
                println!("🏆 {}", format_prize_label(&entry.label));
                println!("   {}", entry.headline_number().unwrap_or("---"));
            }
            TierClass::Consolation => {
                println!(
                    "⚡ {} · {} winners",
                    format_prize_label(&entry.label),
                    entry.numbers.len()
                );
                print_number_grid(&entry.numbers);
            }
            _ => {
                println!("• {}", format_prize_label(&entry.label));
                print_number_grid(&entry.numbers);
            }
        }
    }
}

/// Draw history, one line per draw
pub fn print_history(draws: &[DrawResult]) {
    if draws.is_empty() {
        println!("No records found for this series");
        return;
    }

    for draw in draws {
        let winner = draw
            .prizes
            .first_prize()
            .and_then(PrizeEntry::headline_number)
            .unwrap_or("---");
        println!("{}  {:<8} 1st Prize: {}", draw.draw_date, draw.code, winner);
    }
}

/// Win/lose announcement for one checked ticket
pub fn print_check_outcome(ticket: &str, result: &MatchResult) {
    if result.won {
        println!("🎉 CONGRATULATIONS! {} won a prize", ticket.trim().to_uppercase());
        if let Some(label) = &result.tier_label {
            println!("   {}", label);
        }
    } else {
        println!("😞 BETTER LUCK NEXT TIME");
        println!("   This ticket number did not win a prize in this draw.");
    }
}

fn short_amount(entry: Option<&PrizeEntry>) -> String {
    entry
        .and_then(|e| extract_rupee_amount(&e.label))
        .map(|amount| format!("₹{}", format_inr_short(amount)))
        .unwrap_or_else(|| "---".to_string())
}

fn print_number_grid(numbers: &[String]) {
    for row in numbers.chunks(NUMBERS_PER_ROW) {
        println!("   {}", row.join("  "));
    }
}
