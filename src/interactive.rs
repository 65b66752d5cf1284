//! Interactive ticket checking
//!
//! Prompts for ticket numbers in a loop against one loaded draw, so a
//! whole book of tickets can be checked without re-fetching.

use crate::display;
use crate::error::{LottoError, Result};
use dialoguer::Input;
use kerala_lotto_common::{check_ticket_with, CheckOptions, DrawResult};

/// Shortest input worth checking (low tiers publish 4-digit suffixes)
const MIN_INPUT_LEN: usize = 4;

pub fn run_interactive_check(draw: &DrawResult, options: &CheckOptions) -> Result<()> {
    println!("🎟  Checking against {} ({} · {})", draw.name, draw.code, draw.draw_date);
    println!("---");
    println!("Enter a ticket number per line, [q] to quit");
    println!("---\n");

    let mut checked = 0usize;
    let mut won = 0usize;

    loop {
        let input: String = Input::new()
            .with_prompt("Ticket number")
            .allow_empty(true)
            .interact_text()
            .map_err(|e| LottoError::CliExecution(e.to_string()))?;

        let trimmed = input.trim();
        match trimmed {
            "" => continue,
            "q" | "Q" => break,
            _ => {}
        }

        if trimmed.chars().count() < MIN_INPUT_LEN {
            println!("  → too short, enter the full ticket number\n");
            continue;
        }

        let result = check_ticket_with(&draw.prizes, trimmed, options);
        display::print_check_outcome(trimmed, &result);
        println!();

        checked += 1;
        if result.won {
            won += 1;
        }
    }

    println!("✔ Checked {} tickets, {} won", checked, won);
    Ok(())
}
