//! Draw-text parser
//!
//! Turns the text extracted from an official Kerala lottery result PDF
//! into a typed [`DrawResult`]:
//! 1. Metadata: lottery name, draw code, draw date
//! 2. Prize blocks, split at each "Nth Prize" heading
//! 3. Per block: series+6-digit tickets when present, else bare 4-digit
//!    suffixes; the 1st-prize block also carries the consolation numbers

use crate::error::{Error, Result};
use crate::types::{DrawResult, PrizeEntry, PrizeTable};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // "... SUVARNA KERALAM LOTTERY NO.SK-37th DRAW held on:- 23/01/2026 ..."
    static ref NAME_RE: Regex =
        Regex::new(r"(?s)(?:EMAIL:.*?\s+)?([A-Z\s\-]{3,})\s+LOTTERY NO").unwrap();
    static ref CODE_RE: Regex = Regex::new(r"NO\.([A-Z0-9\-]+)").unwrap();
    static ref DATE_RE: Regex = Regex::new(r"held on:-\s+(\d{2}/\d{2}/\d{4})").unwrap();

    static ref PRIZE_HEAD_RE: Regex = Regex::new(r"\d+(?:st|nd|rd|th)\s+Prize").unwrap();
    // Label runs from the heading through the trailing "/-" on the same line
    static ref LABEL_RE: Regex = Regex::new(r"^(.*?Prize.*?/-)").unwrap();

    static ref FIRST_WINNER_RE: Regex = Regex::new(r"1\)\s+([A-Z]{2}\s\d{6})").unwrap();
    static ref CONS_SECTION_RE: Regex = Regex::new(r"(?s)Cons Prize-Rs :.*?\n?(.*)").unwrap();

    static ref SERIES_TICKET_RE: Regex = Regex::new(r"\b[A-Z]{2}\s\d{6}\b").unwrap();
    static ref FOUR_DIGIT_RE: Regex = Regex::new(r"\b\d{4}\b").unwrap();
    static ref LABEL_AMOUNT_RE: Regex = Regex::new(r":(\d+)/-").unwrap();
}

/// End-of-results trailer on the official PDFs
const RESULTS_TRAILER: &str = "The prize winners";

/// Parse the extracted text of one result PDF.
///
/// Missing metadata degrades to "Unknown" (the PDFs vary); a text with
/// no recognizable prize block at all is a parse error.
pub fn parse_draw_text(text: &str) -> Result<DrawResult> {
    let name = capture_or_unknown(&NAME_RE, text);
    let code = capture_or_unknown(&CODE_RE, text);
    let draw_date = capture_or_unknown(&DATE_RE, text);

    let mut prizes = PrizeTable::new();

    for block in split_prize_blocks(text) {
        let Some(label_caps) = LABEL_RE.captures(block) else {
            continue;
        };
        let label = label_caps[1].trim().to_string();

        // The 1st-prize block holds a single numbered winner plus the
        // consolation section
        if label.contains("1st Prize") {
            if let Some(caps) = FIRST_WINNER_RE.captures(block) {
                prizes.push(PrizeEntry::new(label.clone(), vec![caps[1].to_string()]));
            }
            if let Some(cons) = CONS_SECTION_RE.captures(block) {
                let numbers = collect_matches(&SERIES_TICKET_RE, &cons[1]);
                if !numbers.is_empty() {
                    prizes.push(PrizeEntry::new("Consolation Prize", numbers));
                }
            }
            continue;
        }

        // High-value rank: full series tickets published
        let series = collect_matches(&SERIES_TICKET_RE, block);
        if !series.is_empty() {
            prizes.push(PrizeEntry::new(label, series));
            continue;
        }

        // Low-value rank: bare 4-digit suffixes. The label's own amount
        // can leak in as the first token when it is 4 digits long.
        let mut numbers = collect_matches(&FOUR_DIGIT_RE, block);
        if let Some(amount) = LABEL_AMOUNT_RE.captures(&label).map(|c| c[1].to_string()) {
            if numbers.first() == Some(&amount) {
                numbers.remove(0);
            }
        }
        prizes.push(PrizeEntry::new(label, numbers));
    }

    if prizes.is_empty() {
        return Err(Error::Parse("no prize blocks found in draw text".into()));
    }

    Ok(DrawResult {
        name,
        code,
        draw_date,
        prizes,
    })
}

fn capture_or_unknown(re: &Regex, text: &str) -> String {
    re.captures(text)
        .map(|caps| caps[1].trim().to_string())
        .unwrap_or_else(|| "Unknown".to_string())
}

fn collect_matches(re: &Regex, text: &str) -> Vec<String> {
    re.find_iter(text).map(|m| m.as_str().to_string()).collect()
}

/// Slice the text into one block per "Nth Prize" heading, stopping at
/// the results trailer
fn split_prize_blocks(text: &str) -> Vec<&str> {
    let end = text.find(RESULTS_TRAILER).unwrap_or(text.len());
    let scan = &text[..end];

    let starts: Vec<usize> = PRIZE_HEAD_RE.find_iter(scan).map(|m| m.start()).collect();
    starts
        .iter()
        .enumerate()
        .map(|(i, &start)| {
            let block_end = starts.get(i + 1).copied().unwrap_or(scan.len());
            &scan[start..block_end]
        })
        .collect()
}
