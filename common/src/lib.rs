//! Kerala Lotto Common Library
//!
//! Types and the ticket-matching core shared by the CLI and other consumers.

pub mod checker;
pub mod error;
pub mod format;
pub mod parser;
pub mod types;

pub use checker::{check_ticket, check_ticket_with, scan_oddities, CheckOptions, MatchResult, TierClass};
pub use error::{Error, Result};
pub use format::{extract_rupee_amount, format_inr_short, format_prize_label};
pub use parser::parse_draw_text;
pub use types::{DrawResult, PrizeEntry, PrizeTable};
