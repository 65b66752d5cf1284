use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "kerala-lotto")]
#[command(about = "Kerala state lottery result viewer and ticket checker", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose output (retry announcements, data-shape warnings)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check a ticket number against a draw
    Check {
        /// Ticket number, e.g. "SK 123456" (omit to enter numbers interactively)
        ticket: Option<String>,

        /// Draw code to fetch from the API, e.g. SK-37 (default: latest draw)
        #[arg(short, long)]
        code: Option<String>,

        /// Local draw result JSON file instead of the API
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Only trim and upper-case the input, keep inner whitespace as typed
        #[arg(long)]
        no_collapse_whitespace: bool,
    },

    /// Show the latest draw summary
    Latest,

    /// Show the full result of a draw
    Show {
        /// Draw code, e.g. SK-37
        #[arg(required = true)]
        code: String,
    },

    /// List previous draws, newest first
    Results {
        /// Restrict to one lottery name, e.g. "Suvarna Keralam"
        #[arg(short, long)]
        name: Option<String>,
    },

    /// List known lottery names
    Types,

    /// Parse extracted result-PDF text into a draw JSON
    Parse {
        /// Text file holding the PDF's extracted text
        #[arg(required = true)]
        input: PathBuf,

        /// Output JSON file (default: print to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show or edit configuration
    Config {
        /// Set the results API base URL
        #[arg(long)]
        set_api_url: Option<String>,

        /// Show current settings
        #[arg(long)]
        show: bool,
    },
}
