use clap::Parser;
use kerala_lotto_common::{check_ticket_with, parse_draw_text, scan_oddities, CheckOptions, DrawResult};
use kerala_lotto_rust::{api, cli, config, display, error, interactive};

use api::ApiClient;
use cli::{Cli, Commands};
use config::Config;
use error::{LottoError, Result};
use std::path::Path;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Check {
            ticket,
            code,
            file,
            no_collapse_whitespace,
        } => {
            println!("🎫 kerala-lotto - ticket check\n");

            let draw = match (file, code) {
                (Some(path), _) => load_draw_file(&path)?,
                (None, Some(code)) => {
                    let client = ApiClient::new(&config, cli.verbose)?;
                    client.result_by_code(&code).await?
                }
                (None, None) => {
                    println!("No draw given, using the latest...");
                    let client = ApiClient::new(&config, cli.verbose)?;
                    client.latest().await?
                }
            };

            warn_oddities(&draw, cli.verbose);

            let options = CheckOptions {
                collapse_whitespace: !no_collapse_whitespace,
            };

            match ticket {
                Some(ticket) => {
                    let result = check_ticket_with(&draw.prizes, &ticket, &options);
                    display::print_check_outcome(&ticket, &result);
                }
                None => interactive::run_interactive_check(&draw, &options)?,
            }
        }

        Commands::Latest => {
            println!("🎫 kerala-lotto - latest draw\n");

            let client = ApiClient::new(&config, cli.verbose)?;
            let draw = client.latest().await?;
            display::print_dashboard(&draw);
        }

        Commands::Show { code } => {
            let client = ApiClient::new(&config, cli.verbose)?;
            let draw = client.result_by_code(&code).await?;

            warn_oddities(&draw, cli.verbose);
            display::print_full_result(&draw);
        }

        Commands::Results { name } => {
            let client = ApiClient::new(&config, cli.verbose)?;
            let draws = client.results_by_name(name.as_deref()).await?;

            display::print_history(&draws);
            println!("\n✔ {} draws", draws.len());
        }

        Commands::Types => {
            let client = ApiClient::new(&config, cli.verbose)?;
            let types = client.lottery_types().await?;

            for name in &types {
                println!("{}", name);
            }
            println!("\n✔ {} lotteries", types.len());
        }

        Commands::Parse { input, output } => {
            println!("📄 kerala-lotto - draw text parse\n");

            if !input.exists() {
                return Err(LottoError::FileNotFound(input.display().to_string()));
            }
            let text = std::fs::read_to_string(&input)?;
            let draw = parse_draw_text(&text)?;

            println!(
                "✔ Parsed {} ({} · {}), {} prize tiers",
                draw.name,
                draw.code,
                draw.draw_date,
                draw.prizes.len()
            );
            warn_oddities(&draw, cli.verbose);

            let json = serde_json::to_string_pretty(&draw)?;
            match output {
                Some(path) => {
                    std::fs::write(&path, json)?;
                    println!("✔ Result written: {}", path.display());
                }
                None => println!("\n{}", json),
            }
        }

        Commands::Config { set_api_url, show } => {
            let mut config = config;

            if let Some(url) = set_api_url {
                config.set_api_url(url)?;
                println!("✔ API base URL saved");
            }

            if show {
                println!("Settings:");
                println!("  API base URL: {}", config.api_base_url);
                println!("  Timeout: {}s", config.timeout_seconds);
                println!("  Connect timeout: {}s", config.connect_timeout_seconds);
                println!("  Retry attempts: {}", config.retry_attempts);
            }
        }
    }

    Ok(())
}

fn load_draw_file(path: &Path) -> Result<DrawResult> {
    if !path.exists() {
        return Err(LottoError::FileNotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    let draw: DrawResult = serde_json::from_str(&content)?;
    Ok(draw)
}

/// Winning numbers with no matching rule are silent non-matches; tell
/// the operator when asked
fn warn_oddities(draw: &DrawResult, verbose: bool) {
    if !verbose {
        return;
    }
    for oddity in scan_oddities(&draw.prizes) {
        eprintln!("⚠ unexpected number shape - {}", oddity);
    }
}
