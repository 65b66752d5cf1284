//! Results API client
//!
//! Talks to the external results service. Transient connect/timeout
//! failures retry a few times with a pause, the way the upstream
//! scraper treats the lottery site itself.

use crate::config::Config;
use crate::error::{LottoError, Result};
use chrono::NaiveDate;
use kerala_lotto_common::DrawResult;
use std::cmp::Reverse;
use std::time::Duration;

const RETRY_PAUSE: Duration = Duration::from_secs(5);
const DRAW_DATE_FORMAT: &str = "%d/%m/%Y";

pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    retry_attempts: u32,
    verbose: bool,
}

impl ApiClient {
    pub fn new(config: &Config, verbose: bool) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds))
            .build()
            .map_err(|e| LottoError::ApiCall(e.to_string()))?;

        Ok(Self {
            http,
            base_url: config.api_base().to_string(),
            retry_attempts: config.retry_attempts.max(1),
            verbose,
        })
    }

    /// Most recent draw across all lotteries
    pub async fn latest(&self) -> Result<DrawResult> {
        let mut draws = self.results_by_name(None).await?;
        if draws.is_empty() {
            return Err(LottoError::ApiParse("no results published yet".into()));
        }
        Ok(draws.remove(0))
    }

    /// One draw by its code, e.g. "SK-37".
    ///
    /// The service signals a miss with an {"error": ...} body and a 200
    /// status, so the body is inspected before typing it.
    pub async fn result_by_code(&self, code: &str) -> Result<DrawResult> {
        let value = self.get_json(&format!("/api/results/{}", code), &[]).await?;
        if value.get("error").is_some() {
            return Err(LottoError::ResultNotFound(code.to_string()));
        }
        serde_json::from_value(value).map_err(|e| LottoError::ApiParse(e.to_string()))
    }

    /// Draw history, newest first; optionally restricted to one lottery
    /// name (matched case-insensitively by the service)
    pub async fn results_by_name(&self, name: Option<&str>) -> Result<Vec<DrawResult>> {
        let query: Vec<(&str, &str)> = match name {
            Some(n) => vec![("name", n)],
            None => vec![],
        };
        let value = self.get_json("/api/results", &query).await?;
        let mut draws: Vec<DrawResult> =
            serde_json::from_value(value).map_err(|e| LottoError::ApiParse(e.to_string()))?;

        // The service sorts by date string; re-sort on the real date and
        // push unparseable dates to the end
        draws.sort_by_key(|d| Reverse(NaiveDate::parse_from_str(&d.draw_date, DRAW_DATE_FORMAT).ok()));
        Ok(draws)
    }

    /// Distinct lottery names known to the service
    pub async fn lottery_types(&self) -> Result<Vec<String>> {
        let value = self.get_json("/api/lottery-types", &[]).await?;
        serde_json::from_value(value).map_err(|e| LottoError::ApiParse(e.to_string()))
    }

    async fn get_json(&self, path: &str, query: &[(&str, &str)]) -> Result<serde_json::Value> {
        let url = format!("{}{}", self.base_url, path);
        let mut attempt = 0;

        loop {
            attempt += 1;
            let request = self.http.get(&url).query(query);

            match request.send().await {
                Ok(response) => {
                    let response = response
                        .error_for_status()
                        .map_err(|e| LottoError::ApiCall(e.to_string()))?;
                    return response
                        .json()
                        .await
                        .map_err(|e| LottoError::ApiParse(e.to_string()));
                }
                Err(e) if (e.is_timeout() || e.is_connect()) && attempt < self.retry_attempts => {
                    if self.verbose {
                        eprintln!(
                            "⏳ Attempt {}/{} failed ({}), retrying in {}s...",
                            attempt,
                            self.retry_attempts,
                            e,
                            RETRY_PAUSE.as_secs()
                        );
                    }
                    tokio::time::sleep(RETRY_PAUSE).await;
                }
                Err(e) => return Err(LottoError::ApiCall(e.to_string())),
            }
        }
    }
}
