// src/core/net.rs
// One-shot blocking GET for the published sheet. No retries.

use std::time::Duration;

use tracing::debug;

use crate::config::consts::{FETCH_TIMEOUT_SECS, USER_AGENT};
use crate::error::{Error, Result};

pub fn http_get(url: &str) -> Result<String> {
    // validate up front so a typo reads as a URL error, not a connect error
    let parsed = url::Url::parse(url)?;

    let client = reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(FETCH_TIMEOUT_SECS))
        .user_agent(USER_AGENT)
        .build()?;

    debug!(%parsed, "fetching sheet");
    let resp = client.get(parsed).send()?;
    let status = resp.status();
    if !status.is_success() {
        return Err(Error::Invalid(format!("{} returned {}", url, status)));
    }
    Ok(resp.text()?)
}
