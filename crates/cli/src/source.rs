use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Where a chat dump comes from. URLs get a single fetch attempt; anything
/// else is treated as a local path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DumpSource {
    File(PathBuf),
    Url(String),
}

impl DumpSource {
    pub fn detect(raw: &str) -> Self {
        if raw.starts_with("http://") || raw.starts_with("https://") {
            Self::Url(raw.to_string())
        } else {
            Self::File(PathBuf::from(raw))
        }
    }

    /// Load the raw dump text, fully drained and decoded as UTF-8.
    pub async fn load(&self) -> Result<String> {
        match self {
            Self::File(path) => std::fs::read_to_string(path)
                .with_context(|| format!("read chat dump {}", path.display())),
            Self::Url(url) => fetch_text(url).await,
        }
    }
}

async fn fetch_text(url: &str) -> Result<String> {
    let client = reqwest::Client::builder()
        .timeout(FETCH_TIMEOUT)
        .build()
        .context("build HTTP client")?;
    let response = client
        .get(url)
        .send()
        .await
        .with_context(|| format!("fetch chat dump from {url}"))?
        .error_for_status()
        .context("server rejected the request")?;
    response.text().await.context("read response body")
}
