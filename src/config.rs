//! Runtime configuration utilities for bookmood.

use std::env;

use serde::Deserialize;

/// Application configuration resolved from `.env` and defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// HTTP endpoint of the pretrained emotion classifier.
    pub classifier_url: String,
    /// Optional bearer token forwarded with classifier requests.
    pub classifier_token: Option<String>,
    /// Per-request timeout for classifier calls, in seconds.
    pub classifier_timeout_secs: u64,
}

impl Settings {
    /// Load configuration from environment with reasonable defaults.
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let classifier_url = env::var("CLASSIFIER_URL")
            .unwrap_or_else(|_| "http://127.0.0.1:8080/classify".to_string());
        let classifier_token = env::var("CLASSIFIER_TOKEN").ok();
        let classifier_timeout_secs = env::var("CLASSIFIER_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(60);

        Ok(Self {
            classifier_url,
            classifier_token,
            classifier_timeout_secs,
        })
    }
}
