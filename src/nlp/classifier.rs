//! HTTP client for the pretrained multi-label emotion classifier.

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Client;
use serde::Serialize;
use tracing::debug;

use crate::config::Settings;
use crate::emotion::{LabeledScore, SentenceScores};
use crate::error::EmotionError;

#[derive(Debug, Serialize)]
struct ClassifyRequest<'a> {
    inputs: &'a [String],
}

/// Client for the remote classifier endpoint.
///
/// One call scores one document's sentences as a single synchronous batch;
/// any failure is fatal to the run, there is no retry policy.
#[derive(Debug, Clone)]
pub struct EmotionClassifier {
    client: Client,
    url: String,
    token: Option<String>,
}

impl EmotionClassifier {
    pub fn new(settings: &Settings) -> Result<Self> {
        let client = Client::builder()
            .user_agent("bookmood/0.1")
            .timeout(Duration::from_secs(settings.classifier_timeout_secs))
            .build()?;
        Ok(Self {
            client,
            url: settings.classifier_url.clone(),
            token: settings.classifier_token.clone(),
        })
    }

    /// Score a batch of sentences, returning one validated score vector per
    /// input sentence, in input order.
    pub async fn score_sentences(&self, sentences: &[String]) -> Result<Vec<SentenceScores>> {
        let mut request = self
            .client
            .post(&self.url)
            .json(&ClassifyRequest { inputs: sentences });
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }
        let response = request
            .send()
            .await
            .context("calling classifier endpoint")?
            .error_for_status()
            .context("classifier returned an error status")?;
        let raw: Vec<Vec<LabeledScore>> = response
            .json()
            .await
            .context("decoding classifier response")?;
        debug!(sentences = sentences.len(), "classifier batch scored");
        decode_batch(sentences.len(), &raw)
    }
}

/// Convert raw per-sentence label/score lists into validated score vectors.
///
/// Labels are matched by name per sentence; the classifier is free to return
/// them in any order but must cover the full label set exactly once each.
pub fn decode_batch(expected: usize, raw: &[Vec<LabeledScore>]) -> Result<Vec<SentenceScores>> {
    if raw.len() != expected {
        return Err(EmotionError::BatchArity {
            expected,
            got: raw.len(),
        }
        .into());
    }
    raw.iter()
        .map(|entries| SentenceScores::from_labeled(entries).map_err(Into::into))
        .collect()
}
