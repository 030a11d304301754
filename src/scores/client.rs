//! HTTP client for score submission
//!
//! Submission is fire-and-forget from the engine's perspective: it never
//! touches session state, and its outcome only decides whether the score
//! shows as saved.

use reqwest::StatusCode;

use super::models::{NewScore, ScoreRecord};
use crate::{Result, SlidingPuzzleError};

/// Submits one win's score to the leaderboard service.
///
/// Fire-and-once: after the first successful submission the latch closes and
/// further calls are refused. A failed request leaves the latch open but is
/// never retried automatically by this client.
pub struct ScoreSubmitter {
    base_url: String,
    client: reqwest::Client,
    submitted: bool,
}

impl ScoreSubmitter {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
            submitted: false,
        }
    }

    /// Whether a submission already succeeded for the current win.
    pub fn submitted(&self) -> bool {
        self.submitted
    }

    /// Re-opens the latch. Called alongside a session reset, since a reset
    /// starts a new session's worth of state.
    pub fn reset(&mut self) {
        self.submitted = false;
    }

    /// POST the score to `/api/scores`. Expects a 201 with the stored record.
    pub async fn submit(&mut self, score: &NewScore) -> Result<ScoreRecord> {
        if self.submitted {
            return Err(SlidingPuzzleError::Submission(
                "score already submitted for this win".to_string(),
            ));
        }

        let url = format!("{}/api/scores", self.base_url);
        let response = self.client.post(&url).json(score).send().await?;

        if response.status() != StatusCode::CREATED {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            log::error!("Score submission refused ({}): {}", status, body);
            return Err(SlidingPuzzleError::Submission(format!(
                "server answered {} instead of 201",
                status
            )));
        }

        let record = response.json::<ScoreRecord>().await?;
        self.submitted = true;
        Ok(record)
    }
}
