//! Wire and storage types for the score leaderboard

use serde::{Deserialize, Serialize};

use crate::services::session::PuzzleSession;

/// Longest accepted player name, after trimming.
pub const MAX_PLAYER_NAME: usize = 30;

/// Where the puzzle picture came from. Only the label travels on the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PuzzleSource {
    /// Built-in theme, identified by its id.
    Theme(String),
    /// User-provided image.
    CustomImage,
}

impl PuzzleSource {
    pub fn label(&self) -> &str {
        match self {
            PuzzleSource::Theme(id) => id,
            PuzzleSource::CustomImage => "custom",
        }
    }
}

/// Body of `POST /api/scores`. Fields are optional so that missing ones can
/// be answered with a 400 instead of a deserialization failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewScore {
    pub player_name: Option<String>,
    pub moves: Option<i64>,
    pub time: Option<i64>,
    pub puzzle_type: Option<String>,
}

impl NewScore {
    /// Builds a submission from a finished session.
    pub fn from_session(player_name: &str, session: &PuzzleSession, source: &PuzzleSource) -> Self {
        Self {
            player_name: Some(player_name.to_string()),
            moves: Some(session.move_count() as i64),
            time: Some(session.elapsed_seconds() as i64),
            puzzle_type: Some(source.label().to_string()),
        }
    }

    /// Checks required fields and the name constraints. Returns the trimmed
    /// name, the counters and the puzzle type (defaulting to "custom").
    pub fn validate(&self) -> Result<(String, i64, i64, String), &'static str> {
        let name = match &self.player_name {
            Some(name) => name.trim().to_string(),
            None => return Err("Missing required fields"),
        };
        if name.is_empty() {
            return Err("Missing required fields");
        }
        if name.chars().count() > MAX_PLAYER_NAME {
            return Err("playerName must be at most 30 characters");
        }
        let (moves, time) = match (self.moves, self.time) {
            (Some(moves), Some(time)) => (moves, time),
            _ => return Err("Missing required fields"),
        };
        if moves < 0 || time < 0 {
            return Err("moves and time must be non-negative");
        }
        let puzzle_type = self
            .puzzle_type
            .clone()
            .unwrap_or_else(|| "custom".to_string());
        Ok((name, moves, time, puzzle_type))
    }
}

/// One persisted leaderboard entry. Write-once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreRecord {
    pub id: String,
    pub player_name: String,
    pub moves: i64,
    pub time: i64,
    pub puzzle_type: String,
    /// RFC 3339 timestamp, stamped at insertion.
    pub created_at: String,
}

#[cfg(test)]
mod tests {
    use super::{NewScore, PuzzleSource};

    fn full_score() -> NewScore {
        NewScore {
            player_name: Some("  Ada  ".to_string()),
            moves: Some(42),
            time: Some(90),
            puzzle_type: None,
        }
    }

    #[test]
    fn test_validate_trims_name_and_defaults_type() {
        let (name, moves, time, puzzle_type) = full_score().validate().unwrap();
        assert_eq!(name, "Ada");
        assert_eq!(moves, 42);
        assert_eq!(time, 90);
        assert_eq!(puzzle_type, "custom");
    }

    #[test]
    fn test_validate_rejects_missing_fields() {
        let mut score = full_score();
        score.player_name = None;
        assert!(score.validate().is_err());

        let mut score = full_score();
        score.moves = None;
        assert!(score.validate().is_err());

        let mut score = full_score();
        score.time = None;
        assert!(score.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_blank_and_oversized_names() {
        let mut score = full_score();
        score.player_name = Some("   ".to_string());
        assert!(score.validate().is_err());

        let mut score = full_score();
        score.player_name = Some("x".repeat(31));
        assert!(score.validate().is_err());
    }

    #[test]
    fn test_from_session_carries_final_counters() {
        use crate::services::session::PuzzleSession;
        use rand::rngs::StdRng;
        use rand::SeedableRng;

        let mut session = PuzzleSession::new(&mut StdRng::seed_from_u64(3));
        session.tick();
        session.tick();

        let score = NewScore::from_session("Ada", &session, &PuzzleSource::CustomImage);
        assert_eq!(score.player_name.as_deref(), Some("Ada"));
        assert_eq!(score.moves, Some(session.move_count() as i64));
        assert_eq!(score.time, Some(2));
        assert_eq!(score.puzzle_type.as_deref(), Some("custom"));
    }

    #[test]
    fn test_puzzle_source_labels() {
        assert_eq!(PuzzleSource::Theme("neon".to_string()).label(), "neon");
        assert_eq!(PuzzleSource::CustomImage.label(), "custom");
    }
}
