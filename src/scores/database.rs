//! SQLite storage for leaderboard scores

use chrono::Utc;
use rusqlite::{params, Connection, Result as SqliteResult};
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use super::models::ScoreRecord;

/// How many entries the leaderboard returns.
pub const LEADERBOARD_LIMIT: usize = 10;

/// Database connection wrapper
#[derive(Clone)]
pub struct ScoreDatabase {
    conn: Arc<Mutex<Connection>>,
}

impl ScoreDatabase {
    /// Create a new database connection and initialize tables
    pub fn new(path: &str) -> SqliteResult<Self> {
        let conn = Connection::open(path)?;
        let db = Self {
            conn: Arc::new(Mutex::new(conn)),
        };
        db.init_tables()?;
        Ok(db)
    }

    /// Create in-memory database (for testing)
    pub fn in_memory() -> SqliteResult<Self> {
        let conn = Connection::open_in_memory()?;
        let db = Self {
            conn: Arc::new(Mutex::new(conn)),
        };
        db.init_tables()?;
        Ok(db)
    }

    fn init_tables(&self) -> SqliteResult<()> {
        let conn = self.conn.lock().unwrap();

        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS scores (
                id TEXT PRIMARY KEY,
                player_name TEXT NOT NULL,
                moves INTEGER NOT NULL,
                time INTEGER NOT NULL,
                puzzle_type TEXT NOT NULL DEFAULT 'custom',
                created_at TEXT NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_scores_ranking ON scores(moves, time);
            "#,
        )?;

        Ok(())
    }

    /// Insert a validated score, stamping id and creation time.
    pub fn insert_score(
        &self,
        player_name: &str,
        moves: i64,
        time: i64,
        puzzle_type: &str,
    ) -> SqliteResult<ScoreRecord> {
        let record = ScoreRecord {
            id: Uuid::new_v4().to_string(),
            player_name: player_name.to_string(),
            moves,
            time,
            puzzle_type: puzzle_type.to_string(),
            created_at: Utc::now().to_rfc3339(),
        };

        let conn = self.conn.lock().unwrap();
        conn.execute(
            "INSERT INTO scores (id, player_name, moves, time, puzzle_type, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                record.id,
                record.player_name,
                record.moves,
                record.time,
                record.puzzle_type,
                record.created_at,
            ],
        )?;

        Ok(record)
    }

    /// Top entries, fewest moves first, elapsed time as the tie-break.
    pub fn top_scores(&self, limit: usize) -> SqliteResult<Vec<ScoreRecord>> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare(
            "SELECT id, player_name, moves, time, puzzle_type, created_at
             FROM scores
             ORDER BY moves ASC, time ASC
             LIMIT ?1",
        )?;

        let rows = stmt.query_map(params![limit as i64], |row| {
            Ok(ScoreRecord {
                id: row.get(0)?,
                player_name: row.get(1)?,
                moves: row.get(2)?,
                time: row.get(3)?,
                puzzle_type: row.get(4)?,
                created_at: row.get(5)?,
            })
        })?;

        rows.collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{ScoreDatabase, LEADERBOARD_LIMIT};

    #[test]
    fn test_insert_stamps_id_and_timestamp() {
        let db = ScoreDatabase::in_memory().unwrap();
        let record = db.insert_score("Ada", 20, 90, "custom").unwrap();
        assert!(!record.id.is_empty());
        assert!(!record.created_at.is_empty());
        assert_eq!(record.player_name, "Ada");
    }

    #[test]
    fn test_top_scores_orders_by_moves_then_time() {
        let db = ScoreDatabase::in_memory().unwrap();
        db.insert_score("a", 20, 90, "custom").unwrap();
        db.insert_score("b", 15, 200, "custom").unwrap();
        db.insert_score("c", 15, 100, "custom").unwrap();

        let ranking: Vec<(i64, i64)> = db
            .top_scores(LEADERBOARD_LIMIT)
            .unwrap()
            .into_iter()
            .map(|r| (r.moves, r.time))
            .collect();
        assert_eq!(ranking, vec![(15, 100), (15, 200), (20, 90)]);
    }

    #[test]
    fn test_top_scores_caps_at_limit() {
        let db = ScoreDatabase::in_memory().unwrap();
        for i in 0..15 {
            db.insert_score("p", 10 + i, 60, "custom").unwrap();
        }
        assert_eq!(db.top_scores(LEADERBOARD_LIMIT).unwrap().len(), 10);
    }
}
