//! # Sliding Puzzle Game Library
//!
//! A 3x3 sliding-tile puzzle engine with a score leaderboard backend.
//!
//! ## Features
//!
//! - **Game Engine**: Board model, solvability-preserving shuffle, move
//!   validation and win detection
//! - **Session Tracking**: Move counter, elapsed time and win state for one
//!   play attempt
//! - **Score Service**: REST API and SQLite persistence for the leaderboard
//! - **Score Client**: Fire-and-once submission of finished sessions
//!
//! ## Usage
//!
//! ```rust
//! use sliding_puzzle::services::session::PuzzleSession;
//!
//! let session = PuzzleSession::new(&mut rand::rng());
//! assert!(!session.won());
//! ```

// ============================================================================
// PUBLIC API MODULES
// ============================================================================

/// Core puzzle logic: board, shuffle, move validation
pub mod game;

/// Play-session state machine
pub mod services;

/// Score records, persistence, REST routes and submission client
pub mod scores;

/// Web server hosting the score API and static client
pub mod servers;

/// Utility functions and helpers
pub mod utils;

/// Logging setup
pub mod logging;

// ============================================================================
// ERROR TYPES
// ============================================================================

/// Main error type for the sliding puzzle library
#[derive(Debug, thiserror::Error)]
pub enum SlidingPuzzleError {
    #[error("Game error: {0}")]
    Game(String),

    #[error("Score submission error: {0}")]
    Submission(String),

    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Server error: {0}")]
    Server(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, SlidingPuzzleError>;

// ============================================================================
// LIBRARY VERSION INFO
// ============================================================================

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Library description
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
