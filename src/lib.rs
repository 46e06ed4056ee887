//! Rottawordle
//!
//! A word-guessing game: guess a hidden word within a limited number of
//! attempts, with per-letter feedback after every guess.
//!
//! # Quick Start
//!
//! ```rust
//! use rottawordle::config::GameConfig;
//! use rottawordle::core::LetterStatus;
//! use rottawordle::game::{GameSession, Outcome, share_text};
//!
//! let config = GameConfig::default();
//! let mut session = GameSession::new(&config);
//!
//! for ch in "stall".chars() {
//!     session.append_letter(ch).unwrap();
//! }
//! let guess = session.submit().unwrap();
//! assert_eq!(guess.statuses()[4], LetterStatus::Absent);
//!
//! for ch in "altsu".chars() {
//!     session.append_letter(ch).unwrap();
//! }
//! session.submit().unwrap();
//! assert_eq!(session.outcome(), Outcome::Won);
//! println!("{}", share_text(&session));
//! ```

// Core domain types
pub mod core;

// Game configuration
pub mod config;

// Game state machine and derived views
pub mod game;

// On-screen keyboard layout
pub mod keyboard;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Logging setup
pub mod telemetry;
