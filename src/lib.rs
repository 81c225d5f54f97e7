//! Wordle Client
//!
//! A terminal client for a server-authoritative Wordle game. The server
//! owns guesses, evaluations and statistics; the client mirrors them,
//! edits the row being typed, and animates every change it receives.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use wordle_client::core::{Board, GameSnapshot, best_letter_states};
//!
//! let snapshot: GameSnapshot = serde_json::from_str(
//!     r#"{"target_word":null,"guess_matrix":[["C","R","A","N","E"]],
//!         "evaluation_matrix":[[0,2,1,0,0]],"has_won":false}"#,
//! )
//! .unwrap();
//! let board = Board::from_snapshot(&snapshot).unwrap();
//! let keys = best_letter_states(board.guesses(), board.evaluations());
//! println!("{} letters coloured", keys.len());
//! ```

// Core domain types
pub mod core;

// Client-side game state
pub mod game;

// Animation model
pub mod render;

// Keyboard and mouse handling
pub mod input;

// Server communication
pub mod sync;

// Statistics popup
pub mod popup;

// Client configuration
pub mod config;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
