//! Request and response contracts of the game server

use super::GatewayError;
use crate::core::{Board, GameSnapshot, StatsSnapshot};
use std::fmt;

pub const PLAYER_GUESS_PATH: &str = "/api/player-guess";
pub const SYNC_GAME_PATH: &str = "/api/sync-game";
pub const SYNC_STATS_PATH: &str = "/api/sync-stats";
pub const RESET_GAME_PATH: &str = "/api/reset-game";
pub const RESET_STATS_PATH: &str = "/api/reset-stats";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

/// One call to the server
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiRequest {
    /// Send a guess, receive the updated game
    SubmitGuess(String),
    /// Fetch the current game
    FetchGame,
    /// Fetch player statistics
    FetchStats,
    /// Start a new game
    ResetGame,
    /// Clear player statistics
    ResetStats,
}

impl ApiRequest {
    #[must_use]
    pub const fn method(&self) -> HttpMethod {
        match self {
            Self::FetchGame | Self::FetchStats => HttpMethod::Get,
            Self::SubmitGuess(_) | Self::ResetGame | Self::ResetStats => HttpMethod::Post,
        }
    }

    #[must_use]
    pub const fn path(&self) -> &'static str {
        match self {
            Self::SubmitGuess(_) => PLAYER_GUESS_PATH,
            Self::FetchGame => SYNC_GAME_PATH,
            Self::FetchStats => SYNC_STATS_PATH,
            Self::ResetGame => RESET_GAME_PATH,
            Self::ResetStats => RESET_STATS_PATH,
        }
    }

    /// JSON body, if the request carries one
    #[must_use]
    pub fn body(&self) -> Option<serde_json::Value> {
        match self {
            Self::SubmitGuess(guess) => Some(serde_json::Value::String(guess.clone())),
            _ => None,
        }
    }

    /// Interpret a successful response body
    ///
    /// Reset responses are acknowledged without looking at the body.
    ///
    /// # Errors
    /// Returns `GatewayError::Malformed` for undecodable JSON and
    /// `GatewayError::InvalidSnapshot` for a game snapshot that fails validation.
    pub fn decode(&self, body: &[u8]) -> Result<ApiResponse, GatewayError> {
        let path = self.path();
        match self {
            Self::SubmitGuess(_) | Self::FetchGame => {
                let snapshot: GameSnapshot = serde_json::from_slice(body)
                    .map_err(|source| GatewayError::Malformed { path, source })?;
                let board = Board::from_snapshot(&snapshot)
                    .map_err(|source| GatewayError::InvalidSnapshot { path, source })?;
                Ok(ApiResponse::Game(board))
            }
            Self::FetchStats => serde_json::from_slice(body)
                .map(ApiResponse::Stats)
                .map_err(|source| GatewayError::Malformed { path, source }),
            Self::ResetGame | Self::ResetStats => Ok(ApiResponse::Acknowledged),
        }
    }
}

impl fmt::Display for ApiRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let method = match self.method() {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        };
        write!(f, "{method} {}", self.path())
    }
}

/// Decoded server answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiResponse {
    Game(Board),
    Stats(StatsSnapshot),
    Acknowledged,
}

/// Result of one dispatched request, as seen by the client
///
/// Failures carry no error: they are reported through the failure policy
/// and must not change client state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatewayEvent {
    Completed {
        request: ApiRequest,
        response: ApiResponse,
    },
    Failed {
        request: ApiRequest,
    },
}
