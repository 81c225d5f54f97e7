//! Show command
//!
//! Fetches the current game once and summarizes it for printing.

use crate::core::{Board, ROWS};
use crate::game::GameFlags;
use crate::sync::{ApiRequest, ApiResponse, GatewayError, Transport};

/// Result of fetching the current game
pub struct ShowResult {
    pub board: Board,
    pub has_won: bool,
    pub game_over: bool,
    pub guesses_left: usize,
}

/// Fetch the game from the server
///
/// # Errors
///
/// Returns an error if the request fails or the server answers with
/// something other than a game snapshot.
pub fn show_game(transport: &impl Transport) -> Result<ShowResult, GatewayError> {
    let board = match transport.execute(&ApiRequest::FetchGame)? {
        ApiResponse::Game(board) => board,
        ApiResponse::Stats(_) | ApiResponse::Acknowledged => {
            return Err(GatewayError::UnexpectedResponse {
                path: ApiRequest::FetchGame.path(),
            });
        }
    };

    let GameFlags { has_won, game_over } = GameFlags::from_board(&board);
    let guesses_left = if has_won { 0 } else { ROWS - board.rows() };
    log::debug!("fetched game with {} guesses", board.rows());

    Ok(ShowResult {
        board,
        has_won,
        game_over,
        guesses_left,
    })
}
