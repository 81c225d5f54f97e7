//! Reset commands

use crate::sync::{ApiRequest, GatewayError, Transport};

/// What to reset on the server
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetTarget {
    Game,
    Stats,
}

impl ResetTarget {
    const fn request(self) -> ApiRequest {
        match self {
            Self::Game => ApiRequest::ResetGame,
            Self::Stats => ApiRequest::ResetStats,
        }
    }
}

/// Ask the server to start a new game or clear statistics
///
/// The response body is ignored; any 2xx counts as success.
///
/// # Errors
///
/// Returns an error if the request fails or the server answers non-2xx.
pub fn reset(transport: &impl Transport, target: ResetTarget) -> Result<(), GatewayError> {
    let request = target.request();
    transport.execute(&request)?;
    log::info!("{request} acknowledged");
    Ok(())
}
