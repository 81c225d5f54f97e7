//! Statistics command

use crate::popup::StatsSummary;
use crate::sync::{ApiRequest, ApiResponse, GatewayError, Transport};

/// Fetch player statistics and derive the popup numbers from them
///
/// # Errors
///
/// Returns an error if the request fails or the server answers with
/// something other than statistics.
pub fn fetch_stats(transport: &impl Transport) -> Result<StatsSummary, GatewayError> {
    match transport.execute(&ApiRequest::FetchStats)? {
        ApiResponse::Stats(stats) => Ok(StatsSummary::from_snapshot(&stats)),
        ApiResponse::Game(_) | ApiResponse::Acknowledged => Err(GatewayError::UnexpectedResponse {
            path: ApiRequest::FetchStats.path(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::StatsSnapshot;
    use crate::sync::ScriptedTransport;

    #[test]
    fn summarizes_server_stats() {
        let transport = ScriptedTransport::new();
        transport.reply(Ok(ApiResponse::Stats(StatsSnapshot {
            current_streak: 3,
            longest_streak: 4,
            guess_distribution: [1, 2, 3, 0, 0, 0, 4],
        })));

        let summary = fetch_stats(&transport).unwrap();
        assert_eq!(summary.games_total, 10);
        assert_eq!(summary.win_percentage, 60);
        assert_eq!(summary.current_streak, 3);
        assert_eq!(transport.requests(), vec![ApiRequest::FetchStats]);
    }

    #[test]
    fn wrong_response_kind_rejected() {
        let transport = ScriptedTransport::new();
        transport.reply(Ok(ApiResponse::Acknowledged));
        assert!(matches!(
            fetch_stats(&transport),
            Err(GatewayError::UnexpectedResponse { .. })
        ));
    }
}
