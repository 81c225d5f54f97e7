//! Statistics projection
//!
//! Everything the popup shows is derived here from a `StatsSnapshot`; the
//! snapshot itself is never modified.

use crate::core::{ROWS, StatsSnapshot};

/// Index of the loss bucket in `guess_distribution`
const LOSS_BUCKET: usize = ROWS;

fn saturate(count: u64) -> u32 {
    u32::try_from(count).unwrap_or(u32::MAX)
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatsSummary {
    pub games_total: u32,
    pub games_won: u32,
    pub games_lost: u32,
    /// Rounded to an integer, 0 without wins
    pub win_percentage: u32,
    /// One plus the mean winning row index, 0 without wins
    pub average_guesses: f64,
    pub current_streak: u32,
    pub longest_streak: u32,
    /// Wins per winning row, rows 1 to 6
    pub distribution: [u32; ROWS],
}

impl StatsSummary {
    #[must_use]
    pub fn from_snapshot(stats: &StatsSnapshot) -> Self {
        let buckets = &stats.guess_distribution;
        // Counts come from the server; sum in u64 so no bucket value can overflow
        let won: u64 = buckets[..ROWS].iter().map(|&count| u64::from(count)).sum();
        let lost = u64::from(buckets[LOSS_BUCKET]);
        let total = won + lost;

        let mut distribution = [0; ROWS];
        distribution.copy_from_slice(&buckets[..ROWS]);

        let (win_percentage, average_guesses) = if won == 0 {
            (0, 0.0)
        } else {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let percentage = (100.0 * won as f64 / total as f64).round() as u32;
            let weighted: u64 = distribution
                .iter()
                .zip(0u64..)
                .map(|(&count, index)| index * u64::from(count))
                .sum();
            let average = weighted as f64 / won as f64 + 1.0;
            (percentage, average)
        };

        let games_total = saturate(total);
        let games_won = saturate(won);
        let games_lost = saturate(lost);

        Self {
            games_total,
            games_won,
            games_lost,
            win_percentage,
            average_guesses,
            current_streak: stats.current_streak,
            longest_streak: stats.longest_streak,
            distribution,
        }
    }

    /// Average guesses as displayed, one decimal place
    #[must_use]
    pub fn average_display(&self) -> String {
        if self.games_won == 0 {
            "0".to_string()
        } else {
            format!("{:.1}", self.average_guesses)
        }
    }

    /// Bar length of each winning row as a percentage of all wins
    #[must_use]
    pub fn bar_percentages(&self) -> [f64; ROWS] {
        if self.games_won == 0 {
            return [0.0; ROWS];
        }
        let wins: f64 = self.distribution.iter().map(|&count| f64::from(count)).sum();
        self.distribution
            .map(|count| 100.0 * f64::from(count) / wins)
    }
}
