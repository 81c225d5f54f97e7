//! Popup heading and flavor text

use crate::game::GameFlags;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Won on this row, 1 to 6
    Won(usize),
    Lost,
    InProgress,
}

impl Outcome {
    /// `rows` is the number of committed guesses
    #[must_use]
    pub const fn from_flags(flags: GameFlags, rows: usize) -> Self {
        if flags.has_won {
            Self::Won(rows)
        } else if flags.game_over {
            Self::Lost
        } else {
            Self::InProgress
        }
    }

    #[must_use]
    pub const fn heading(self) -> &'static str {
        match self {
            Self::Won(_) => "Congrats!",
            Self::Lost => "Game Over!",
            Self::InProgress => "Statistics:",
        }
    }

    /// Whether the popup offers to start a new game
    #[must_use]
    pub const fn offers_reset(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// Feedback text, split around the target word so it can be highlighted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    pub lead: &'static str,
    pub word: Option<String>,
    pub tail: &'static str,
}

impl Feedback {
    #[must_use]
    pub fn plain_text(&self) -> String {
        match &self.word {
            Some(word) => format!("{}{word}{}", self.lead, self.tail),
            None => format!("{}{}", self.lead, self.tail),
        }
    }
}

const GENERIC: &str = "Here's a breakdown of your Wordle performance, keep playing and you will see improvement in no time! Thanks for playing!";

/// Pick the feedback for an outcome
///
/// The word is only embedded once the server has revealed it; without it
/// the generic text is used.
#[must_use]
pub fn feedback(outcome: Outcome, target_word: Option<&str>) -> Feedback {
    let generic = Feedback {
        lead: GENERIC,
        word: None,
        tail: "",
    };
    let Some(word) = target_word else {
        return generic;
    };

    let (lead, tail) = match outcome {
        Outcome::Won(1) => (
            "Are you cheating? The word was: ",
            ". How did you get that first Try? Maybe you should start playing the Lottery!",
        ),
        Outcome::Won(2) => (
            "Not bad! You nailed it in two tries. The word was: ",
            ". Who needs a crystal ball when you have such skills?",
        ),
        Outcome::Won(3) => (
            "Third time's the charm! You figured it out. The word was: ",
            ". Did you secretly peek at the dictionary?",
        ),
        Outcome::Won(4) => (
            "Four tries? Impressive! You cracked it. The word was: ",
            ". Feels like a victory, but you still have room for improvement!",
        ),
        Outcome::Won(5) => (
            "Fifth try and you're still going strong! You got it. The word was: ",
            ". Well, better late than never, right?",
        ),
        Outcome::Won(6) => (
            "Sixth try! You finally did it. The word was: ",
            ". It may have taken a while, but hey, you got it!",
        ),
        Outcome::Lost => (
            "Oh! Seems like you had no luck this time! The word was: ",
            ". Don't worry, you'll get it next time… Maybe.",
        ),
        Outcome::Won(_) | Outcome::InProgress => return generic,
    };

    Feedback {
        lead,
        word: Some(word.to_string()),
        tail,
    }
}
