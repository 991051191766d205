use crate::types::*;
use serde::{Deserialize, Serialize};

/// Everything that can happen to a game. Applied by [`crate::state::transition`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "t", rename_all = "snake_case")]
pub enum Action {
    AddPlayer {
        name: String,
    },
    RemovePlayer {
        player_id: PlayerId,
    },
    StartGame,
    AddPhrase {
        text: String,
        author_id: PlayerId,
    },
    NextPlayer,
    StartGuessPhase,
    SetGroupVote {
        guessed_author_id: PlayerId,
    },
    RevealAuthorAndUpdateScore,
    NextPhrase,
    ShowScoreboard,
    NewRound,
    ResetGame,
}

impl Action {
    /// Wire tag of the action, used in logs
    pub fn name(&self) -> &'static str {
        match self {
            Action::AddPlayer { .. } => "add_player",
            Action::RemovePlayer { .. } => "remove_player",
            Action::StartGame => "start_game",
            Action::AddPhrase { .. } => "add_phrase",
            Action::NextPlayer => "next_player",
            Action::StartGuessPhase => "start_guess_phase",
            Action::SetGroupVote { .. } => "set_group_vote",
            Action::RevealAuthorAndUpdateScore => "reveal_author_and_update_score",
            Action::NextPhrase => "next_phrase",
            Action::ShowScoreboard => "show_scoreboard",
            Action::NewRound => "new_round",
            Action::ResetGame => "reset_game",
        }
    }
}
