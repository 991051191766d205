use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Opaque ID types
pub type PlayerId = String;
pub type PhraseId = String;
pub type RoundId = String;

/// Score every player starts a game with
pub const STARTING_SCORE: u32 = 5;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum GamePhase {
    #[default]
    Setup,
    PhraseInput,
    GuessPhase,
    Scoreboard,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub score: u32,
    /// Set when the group caught this player during the current round
    pub lost_this_round: bool,
}

impl Player {
    pub fn new(id: PlayerId, name: String) -> Self {
        Self {
            id,
            name,
            score: STARTING_SCORE,
            lost_this_round: false,
        }
    }

    pub fn is_eliminated(&self) -> bool {
        self.score == 0
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Phrase {
    pub id: PhraseId,
    pub text: String,
    pub author_id: PlayerId,
    /// Carried for compatibility with older snapshots, never consulted
    #[serde(default)]
    pub used: bool,
}

/// The player the group collectively picked as author of a phrase
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VoteResult {
    pub phrase_id: PhraseId,
    pub group_vote: PlayerId,
    /// Once revealed, the vote is final for this round
    #[serde(default)]
    pub revealed: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Round {
    pub id: RoundId,
    pub number: u32,
    /// Display order during guessing; fixed once shuffled
    pub phrases: Vec<Phrase>,
    pub current_phrase_index: usize,
    pub vote_results: HashMap<PhraseId, VoteResult>,
    pub is_completed: bool,
}

impl Round {
    pub fn new(id: RoundId, number: u32) -> Self {
        Self {
            id,
            number,
            phrases: Vec::new(),
            current_phrase_index: 0,
            vote_results: HashMap::new(),
            is_completed: false,
        }
    }

    /// Phrase under the cursor, if the cursor points at one
    pub fn current_phrase(&self) -> Option<&Phrase> {
        self.phrases.get(self.current_phrase_index)
    }

    pub fn vote_for(&self, phrase_id: &str) -> Option<&VoteResult> {
        self.vote_results.get(phrase_id)
    }
}

/// Root of the game model
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameState {
    /// Insertion-ordered roster
    pub players: Vec<Player>,
    pub current_round: Option<Round>,
    pub phase: GamePhase,
    /// Whose turn it is to write, only meaningful during phrase input
    pub current_player_index: usize,
}
