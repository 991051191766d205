//! The live game.
//!
//! A [`GameSession`] owns the only mutable [`GameState`] of the process and
//! applies actions through [`transition`]. The named operations mirror the
//! actions one to one and never fail. The guarded helpers (`join`, `begin`,
//! `submit_phrase`, `confirm_vote`, ...) add the table rules a front end
//! needs and report violations as [`SessionError`].

use crate::config::SessionConfig;
use crate::entropy::{Entropy, ThreadEntropy};
use crate::protocol::Action;
use crate::state::{transition, Scoreboard};
use crate::types::*;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("Expected {expected:?} phase, game is in {actual:?}")]
    WrongPhase {
        expected: GamePhase,
        actual: GamePhase,
    },

    #[error("Player name cannot be empty")]
    EmptyName,

    #[error("Player name is longer than {max} characters")]
    NameTooLong { max: usize },

    #[error("Table is full ({max} players)")]
    RosterFull { max: usize },

    #[error("Need at least {min} players, have {have}")]
    NotEnoughPlayers { min: usize, have: usize },

    #[error("Unknown player {0}")]
    UnknownPlayer(PlayerId),

    #[error("Phrase cannot be empty")]
    EmptyPhrase,

    #[error("Phrase is longer than {max} characters")]
    PhraseTooLong { max: usize },

    #[error("No phrase to vote on")]
    NoCurrentPhrase,

    #[error("Nobody left to write")]
    NoWriter,

    #[error("Game is over, reset to play again")]
    GameOver,
}

#[derive(Debug)]
pub struct GameSession<E: Entropy = ThreadEntropy> {
    state: GameState,
    entropy: E,
    config: SessionConfig,
}

impl GameSession<ThreadEntropy> {
    pub fn new(config: SessionConfig) -> Self {
        Self::with_entropy(config, ThreadEntropy)
    }
}

impl Default for GameSession<ThreadEntropy> {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

impl<E: Entropy> GameSession<E> {
    pub fn with_entropy(config: SessionConfig, entropy: E) -> Self {
        Self {
            state: GameState::initial(),
            entropy,
            config,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Owned copy of the current state
    pub fn snapshot(&self) -> GameState {
        self.state.clone()
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Apply an action to the owned state
    pub fn dispatch(&mut self, action: Action) -> &GameState {
        let state = std::mem::take(&mut self.state);
        self.state = transition(state, action, &mut self.entropy);
        &self.state
    }

    // ========== Named operations ==========

    pub fn add_player(&mut self, name: impl Into<String>) -> &GameState {
        self.dispatch(Action::AddPlayer { name: name.into() })
    }

    pub fn remove_player(&mut self, player_id: impl Into<PlayerId>) -> &GameState {
        self.dispatch(Action::RemovePlayer {
            player_id: player_id.into(),
        })
    }

    pub fn start_game(&mut self) -> &GameState {
        self.dispatch(Action::StartGame)
    }

    pub fn add_phrase(
        &mut self,
        text: impl Into<String>,
        author_id: impl Into<PlayerId>,
    ) -> &GameState {
        self.dispatch(Action::AddPhrase {
            text: text.into(),
            author_id: author_id.into(),
        })
    }

    pub fn next_player(&mut self) -> &GameState {
        self.dispatch(Action::NextPlayer)
    }

    pub fn start_guess_phase(&mut self) -> &GameState {
        self.dispatch(Action::StartGuessPhase)
    }

    pub fn set_group_vote(&mut self, guessed_author_id: impl Into<PlayerId>) -> &GameState {
        self.dispatch(Action::SetGroupVote {
            guessed_author_id: guessed_author_id.into(),
        })
    }

    pub fn reveal_author_and_update_score(&mut self) -> &GameState {
        self.dispatch(Action::RevealAuthorAndUpdateScore)
    }

    pub fn next_phrase(&mut self) -> &GameState {
        self.dispatch(Action::NextPhrase)
    }

    pub fn show_scoreboard(&mut self) -> &GameState {
        self.dispatch(Action::ShowScoreboard)
    }

    pub fn new_round(&mut self) -> &GameState {
        self.dispatch(Action::NewRound)
    }

    pub fn reset_game(&mut self) -> &GameState {
        self.dispatch(Action::ResetGame)
    }

    // ========== Reads ==========

    /// Phrase being guessed; `None` before any round or with no phrases
    pub fn current_phrase(&self) -> Option<&Phrase> {
        self.state.current_phrase()
    }

    pub fn current_writer(&self) -> Option<&Player> {
        self.state.current_writer()
    }

    pub fn scoreboard(&self) -> Scoreboard {
        self.state.scoreboard()
    }

    // ========== Guarded table flow ==========

    fn expect_phase(&self, expected: GamePhase) -> Result<(), SessionError> {
        if self.state.phase != expected {
            return Err(SessionError::WrongPhase {
                expected,
                actual: self.state.phase,
            });
        }
        Ok(())
    }

    /// Seat a new player during setup
    pub fn join(&mut self, name: &str) -> Result<&Player, SessionError> {
        self.expect_phase(GamePhase::Setup)?;

        let name = name.trim();
        if name.is_empty() {
            return Err(SessionError::EmptyName);
        }
        if name.chars().count() > self.config.max_name_chars {
            return Err(SessionError::NameTooLong {
                max: self.config.max_name_chars,
            });
        }
        if self.state.players.len() >= self.config.max_players {
            return Err(SessionError::RosterFull {
                max: self.config.max_players,
            });
        }

        let seat = self.state.players.len();
        self.add_player(name);
        Ok(&self.state.players[seat])
    }

    /// Unseat a player during setup
    pub fn leave(&mut self, player_id: &str) -> Result<(), SessionError> {
        self.expect_phase(GamePhase::Setup)?;
        if self.state.player(player_id).is_none() {
            return Err(SessionError::UnknownPlayer(player_id.to_string()));
        }

        self.remove_player(player_id);
        Ok(())
    }

    /// Start the game once enough players are seated
    pub fn begin(&mut self) -> Result<(), SessionError> {
        self.expect_phase(GamePhase::Setup)?;

        let have = self.state.players.len();
        if have < self.config.min_players {
            return Err(SessionError::NotEnoughPlayers {
                min: self.config.min_players,
                have,
            });
        }

        self.start_game();
        Ok(())
    }

    /// Record the current writer's phrase and pass the turn
    pub fn submit_phrase(&mut self, text: &str) -> Result<(), SessionError> {
        self.expect_phase(GamePhase::PhraseInput)?;

        let text = text.trim();
        if text.is_empty() {
            return Err(SessionError::EmptyPhrase);
        }
        if text.chars().count() > self.config.max_phrase_chars {
            return Err(SessionError::PhraseTooLong {
                max: self.config.max_phrase_chars,
            });
        }

        let author_id = self
            .current_writer()
            .map(|p| p.id.clone())
            .ok_or(SessionError::NoWriter)?;

        self.add_phrase(text, author_id);
        self.next_player();
        Ok(())
    }

    /// The group settles on a guess: record it, score it, and after the
    /// reveal delay move to the next phrase. Correctness only shows on the
    /// scoreboard.
    pub async fn confirm_vote(&mut self, guessed_author_id: &str) -> Result<(), SessionError> {
        self.expect_phase(GamePhase::GuessPhase)?;
        if self.current_phrase().is_none() {
            return Err(SessionError::NoCurrentPhrase);
        }
        if self.state.player(guessed_author_id).is_none() {
            return Err(SessionError::UnknownPlayer(guessed_author_id.to_string()));
        }

        self.set_group_vote(guessed_author_id);
        self.reveal_author_and_update_score();

        tokio::time::sleep(self.config.reveal_delay).await;
        self.next_phrase();
        Ok(())
    }

    /// Next round after the scoreboard, unless everyone is out
    pub fn play_again(&mut self) -> Result<(), SessionError> {
        self.expect_phase(GamePhase::Scoreboard)?;
        if self.scoreboard().is_over() {
            return Err(SessionError::GameOver);
        }

        self.new_round();
        Ok(())
    }
}
