use crate::types::*;

impl GameState {
    /// Fresh table: no players, no round, setup phase
    pub fn initial() -> Self {
        Self::default()
    }

    /// Jump straight to guessing without shuffling
    pub(crate) fn start_guess_phase(&mut self) {
        self.phase = GamePhase::GuessPhase;
        self.current_player_index = 0;
    }

    pub(crate) fn show_scoreboard(&mut self) {
        self.phase = GamePhase::Scoreboard;
    }

    /// Player whose turn it is to write a phrase
    pub fn current_writer(&self) -> Option<&Player> {
        if self.phase != GamePhase::PhraseInput {
            return None;
        }
        self.players.get(self.current_player_index)
    }

    /// Phrase currently being guessed
    pub fn current_phrase(&self) -> Option<&Phrase> {
        self.current_round.as_ref()?.current_phrase()
    }
}
