use crate::entropy::Entropy;
use crate::types::*;

impl GameState {
    /// First round of a game
    pub(crate) fn start_game(&mut self, round_id: RoundId) {
        self.begin_round(round_id, 1);
    }

    /// Another round on the same roster; scores carry over
    pub(crate) fn new_round(&mut self, round_id: RoundId) {
        let number = self.current_round.as_ref().map_or(0, |r| r.number) + 1;
        self.begin_round(round_id, number);
    }

    /// Discard the active round and open an empty one for writing
    fn begin_round(&mut self, round_id: RoundId, number: u32) {
        tracing::info!("Starting round {} ({})", number, round_id);
        self.phase = GamePhase::PhraseInput;
        self.current_player_index = 0;
        self.current_round = Some(Round::new(round_id, number));
        self.clear_lost_flags();
    }

    /// No author check: the turn flow keeps it to one phrase per player
    pub(crate) fn add_phrase(&mut self, id: PhraseId, text: String, author_id: PlayerId) -> bool {
        let Some(round) = self.current_round.as_mut() else {
            return false;
        };

        round.phrases.push(Phrase {
            id,
            text,
            author_id,
            used: false,
        });
        true
    }

    /// Hand the pen to the next player. Once everyone has written, shuffle
    /// the phrases and move on to guessing. Only that last hand-over needs
    /// an active round.
    pub(crate) fn next_player<E: Entropy>(&mut self, entropy: &mut E) -> bool {
        let next_index = self.current_player_index + 1;
        if next_index < self.players.len() {
            self.current_player_index = next_index;
            return true;
        }

        let Some(round) = self.current_round.as_mut() else {
            return false;
        };

        entropy.shuffle(&mut round.phrases);
        round.current_phrase_index = 0;
        tracing::info!(
            "All players wrote, shuffled {} phrases for round {}",
            round.phrases.len(),
            round.number
        );

        self.current_player_index = 0;
        self.phase = GamePhase::GuessPhase;
        true
    }
}
