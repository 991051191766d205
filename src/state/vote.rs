use crate::types::*;

impl GameState {
    /// Record the group's guess for the phrase under the cursor.
    ///
    /// The first guess recorded for a phrase stands; later ones are ignored.
    pub(crate) fn set_group_vote(&mut self, guessed_author_id: PlayerId) -> bool {
        let Some(round) = self.current_round.as_mut() else {
            return false;
        };
        let Some(phrase_id) = round.current_phrase().map(|p| p.id.clone()) else {
            return false;
        };

        if round.vote_for(&phrase_id).is_some() {
            return false;
        }

        round.vote_results.insert(
            phrase_id.clone(),
            VoteResult {
                phrase_id,
                group_vote: guessed_author_id,
                revealed: false,
            },
        );
        true
    }

    /// Reveal the author of the current phrase. If the group guessed right,
    /// the author loses one point (never below zero).
    pub(crate) fn reveal_author_and_update_score(&mut self) -> bool {
        let Some(round) = self.current_round.as_mut() else {
            return false;
        };
        let Some(phrase) = round.phrases.get(round.current_phrase_index) else {
            return false;
        };
        let author_id = phrase.author_id.clone();
        let Some(vote) = round.vote_results.get_mut(&phrase.id) else {
            return false;
        };
        if vote.revealed {
            return false;
        }
        vote.revealed = true;

        if vote.group_vote != author_id {
            tracing::info!("Group missed, {} stays safe", author_id);
            return true;
        }

        if let Some(author) = self.player_mut(&author_id) {
            author.score = author.score.saturating_sub(1);
            author.lost_this_round = true;
            tracing::info!(
                "Group caught {}, score now {}",
                author.name,
                author.score
            );
        }
        true
    }

    /// Move the cursor to the next phrase, or close the round after the last one
    pub(crate) fn next_phrase(&mut self) -> bool {
        let Some(round) = self.current_round.as_mut() else {
            return false;
        };

        let next_index = round.current_phrase_index + 1;
        if next_index < round.phrases.len() {
            round.current_phrase_index = next_index;
            return true;
        }

        round.is_completed = true;
        tracing::info!("Round {} completed", round.number);
        self.phase = GamePhase::Scoreboard;
        true
    }
}
