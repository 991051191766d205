mod game;
mod player;
mod round;
mod score;
mod vote;

pub use score::{PhraseOutcome, Scoreboard, Standing};

use crate::entropy::Entropy;
use crate::protocol::Action;
use crate::types::*;

/// Apply one action to the game.
///
/// Total: every (state, action) pair yields a next state. Actions whose
/// preconditions do not hold leave the state untouched.
pub fn transition<E: Entropy>(
    mut state: GameState,
    action: Action,
    entropy: &mut E,
) -> GameState {
    let name = action.name();
    let phase_before = state.phase;

    let applied = match action {
        Action::AddPlayer { name } => {
            state.add_player(entropy.next_id(), name);
            true
        }
        Action::RemovePlayer { player_id } => state.remove_player(&player_id),
        Action::StartGame => {
            state.start_game(entropy.next_id());
            true
        }
        Action::AddPhrase { text, author_id } => {
            state.add_phrase(entropy.next_id(), text, author_id)
        }
        Action::NextPlayer => state.next_player(entropy),
        Action::StartGuessPhase => {
            state.start_guess_phase();
            true
        }
        Action::SetGroupVote { guessed_author_id } => {
            state.set_group_vote(guessed_author_id)
        }
        Action::RevealAuthorAndUpdateScore => state.reveal_author_and_update_score(),
        Action::NextPhrase => state.next_phrase(),
        Action::ShowScoreboard => {
            state.show_scoreboard();
            true
        }
        Action::NewRound => {
            state.new_round(entropy.next_id());
            true
        }
        Action::ResetGame => {
            state = GameState::initial();
            true
        }
    };

    if !applied {
        tracing::debug!("Ignored {}: precondition not met in {:?}", name, state.phase);
    } else if state.phase != phase_before {
        tracing::info!("{}: phase {:?} -> {:?}", name, phase_before, state.phase);
    } else {
        tracing::debug!("Applied {}", name);
    }

    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entropy::SeededEntropy;

    /// Fold a list of actions over the initial state
    pub(crate) fn play(actions: Vec<Action>, entropy: &mut SeededEntropy) -> GameState {
        actions
            .into_iter()
            .fold(GameState::initial(), |state, action| {
                transition(state, action, entropy)
            })
    }

    pub(crate) fn add(name: &str) -> Action {
        Action::AddPlayer {
            name: name.to_string(),
        }
    }

    #[test]
    fn test_initial_state() {
        let state = GameState::initial();
        assert!(state.players.is_empty());
        assert!(state.current_round.is_none());
        assert_eq!(state.phase, GamePhase::Setup);
        assert_eq!(state.current_player_index, 0);
    }

    #[test]
    fn test_round_actions_without_round_are_noops() {
        let mut entropy = SeededEntropy::new(1);
        let before = play(vec![add("Ana"), add("Bia")], &mut entropy);

        let actions = vec![
            Action::AddPhrase {
                text: "x".to_string(),
                author_id: before.players[0].id.clone(),
            },
            Action::SetGroupVote {
                guessed_author_id: before.players[0].id.clone(),
            },
            Action::RevealAuthorAndUpdateScore,
            Action::NextPhrase,
        ];

        for action in actions {
            let after = transition(before.clone(), action, &mut entropy);
            assert_eq!(after, before);
        }
    }

    #[test]
    fn test_reset_from_any_phase_returns_initial_state() {
        let mut entropy = SeededEntropy::new(2);
        let mut state = play(
            vec![add("Ana"), add("Bia"), Action::StartGame],
            &mut entropy,
        );
        let ana = state.players[0].id.clone();
        let bia = state.players[1].id.clone();

        for (text, author) in [("x", &ana), ("y", &bia)] {
            state = transition(
                state,
                Action::AddPhrase {
                    text: text.to_string(),
                    author_id: author.clone(),
                },
                &mut entropy,
            );
            state = transition(state, Action::NextPlayer, &mut entropy);
        }
        assert_eq!(state.phase, GamePhase::GuessPhase);

        let snapshots = [
            state.clone(),
            transition(state.clone(), Action::ShowScoreboard, &mut entropy),
            transition(state, Action::NewRound, &mut entropy),
        ];
        for snapshot in snapshots {
            assert_eq!(
                transition(snapshot, Action::ResetGame, &mut entropy),
                GameState::initial()
            );
        }
    }
}
