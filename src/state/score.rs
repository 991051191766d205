use crate::types::*;
use serde::{Deserialize, Serialize};

/// A player's line on the scoreboard
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Standing {
    pub rank: usize,
    pub player_id: PlayerId,
    pub name: String,
    pub score: u32,
    pub leader: bool,
    pub eliminated: bool,
    pub lost_this_round: bool,
}

/// How the group did on one phrase of the round
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PhraseOutcome {
    pub phrase_id: PhraseId,
    pub text: String,
    pub author_id: PlayerId,
    pub author_name: Option<String>,
    pub group_vote: Option<PlayerId>,
    pub voted_name: Option<String>,
    /// The group named the real author
    pub author_caught: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Scoreboard {
    pub round_number: u32,
    pub standings: Vec<Standing>,
    pub outcomes: Vec<PhraseOutcome>,
    pub lost_this_round: Vec<PlayerId>,
    /// Players with points left
    pub still_in: usize,
}

impl Scoreboard {
    /// Nobody has points left; the only way on is a reset
    pub fn is_over(&self) -> bool {
        !self.standings.first().is_some_and(|s| s.score > 0)
    }
}

impl GameState {
    /// Standings plus a recap of the active round
    pub fn scoreboard(&self) -> Scoreboard {
        let mut ranked: Vec<&Player> = self.players.iter().collect();
        ranked.sort_by(|a, b| b.score.cmp(&a.score));

        let standings = ranked
            .into_iter()
            .enumerate()
            .map(|(index, p)| Standing {
                rank: index + 1,
                player_id: p.id.clone(),
                name: p.name.clone(),
                score: p.score,
                leader: index == 0 && p.score > 0,
                eliminated: p.is_eliminated(),
                lost_this_round: p.lost_this_round,
            })
            .collect();

        let name_of = |id: &str| self.player(id).map(|p| p.name.clone());

        let outcomes = self
            .current_round
            .iter()
            .flat_map(|round| {
                round.phrases.iter().map(move |phrase| {
                    let group_vote = round.vote_for(&phrase.id).map(|v| v.group_vote.clone());
                    PhraseOutcome {
                        phrase_id: phrase.id.clone(),
                        text: phrase.text.clone(),
                        author_id: phrase.author_id.clone(),
                        author_name: name_of(phrase.author_id.as_str()),
                        author_caught: group_vote.as_deref() == Some(phrase.author_id.as_str()),
                        voted_name: group_vote.as_deref().and_then(name_of),
                        group_vote,
                    }
                })
            })
            .collect();

        Scoreboard {
            round_number: self.current_round.as_ref().map_or(0, |r| r.number),
            standings,
            outcomes,
            lost_this_round: self
                .players
                .iter()
                .filter(|p| p.lost_this_round)
                .map(|p| p.id.clone())
                .collect(),
            still_in: self.players.iter().filter(|p| p.score > 0).count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entropy::SeededEntropy;
    use crate::protocol::Action;
    use crate::state::tests::{add, play};
    use crate::state::transition;

    #[test]
    fn test_empty_table() {
        let board = GameState::initial().scoreboard();

        assert_eq!(board.round_number, 0);
        assert!(board.standings.is_empty());
        assert!(board.outcomes.is_empty());
        assert_eq!(board.still_in, 0);
        assert!(board.is_over());
    }

    #[test]
    fn test_standings_sorted_with_stable_ties() {
        let mut entropy = SeededEntropy::new(40);
        let mut state = play(vec![add("Ana"), add("Bia"), add("Caio")], &mut entropy);
        state.players[0].score = 2;
        state.players[2].score = 0;

        let board = state.scoreboard();
        let names: Vec<_> = board.standings.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["Bia", "Ana", "Caio"]);
        assert_eq!(board.standings[0].rank, 1);
        assert!(board.standings[0].leader);
        assert!(!board.standings[1].leader);
        assert!(board.standings[2].eliminated);
        assert_eq!(board.still_in, 2);
        assert!(!board.is_over());
    }

    #[test]
    fn test_everyone_out_is_over() {
        let mut entropy = SeededEntropy::new(41);
        let mut state = play(vec![add("Ana"), add("Bia")], &mut entropy);
        for player in &mut state.players {
            player.score = 0;
        }

        let board = state.scoreboard();
        assert!(board.is_over());
        assert!(board.standings.iter().all(|s| !s.leader));
    }

    #[test]
    fn test_outcomes_follow_round_votes() {
        let mut entropy = SeededEntropy::new(42);
        let state = play(vec![add("Ana"), add("Bia"), Action::StartGame], &mut entropy);
        let ana = state.players[0].id.clone();
        let bia = state.players[1].id.clone();

        let mut state = state;
        for (text, author) in [("from ana", &ana), ("from bia", &bia)] {
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

        // Guess Ana for the first phrase shown, leave the second unvoted
        state = transition(
            state,
            Action::SetGroupVote {
                guessed_author_id: ana.clone(),
            },
            &mut entropy,
        );
        state = transition(state, Action::RevealAuthorAndUpdateScore, &mut entropy);
        state = transition(state, Action::NextPhrase, &mut entropy);
        state = transition(state, Action::NextPhrase, &mut entropy);
        assert_eq!(state.phase, GamePhase::Scoreboard);

        let board = state.scoreboard();
        assert_eq!(board.round_number, 1);
        assert_eq!(board.outcomes.len(), 2);

        let first = &board.outcomes[0];
        assert_eq!(first.group_vote.as_deref(), Some(ana.as_str()));
        assert_eq!(first.voted_name.as_deref(), Some("Ana"));
        assert_eq!(first.author_caught, first.author_id == ana);

        let second = &board.outcomes[1];
        assert!(second.group_vote.is_none());
        assert!(second.voted_name.is_none());
        assert!(!second.author_caught);

        if first.author_id == ana {
            assert_eq!(board.lost_this_round, vec![ana]);
        } else {
            assert!(board.lost_this_round.is_empty());
        }
    }
}
