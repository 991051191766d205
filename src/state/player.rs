use crate::types::*;

impl GameState {
    /// Append a player with the starting score. Duplicate names are allowed.
    pub(crate) fn add_player(&mut self, id: PlayerId, name: String) {
        tracing::info!("Player {} joined as {:?}", id, name);
        self.players.push(Player::new(id, name));
    }

    /// Returns false if no player has that id
    pub(crate) fn remove_player(&mut self, player_id: &str) -> bool {
        let before = self.players.len();
        self.players.retain(|p| p.id != player_id);

        let removed = self.players.len() != before;
        if removed {
            tracing::info!("Removed player {}", player_id);
        }
        removed
    }

    pub fn player(&self, player_id: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.id == player_id)
    }

    pub(crate) fn player_mut(&mut self, player_id: &str) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.id == player_id)
    }

    pub(crate) fn clear_lost_flags(&mut self) {
        for player in &mut self.players {
            player.lost_this_round = false;
        }
    }
}
