//! The states of a round.

crate::cyclic_state_enum! {
    /// Phase of the puzzle. Exactly one is active at a time and advancing
    /// past `Restart` wraps back to `Begin`.
    pub enum GameState {
        /// Doors are being reset and the prize hidden.
        Begin,
        /// Waiting for the player's first pick.
        SelectFirstDoor,
        /// A losing door is being revealed.
        EliminateDoor,
        /// Waiting for the player to stay or switch.
        AskSwitchDoor,
        /// The final pick is highlighted.
        ShowFinalSelection,
        /// Doors are opened.
        ShowResults,
        /// Verdict shown, waiting to play again.
        Restart,
    }
    final: [Restart]
}

impl GameState {
    /// States in which the player may pick a door.
    pub fn accepts_selection(&self) -> bool {
        match self {
            Self::SelectFirstDoor | Self::AskSwitchDoor => true,
            Self::Begin
            | Self::EliminateDoor
            | Self::ShowFinalSelection
            | Self::ShowResults
            | Self::Restart => false,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::Begin
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::State;

    #[test]
    fn cycle_visits_every_state_in_order() {
        let mut state = GameState::Begin;
        let mut visited = vec![state];
        for _ in 1..GameState::ALL.len() {
            state = state.next();
            visited.push(state);
        }
        assert_eq!(visited, GameState::ALL);
        assert_eq!(state.next(), GameState::Begin);
    }

    #[test]
    fn only_restart_is_final() {
        let finals: Vec<_> = GameState::ALL.iter().filter(|s| s.is_final()).collect();
        assert_eq!(finals, vec![&GameState::Restart]);
    }

    #[test]
    fn selection_states() {
        let selecting: Vec<_> = GameState::ALL
            .iter()
            .filter(|s| s.accepts_selection())
            .copied()
            .collect();
        assert_eq!(
            selecting,
            vec![GameState::SelectFirstDoor, GameState::AskSwitchDoor]
        );
    }
}
