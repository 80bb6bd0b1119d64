//! Session state machine
//!
//! The shell around the simulation: Menu → Playing ⇄ Paused, Playing →
//! GameOver → Menu. Death arrives as an event from the tick and is consumed
//! here; nothing in the simulation re-enters menu code directly.

use serde::{Deserialize, Serialize};

use crate::sim::GameEvent;

/// Where the player is in the menu/game shell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SessionPhase {
    #[default]
    Menu,
    Playing,
    Paused,
    GameOver,
}

/// Explicit transitions between shell phases
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Session {
    pub phase: SessionPhase,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Menu → Playing (level start)
    pub fn start(&mut self) {
        if self.phase == SessionPhase::Menu {
            log::info!("session: level start");
            self.phase = SessionPhase::Playing;
        }
    }

    /// Playing ⇄ Paused; ignored elsewhere
    pub fn toggle_pause(&mut self) {
        self.phase = match self.phase {
            SessionPhase::Playing => SessionPhase::Paused,
            SessionPhase::Paused => SessionPhase::Playing,
            other => other,
        };
    }

    /// Route simulation events into shell transitions
    pub fn apply(&mut self, event: &GameEvent) {
        if *event == GameEvent::Death && self.phase == SessionPhase::Playing {
            log::info!("session: player died, ending level");
            self.phase = SessionPhase::GameOver;
        }
    }

    /// GameOver → Menu
    pub fn return_to_menu(&mut self) {
        if self.phase == SessionPhase::GameOver {
            log::info!("session: back to menu");
            self.phase = SessionPhase::Menu;
        }
    }

    /// The tick loop only runs in this phase
    pub fn is_playing(&self) -> bool {
        self.phase == SessionPhase::Playing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_session_sits_in_menu() {
        let session = Session::new();
        assert_eq!(session.phase, SessionPhase::Menu);
        assert!(!session.is_playing());
    }

    #[test]
    fn test_start_and_pause_cycle() {
        let mut session = Session::new();
        session.start();
        assert!(session.is_playing());

        session.toggle_pause();
        assert_eq!(session.phase, SessionPhase::Paused);
        session.toggle_pause();
        assert!(session.is_playing());
    }

    #[test]
    fn test_death_routes_to_game_over_then_menu() {
        let mut session = Session::new();
        session.start();

        session.apply(&GameEvent::Jump);
        assert!(session.is_playing());

        session.apply(&GameEvent::Death);
        assert_eq!(session.phase, SessionPhase::GameOver);

        // Pause and further deaths are no-ops once the run ended
        session.toggle_pause();
        session.apply(&GameEvent::Death);
        assert_eq!(session.phase, SessionPhase::GameOver);

        session.return_to_menu();
        assert_eq!(session.phase, SessionPhase::Menu);
    }

    #[test]
    fn test_start_only_leaves_menu() {
        let mut session = Session { phase: SessionPhase::GameOver };
        session.start();
        assert_eq!(session.phase, SessionPhase::GameOver);
    }
}
