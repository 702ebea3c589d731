//! Game state - the owned simulation root
//!
//! Bundles the map and the player pose behind one object that is constructed
//! at startup and threaded through the loop, so there is no process-global
//! mutable state and the simulation can be driven headless in tests.

use tui_maze_types::Command;

use crate::map::WorldMap;
use crate::player::{Motion, MovementController, Player};

/// Complete simulation state.
///
/// Mutated in place exactly once per tick by [`GameState::apply`].
#[derive(Debug, Clone)]
pub struct GameState {
    pub map: WorldMap,
    pub player: Player,
    controller: MovementController,
}

impl GameState {
    /// Bundled maze, spawn pose, default movement tuning.
    pub fn new() -> Self {
        Self::with_map(WorldMap::bundled(), Player::spawn())
    }

    /// Custom map and pose (small deterministic maps for tests).
    pub fn with_map(map: WorldMap, player: Player) -> Self {
        Self {
            map,
            player,
            controller: MovementController::default(),
        }
    }

    pub fn with_motion(mut self, motion: Motion) -> Self {
        self.controller = MovementController::new(motion);
        self
    }

    pub fn motion(&self) -> Motion {
        self.controller.motion()
    }

    /// Apply one command over a fixed timestep.
    pub fn apply(&mut self, command: Command, dt: f64) {
        self.controller
            .apply(&mut self.player, &self.map, command, dt);
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
