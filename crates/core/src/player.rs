//! Player module - pose state and movement rules
//!
//! The player is a real-valued position plus a heading angle. The controller
//! is the only thing that mutates it, once per tick, and keeps the heading
//! normalized into `[0, 2*pi)` after every update.

use std::f64::consts::TAU;

use tui_maze_types::{
    Command, MOVE_SPEED, PLAYER_START_HEADING, PLAYER_START_X, PLAYER_START_Y, TURN_SPEED,
};

use crate::map::WorldMap;

/// Normalize an angle into `[0, 2*pi)` via floored modulo.
///
/// Floored (not truncating) so negative inputs wrap to the top of the range.
/// Rounding at the seam can land exactly on `2*pi`; that case folds to zero.
pub fn wrap_angle(angle: f64) -> f64 {
    let wrapped = angle - TAU * (angle / TAU).floor();
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}

/// Player pose in world coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Player {
    pub x: f64,
    pub y: f64,
    /// Heading in radians, kept in `[0, 2*pi)`.
    pub heading: f64,
}

impl Player {
    pub fn new(x: f64, y: f64, heading: f64) -> Self {
        Self {
            x,
            y,
            heading: wrap_angle(heading),
        }
    }

    /// The bundled maze's spawn pose.
    pub fn spawn() -> Self {
        Self::new(PLAYER_START_X, PLAYER_START_Y, PLAYER_START_HEADING)
    }

    /// Unit direction vector of the current heading.
    pub fn direction(&self) -> (f64, f64) {
        (self.heading.sin(), self.heading.cos())
    }
}

/// Movement tuning.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motion {
    /// Walk speed in world units per second.
    pub move_speed: f64,
    /// Turn rate in radians per second.
    pub turn_speed: f64,
}

impl Default for Motion {
    fn default() -> Self {
        Self {
            move_speed: MOVE_SPEED,
            turn_speed: TURN_SPEED,
        }
    }
}

/// Applies commands to a player pose, resolving collisions against the map.
#[derive(Debug, Clone, Copy, Default)]
pub struct MovementController {
    motion: Motion,
}

impl MovementController {
    pub fn new(motion: Motion) -> Self {
        Self { motion }
    }

    pub fn motion(&self) -> Motion {
        self.motion
    }

    /// Apply one command over a fixed `dt` timestep.
    ///
    /// Non-directional commands are ignored here.
    pub fn apply(&self, player: &mut Player, map: &WorldMap, command: Command, dt: f64) {
        match command {
            Command::TurnLeft => {
                player.heading = wrap_angle(player.heading - self.motion.turn_speed * dt);
            }
            Command::TurnRight => {
                player.heading = wrap_angle(player.heading + self.motion.turn_speed * dt);
            }
            Command::MoveForward => self.translate(player, map, 1.0, dt),
            Command::MoveBackward => self.translate(player, map, -1.0, dt),
            Command::ToggleHud => {}
        }
    }

    /// Walk along (or against) the heading vector.
    ///
    /// Collision uses a single combined-axis test of the destination cell:
    /// a blocked move is dropped whole, so concave corners can stick.
    fn translate(&self, player: &mut Player, map: &WorldMap, sign: f64, dt: f64) {
        let (dir_x, dir_y) = player.direction();
        let new_x = player.x + dir_x * self.motion.move_speed * dt * sign;
        let new_y = player.y + dir_y * self.motion.move_speed * dt * sign;

        if !map.is_wall(new_x.floor() as i32, new_y.floor() as i32) {
            player.x = new_x;
            player.y = new_y;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use tui_maze_types::TICK_SECONDS;

    #[test]
    fn wrap_angle_is_floored_modulo() {
        assert_eq!(wrap_angle(0.0), 0.0);
        assert!((wrap_angle(-0.5) - (TAU - 0.5)).abs() < 1e-12);
        assert!((wrap_angle(TAU + 0.25) - 0.25).abs() < 1e-12);
        assert!((wrap_angle(-3.0 * TAU - 0.1) - (TAU - 0.1)).abs() < 1e-9);
    }

    #[test]
    fn wrap_angle_never_returns_tau() {
        // A hair below zero wraps to just under TAU, never TAU itself.
        let wrapped = wrap_angle(-1e-18);
        assert!(wrapped >= 0.0);
        assert!(wrapped < TAU);
    }

    #[test]
    fn turning_keeps_heading_normalized() {
        let map = WorldMap::bundled();
        let controller = MovementController::default();
        let mut player = Player::new(8.5, 8.5, 0.1);

        for _ in 0..2000 {
            controller.apply(&mut player, &map, Command::TurnLeft, TICK_SECONDS);
            assert!(player.heading >= 0.0 && player.heading < TAU);
        }
        for _ in 0..2000 {
            controller.apply(&mut player, &map, Command::TurnRight, TICK_SECONDS);
            assert!(player.heading >= 0.0 && player.heading < TAU);
        }
    }

    #[test]
    fn blocked_move_reverts_exactly() {
        let map = WorldMap::bundled();
        let controller = MovementController::default();
        // One tick of forward motion would land in the wall cell (14, 13).
        let mut player = Player::new(14.4, 14.05, std::f64::consts::PI);
        let before = player;

        controller.apply(&mut player, &map, Command::MoveForward, TICK_SECONDS);

        assert_eq!(player.x, before.x);
        assert_eq!(player.y, before.y);
    }

    #[test]
    fn open_move_commits_the_tentative_position() {
        let map = WorldMap::bundled();
        let controller = MovementController::default();
        let mut player = Player::new(8.5, 8.5, 0.0);

        controller.apply(&mut player, &map, Command::MoveForward, TICK_SECONDS);

        assert_eq!(player.x, 8.5 + 0.0_f64.sin() * MOVE_SPEED * TICK_SECONDS);
        assert_eq!(player.y, 8.5 + 0.0_f64.cos() * MOVE_SPEED * TICK_SECONDS);
    }

    #[test]
    fn backward_motion_respects_walls_too() {
        let map = WorldMap::bundled();
        let controller = MovementController::default();
        // Backward from heading pi walks toward +y, into the bottom wall row.
        let mut player = Player::new(14.4, 14.9, std::f64::consts::PI);
        let before = player;

        controller.apply(&mut player, &map, Command::MoveBackward, TICK_SECONDS);

        assert_eq!(player.y, before.y);
    }

    #[test]
    fn toggle_hud_does_not_touch_the_pose() {
        let map = WorldMap::bundled();
        let controller = MovementController::default();
        let mut player = Player::spawn();
        let before = player;

        controller.apply(&mut player, &map, Command::ToggleHud, TICK_SECONDS);

        assert_eq!(player, before);
    }

    proptest! {
        #[test]
        fn heading_stays_in_range_for_any_turn_sequence(
            turns in proptest::collection::vec(prop::bool::ANY, 0..256),
            start in -100.0f64..100.0,
        ) {
            let map = WorldMap::bundled();
            let controller = MovementController::default();
            let mut player = Player::new(8.5, 8.5, start);
            prop_assert!(player.heading >= 0.0 && player.heading < TAU);

            for left in turns {
                let command = if left { Command::TurnLeft } else { Command::TurnRight };
                controller.apply(&mut player, &map, command, TICK_SECONDS);
                prop_assert!(player.heading >= 0.0 && player.heading < TAU);
            }
        }

        #[test]
        fn wrap_angle_law(angle in -1e6f64..1e6) {
            let wrapped = wrap_angle(angle);
            prop_assert!(wrapped >= 0.0);
            prop_assert!(wrapped < TAU);
        }
    }
}
