//! Integration tests for the tick loop wiring

use crossterm::event::{KeyCode, KeyEvent};

use tui_maze::core::GameState;
use tui_maze::input::{map_key_event, should_quit, InputHandler};
use tui_maze::types::{Command, TICK_SECONDS};

#[test]
fn test_key_to_simulation_round_trip() {
    let mut game = GameState::new();
    let mut input = InputHandler::new();
    let start_heading = game.player.heading;

    // A key event arrives between ticks...
    let action = map_key_event(KeyEvent::from(KeyCode::Left)).unwrap();
    input.record(action);

    // ...and the next tick applies it exactly once.
    if let Some(command) = input.take() {
        game.apply(command, TICK_SECONDS);
    }
    assert_ne!(game.player.heading, start_heading);

    // The tick after that has nothing left to apply.
    assert_eq!(input.take(), None);
}

#[test]
fn test_only_the_latest_key_in_a_tick_counts() {
    let mut game = GameState::new();
    let mut input = InputHandler::new();
    let start = game.player;

    input.record(map_key_event(KeyEvent::from(KeyCode::Up)).unwrap());
    input.record(map_key_event(KeyEvent::from(KeyCode::Left)).unwrap());

    if let Some(command) = input.take() {
        game.apply(command, TICK_SECONDS);
    }

    // The turn won; the walk was superseded.
    assert_eq!(game.player.x, start.x);
    assert_eq!(game.player.y, start.y);
    assert_ne!(game.player.heading, start.heading);
}

#[test]
fn test_ticks_without_input_leave_the_pose_alone() {
    let mut game = GameState::new();
    let mut input = InputHandler::new();
    let start = game.player;

    for _ in 0..100 {
        if let Some(command) = input.take() {
            game.apply(command, TICK_SECONDS);
        }
    }

    assert_eq!(game.player, start);
}

#[test]
fn test_quit_keys_do_not_reach_the_latch() {
    // The loop returns on quit before recording anything; make sure the
    // quit chords are not also bound to commands.
    for key in [KeyEvent::from(KeyCode::Esc), KeyEvent::from(KeyCode::Char('q'))] {
        assert!(should_quit(key));
        assert_eq!(map_key_event(key), None);
    }
}

#[test]
fn test_directional_commands_are_all_applicable() {
    let mut game = GameState::new();
    for command in [
        Command::TurnLeft,
        Command::TurnRight,
        Command::MoveForward,
        Command::MoveBackward,
    ] {
        // Must never panic or corrupt the heading range.
        game.apply(command, TICK_SECONDS);
        assert!(game.player.heading >= 0.0);
        assert!(game.player.heading < std::f64::consts::TAU);
    }
}
