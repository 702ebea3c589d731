//! Terminal rendering module.
//!
//! A small game-oriented rendering layer: the frame composes into a plain
//! framebuffer of styled cells, and a crossterm-backed renderer flushes it
//! with diff-based redraws.
//!
//! Goals:
//! - Keep `core` and `engine` deterministic and testable
//! - Render full frames every tick without tearing or flicker
//! - Confine concrete colors to the terminal boundary (the composer only
//!   knows the two logical styles)

pub mod fb;
pub mod renderer;
pub mod view;

pub use tui_maze_core as core;
pub use tui_maze_engine as engine;
pub use tui_maze_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer};
pub use renderer::{encode_diff_into, encode_full_into, Palette, Rgb, StyleSpec, TerminalRenderer};
pub use view::MazeView;
