//! MazeView: composes the first-person frame into a framebuffer.
//!
//! This module is pure (no I/O). One ray per column, one vertical span per
//! ray, then every row classifies as sky, wall, or floor and gets a glyph.
//! It can be unit-tested headless.

use tui_maze_core::{GameState, SkyDome};
use tui_maze_engine::{floor_glyph, wall_extents, wall_glyph, RayCaster, RaycastConfig};

use crate::fb::{Cell, CellStyle, FrameBuffer};

/// First-person frame composer, sized once at startup.
///
/// Owns the ray caster and the star-field dome; the screen size is fixed for
/// the session, so both are built exactly once.
pub struct MazeView {
    width: u16,
    height: u16,
    caster: RayCaster,
    dome: SkyDome,
}

impl MazeView {
    pub fn new(width: u16, height: u16, config: RaycastConfig, sky_seed: u32) -> Self {
        let dome = SkyDome::build(width, height, config.fov, sky_seed);
        Self {
            width,
            height,
            caster: RayCaster::new(config),
            dome,
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn caster(&self) -> &RayCaster {
        &self.caster
    }

    /// Render one full frame into an existing framebuffer.
    ///
    /// Every cell is overwritten; callers reuse the buffer across frames.
    pub fn render_into(&self, game: &GameState, fb: &mut FrameBuffer) {
        fb.resize(self.width, self.height);
        let max_depth = self.caster.config().max_depth;

        for column in 0..self.width {
            let hit = self
                .caster
                .cast_column(&game.map, &game.player, column, self.width);
            let span = wall_extents(hit.distance, self.height);
            let wall = wall_glyph(&hit, max_depth);
            let sky_column = self.dome.column_for(column, game.player.heading);

            for row in 0..self.height {
                let cell = if span.is_sky(row) {
                    Cell {
                        ch: self.dome.glyph(sky_column, usize::from(row)),
                        style: CellStyle::Sky,
                    }
                } else if span.contains_wall(row) {
                    Cell {
                        ch: wall,
                        style: CellStyle::Maze,
                    }
                } else {
                    Cell {
                        ch: floor_glyph(row, self.height),
                        style: CellStyle::Maze,
                    }
                };
                fb.set(column, row, cell);
            }
        }
    }

    /// Overlay one line of diagnostics on an already-rendered frame.
    ///
    /// `fps` comes from measured frame time; it is display-only and never
    /// feeds back into movement math.
    pub fn draw_hud(&self, game: &GameState, fps: f64, fb: &mut FrameBuffer) {
        let line = format!(
            "x={:6.2} y={:6.2} a={:5.2} fps={:6.1}",
            game.player.x, game.player.y, game.player.heading, fps
        );
        fb.put_str(0, 0, &line, CellStyle::Maze);
    }
}
