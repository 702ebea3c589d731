//! Map module - the static maze grid
//!
//! The world is an immutable rectangular grid where each cell is wall or
//! empty. Uses a flat row-major array; coordinates are (x, y) with x ranging
//! left to right and y selecting the row. Dimensions are fixed for the life
//! of the process.

use tui_maze_types::{Tile, MAP_HEIGHT};

/// The maze bundled into the binary.
///
/// `'#'` is wall, `'.'` is empty. Row 0 is the top of the grid as written.
const BUNDLED_ROWS: [&str; MAP_HEIGHT] = [
    "#########.......",
    "#...............",
    "#.......########",
    "#..............#",
    "#......##......#",
    "#......##......#",
    "#..............#",
    "###............#",
    "##.............#",
    "#......####..###",
    "#......#.......#",
    "#......#.......#",
    "#..............#",
    "#......#########",
    "#...............",
    "################",
];

/// Immutable tile grid with wall queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorldMap {
    width: usize,
    height: usize,
    tiles: Vec<Tile>,
}

impl WorldMap {
    /// Build a map from layout rows.
    ///
    /// Every row must have the same length and contain only tile glyphs.
    /// Returns `None` for ragged rows, unknown glyphs, or an empty layout.
    pub fn from_rows(rows: &[&str]) -> Option<Self> {
        let height = rows.len();
        let width = rows.first()?.chars().count();
        if width == 0 {
            return None;
        }

        let mut tiles = Vec::with_capacity(width * height);
        for row in rows {
            if row.chars().count() != width {
                return None;
            }
            for ch in row.chars() {
                tiles.push(Tile::from_char(ch)?);
            }
        }

        Some(Self {
            width,
            height,
            tiles,
        })
    }

    /// The maze shipped with the binary.
    pub fn bundled() -> Self {
        Self::from_rows(&BUNDLED_ROWS).expect("bundled layout is well-formed")
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || x >= self.width as i32 || y < 0 || y >= self.height as i32 {
            return None;
        }
        Some((y as usize) * self.width + (x as usize))
    }

    /// Whether (x, y) addresses a cell inside the grid.
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        self.index(x, y).is_some()
    }

    /// Wall query: out-of-range addresses read as wall.
    ///
    /// Pure and read-only; callable concurrently.
    pub fn is_wall(&self, x: i32, y: i32) -> bool {
        match self.index(x, y) {
            Some(idx) => self.tiles[idx].is_solid(),
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tui_maze_types::MAP_WIDTH;

    #[test]
    fn bundled_map_has_declared_dimensions() {
        let map = WorldMap::bundled();
        assert_eq!(map.width(), MAP_WIDTH);
        assert_eq!(map.height(), MAP_HEIGHT);
    }

    #[test]
    fn bundled_map_is_fully_enclosed_except_gaps() {
        let map = WorldMap::bundled();
        // Bottom row is solid wall.
        for x in 0..MAP_WIDTH as i32 {
            assert!(map.is_wall(x, MAP_HEIGHT as i32 - 1));
        }
        // Left column is solid wall.
        for y in 0..MAP_HEIGHT as i32 {
            assert!(map.is_wall(0, y));
        }
    }

    #[test]
    fn out_of_range_reads_as_wall() {
        let map = WorldMap::bundled();
        assert!(map.is_wall(-1, 0));
        assert!(map.is_wall(0, -1));
        assert!(map.is_wall(MAP_WIDTH as i32, 0));
        assert!(map.is_wall(0, MAP_HEIGHT as i32));
        assert!(!map.in_bounds(-1, 0));
        assert!(map.in_bounds(0, 0));
    }

    #[test]
    fn interior_cells_match_layout() {
        let map = WorldMap::bundled();
        assert!(!map.is_wall(1, 1));
        assert!(map.is_wall(7, 4));
        assert!(map.is_wall(8, 5));
        // The wall row the player spawns facing.
        assert!(map.is_wall(14, 13));
        assert!(!map.is_wall(14, 14));
    }

    #[test]
    fn ragged_or_malformed_rows_are_rejected() {
        assert!(WorldMap::from_rows(&["##", "#"]).is_none());
        assert!(WorldMap::from_rows(&["#x", "##"]).is_none());
        assert!(WorldMap::from_rows(&[]).is_none());
        assert!(WorldMap::from_rows(&["", ""]).is_none());
        assert!(WorldMap::from_rows(&["#.", ".#"]).is_some());
    }
}
