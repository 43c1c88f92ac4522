use std::fmt;

use super::ViewError;
use crate::state::{Position, Tile};

/// Immutable square snapshot of the tiles around an observer.
///
/// Coordinates are local to the window: `(0, 0)` is the north-west corner
/// and the observer stands at [`LocalView::centre`]. The view is a value
/// copy; nothing a participant does to it reaches the authoritative map.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LocalView {
    size: usize,
    cells: Vec<Tile>,
}

impl LocalView {
    /// Builds a view from row-major tiles.
    pub fn from_rows(rows: Vec<Vec<Tile>>) -> Result<Self, ViewError> {
        let size = rows.len();
        if size == 0 {
            return Err(ViewError::Empty);
        }
        if size % 2 == 0 {
            return Err(ViewError::EvenSize(size));
        }

        let mut cells = Vec::with_capacity(size * size);
        for (row, tiles) in rows.into_iter().enumerate() {
            if tiles.len() != size {
                return Err(ViewError::NotSquare {
                    row,
                    expected: size,
                    found: tiles.len(),
                });
            }
            for (col, tile) in tiles.into_iter().enumerate() {
                if tile.is_unknown() {
                    return Err(ViewError::StoredUnknown(Position::new(row as i32, col as i32)));
                }
                cells.push(tile);
            }
        }

        Ok(Self { size, cells })
    }

    /// Builds a view from glyph rows such as `"..#.."`.
    pub fn from_glyphs<S: AsRef<str>>(rows: &[S]) -> Result<Self, ViewError> {
        let mut parsed = Vec::with_capacity(rows.len());
        for (row, line) in rows.iter().enumerate() {
            let mut tiles = Vec::new();
            for (col, glyph) in line.as_ref().chars().enumerate() {
                let tile = Tile::from_glyph(glyph).ok_or(ViewError::UnknownGlyph {
                    glyph,
                    position: Position::new(row as i32, col as i32),
                })?;
                tiles.push(tile);
            }
            parsed.push(tiles);
        }
        Self::from_rows(parsed)
    }

    /// Assembles a window the caller guarantees is well formed
    /// (odd side, `size * size` cells, no `Unknown`).
    pub(crate) fn from_square(size: usize, cells: Vec<Tile>) -> Self {
        debug_assert!(size % 2 == 1 && cells.len() == size * size);
        Self { size, cells }
    }

    /// Side length of the window.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Where the observer stood when the view was captured.
    pub fn centre(&self) -> Position {
        let mid = (self.size / 2) as i32;
        Position::new(mid, mid)
    }

    pub fn contains(&self, position: Position) -> bool {
        position.row >= 0
            && position.col >= 0
            && (position.row as usize) < self.size
            && (position.col as usize) < self.size
    }

    /// Tile at `position`, or [`Tile::Unknown`] outside the window.
    pub fn tile(&self, position: Position) -> Tile {
        if !self.contains(position) {
            return Tile::Unknown;
        }
        self.cells[self.index(position)]
    }

    /// First cell (row-major) holding `tile`.
    pub fn find(&self, tile: Tile) -> Option<Position> {
        self.cells
            .iter()
            .position(|cell| *cell == tile)
            .map(|index| self.position_of(index))
    }

    /// All cells with their positions, row-major.
    pub fn cells(&self) -> impl Iterator<Item = (Position, Tile)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(index, tile)| (self.position_of(index), *tile))
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> {
        self.cells.chunks(self.size)
    }

    fn index(&self, position: Position) -> usize {
        position.row as usize * self.size + position.col as usize
    }

    fn position_of(&self, index: usize) -> Position {
        Position::new((index / self.size) as i32, (index % self.size) as i32)
    }
}

impl fmt::Display for LocalView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for tile in row {
                write!(f, "{}", tile.glyph())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
