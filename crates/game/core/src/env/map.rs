use std::fmt;

use super::MapError;
use crate::state::{Position, Terrain};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapDimensions {
    pub height: u32,
    pub width: u32,
}

impl MapDimensions {
    pub const fn new(height: u32, width: u32) -> Self {
        Self { height, width }
    }

    pub fn contains(&self, position: Position) -> bool {
        position.row >= 0
            && position.col >= 0
            && position.row < self.height as i32
            && position.col < self.width as i32
    }
}

/// Authoritative dungeon layout.
///
/// Only the engine mutates it (gold pickup); participants see it through
/// [`super::LocalView`] copies.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DungeonMap {
    name: String,
    gold_required: u32,
    dimensions: MapDimensions,
    tiles: Vec<Terrain>,
}

impl DungeonMap {
    /// Builds a map from terrain rows, validating shape and content.
    pub fn new(
        name: impl Into<String>,
        gold_required: u32,
        rows: Vec<Vec<Terrain>>,
    ) -> Result<Self, MapError> {
        let width = rows.first().map(Vec::len).ok_or(MapError::Empty)?;
        if width == 0 {
            return Err(MapError::Empty);
        }

        let mut tiles = Vec::with_capacity(rows.len() * width);
        for (row, terrain) in rows.iter().enumerate() {
            if terrain.len() != width {
                return Err(MapError::NotRectangular {
                    row,
                    expected: width,
                    found: terrain.len(),
                });
            }
            tiles.extend_from_slice(terrain);
        }

        if !tiles.iter().any(|terrain| *terrain == Terrain::Floor) {
            return Err(MapError::NoOpenTile);
        }

        Ok(Self {
            name: name.into(),
            gold_required,
            dimensions: MapDimensions::new(rows.len() as u32, width as u32),
            tiles,
        })
    }

    /// Builds a map from glyph rows (`#`, `.`, `G`, `E`).
    pub fn from_glyphs<S: AsRef<str>>(
        name: impl Into<String>,
        gold_required: u32,
        rows: &[S],
    ) -> Result<Self, MapError> {
        let mut parsed = Vec::with_capacity(rows.len());
        for (row, line) in rows.iter().enumerate() {
            let mut terrain = Vec::new();
            for (col, glyph) in line.as_ref().chars().enumerate() {
                terrain.push(Terrain::from_glyph(glyph).ok_or(MapError::UnknownGlyph {
                    glyph,
                    position: Position::new(row as i32, col as i32),
                })?);
            }
            parsed.push(terrain);
        }
        Self::new(name, gold_required, parsed)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn gold_required(&self) -> u32 {
        self.gold_required
    }

    pub fn dimensions(&self) -> MapDimensions {
        self.dimensions
    }

    pub fn contains(&self, position: Position) -> bool {
        self.dimensions.contains(position)
    }

    /// Terrain at `position`, `None` off the map.
    pub fn terrain(&self, position: Position) -> Option<Terrain> {
        self.index(position).map(|index| self.tiles[index])
    }

    /// Replaces gold at `position` with floor. Returns whether gold was there.
    pub fn remove_gold(&mut self, position: Position) -> bool {
        match self.index(position) {
            Some(index) if self.tiles[index] == Terrain::Gold => {
                self.tiles[index] = Terrain::Floor;
                true
            }
            _ => false,
        }
    }

    /// Every position on the map, row-major.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        let width = self.dimensions.width as i32;
        (0..self.tiles.len() as i32).map(move |index| Position::new(index / width, index % width))
    }

    fn index(&self, position: Position) -> Option<usize> {
        self.contains(position)
            .then(|| position.row as usize * self.dimensions.width as usize + position.col as usize)
    }
}

impl fmt::Display for DungeonMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.tiles.chunks(self.dimensions.width as usize) {
            for terrain in row {
                write!(f, "{}", terrain.glyph())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rectangular_layout() {
        let map = DungeonMap::from_glyphs("tiny", 1, &["#####", "#.G.#", "#..E#", "#####"]).unwrap();
        assert_eq!(map.dimensions(), MapDimensions::new(4, 5));
        assert_eq!(map.terrain(Position::new(1, 2)), Some(Terrain::Gold));
        assert_eq!(map.terrain(Position::new(2, 3)), Some(Terrain::Exit));
        assert_eq!(map.terrain(Position::new(4, 0)), None);
        assert_eq!(map.to_string(), "#####\n#.G.#\n#..E#\n#####\n");
    }

    #[test]
    fn rejects_ragged_rows() {
        let err = DungeonMap::from_glyphs("ragged", 0, &["###", "#.", "###"]).unwrap_err();
        assert_eq!(
            err,
            MapError::NotRectangular {
                row: 1,
                expected: 3,
                found: 2
            }
        );
    }

    #[test]
    fn rejects_maps_without_floor() {
        let err = DungeonMap::from_glyphs("solid", 0, &["###", "#G#", "###"]).unwrap_err();
        assert_eq!(err, MapError::NoOpenTile);
        assert_eq!(
            DungeonMap::from_glyphs::<&str>("none", 0, &[]).unwrap_err(),
            MapError::Empty
        );
    }

    #[test]
    fn removing_gold_leaves_floor() {
        let mut map = DungeonMap::from_glyphs("gold", 1, &["G."]).unwrap();
        assert!(map.remove_gold(Position::new(0, 0)));
        assert!(!map.remove_gold(Position::new(0, 0)));
        assert_eq!(map.terrain(Position::new(0, 0)), Some(Terrain::Floor));
    }
}
