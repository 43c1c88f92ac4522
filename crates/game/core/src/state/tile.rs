/// Static terrain stored in the authoritative dungeon map.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Terrain {
    Floor,
    Wall,
    Gold,
    Exit,
}

impl Terrain {
    pub const fn glyph(self) -> char {
        match self {
            Terrain::Floor => '.',
            Terrain::Wall => '#',
            Terrain::Gold => 'G',
            Terrain::Exit => 'E',
        }
    }

    pub const fn from_glyph(glyph: char) -> Option<Self> {
        match glyph {
            '.' => Some(Terrain::Floor),
            '#' => Some(Terrain::Wall),
            'G' => Some(Terrain::Gold),
            'E' => Some(Terrain::Exit),
            _ => None,
        }
    }

    pub const fn is_passable(self) -> bool {
        !matches!(self, Terrain::Wall)
    }
}

/// Classification of a single look-window cell.
///
/// `Unknown` never appears inside a captured window; it is what a lookup
/// outside the window (or into a window not yet captured) yields.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Tile {
    Floor,
    Gold,
    Exit,
    Wall,
    /// The human explorer's marker.
    Explorer,
    /// The pursuer's marker (only shown to the explorer).
    Bot,
    Unknown,
}

impl Tile {
    pub const fn glyph(self) -> char {
        match self {
            Tile::Floor => '.',
            Tile::Gold => 'G',
            Tile::Exit => 'E',
            Tile::Wall => '#',
            Tile::Explorer => 'P',
            Tile::Bot => 'B',
            Tile::Unknown => '?',
        }
    }

    /// Parses a window glyph. `?` is rejected because unknown cells are
    /// never stored.
    pub const fn from_glyph(glyph: char) -> Option<Self> {
        match glyph {
            '.' => Some(Tile::Floor),
            'G' => Some(Tile::Gold),
            'E' => Some(Tile::Exit),
            '#' => Some(Tile::Wall),
            'P' => Some(Tile::Explorer),
            'B' => Some(Tile::Bot),
            _ => None,
        }
    }

    pub const fn is_wall(self) -> bool {
        matches!(self, Tile::Wall)
    }

    pub const fn is_unknown(self) -> bool {
        matches!(self, Tile::Unknown)
    }
}

impl From<Terrain> for Tile {
    fn from(terrain: Terrain) -> Self {
        match terrain {
            Terrain::Floor => Tile::Floor,
            Terrain::Wall => Tile::Wall,
            Terrain::Gold => Tile::Gold,
            Terrain::Exit => Tile::Exit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terrain_glyphs_round_trip() {
        for terrain in [Terrain::Floor, Terrain::Wall, Terrain::Gold, Terrain::Exit] {
            assert_eq!(Terrain::from_glyph(terrain.glyph()), Some(terrain));
        }
        assert_eq!(Terrain::from_glyph('P'), None);
    }

    #[test]
    fn unknown_glyph_is_not_parseable() {
        assert_eq!(Tile::from_glyph('?'), None);
        assert!(Tile::Unknown.is_unknown());
        assert!(!Tile::Unknown.is_wall());
    }

    #[test]
    fn terrain_converts_to_matching_tile() {
        assert_eq!(Tile::from(Terrain::Gold), Tile::Gold);
        assert_eq!(Tile::from(Terrain::Exit), Tile::Exit);
        assert_eq!(Tile::from(Terrain::Wall), Tile::Wall);
    }
}
