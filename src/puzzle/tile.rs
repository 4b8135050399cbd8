//! Tile alphabet

use std::fmt;

use serde::{Deserialize, Serialize};

/// A cell on a puzzle board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tile {
    Wall,
    Floor,
    Player,
    Boulder,
    /// Boulders fill pits; the player cannot enter one.
    Pit,
    Collectible,
    Stairs,
}

impl Tile {
    /// Every tile, in glyph order.
    pub const ALL: [Tile; 7] = [
        Tile::Wall,
        Tile::Floor,
        Tile::Player,
        Tile::Boulder,
        Tile::Pit,
        Tile::Collectible,
        Tile::Stairs,
    ];

    pub fn to_char(self) -> char {
        match self {
            Tile::Wall => '#',
            Tile::Floor => '.',
            Tile::Player => '@',
            Tile::Boulder => '0',
            Tile::Pit => '^',
            Tile::Collectible => '$',
            Tile::Stairs => '>',
        }
    }

    pub fn from_char(c: char) -> Option<Tile> {
        match c {
            '#' => Some(Tile::Wall),
            '.' => Some(Tile::Floor),
            '@' => Some(Tile::Player),
            '0' => Some(Tile::Boulder),
            '^' => Some(Tile::Pit),
            '$' => Some(Tile::Collectible),
            '>' => Some(Tile::Stairs),
            _ => None,
        }
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Render tiles as a flat field string.
pub fn field_string(tiles: &[Tile]) -> String {
    tiles.iter().map(|tile| tile.to_char()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glyphs_are_unique_and_avoid_the_delimiter() {
        let glyphs: std::collections::HashSet<char> =
            Tile::ALL.iter().map(|t| t.to_char()).collect();
        assert_eq!(glyphs.len(), Tile::ALL.len());
        assert!(!glyphs.contains(&'|'));
    }

    #[test]
    fn every_glyph_parses_back() {
        for tile in Tile::ALL {
            assert_eq!(Tile::from_char(tile.to_char()), Some(tile));
        }
        assert_eq!(Tile::from_char('x'), None);
        assert_eq!(Tile::from_char(' '), None);
    }
}
