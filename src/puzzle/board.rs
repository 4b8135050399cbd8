//! Board codec: authored layouts in, canonical configuration strings out.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::tile::{Tile, field_string};
use crate::{Error, Result, identifiers::StateKey};

/// Separates level index, message and field in a configuration key.
///
/// It is not a tile glyph and authored messages may not contain it.
pub const DELIMITER: char = '|';

/// A validated, rectangular level layout
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    width: usize,
    tiles: Vec<Tile>,
}

impl Board {
    /// Parse an authored layout. All whitespace is alignment and is dropped.
    ///
    /// `level` is only used to give errors context.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - `width` is zero or the layout has no tiles
    /// - The tile count is not a multiple of `width`
    /// - Any character is not in the tile alphabet
    /// - The board does not contain exactly one player
    ///
    /// # Examples
    ///
    /// ```
    /// use descent::puzzle::Board;
    ///
    /// let board = Board::parse(0, 5, "#####  #@.>#  #####")?;
    /// assert_eq!(board.height(), 3);
    /// assert_eq!(board.field(), "######@.>######");
    /// # Ok::<(), descent::Error>(())
    /// ```
    pub fn parse(level: usize, width: usize, layout: &str) -> Result<Self> {
        if width == 0 {
            return Err(Error::ZeroWidth { level });
        }

        let tiles = layout
            .chars()
            .filter(|c| !c.is_whitespace())
            .enumerate()
            .map(|(position, character)| {
                Tile::from_char(character).ok_or(Error::InvalidTile {
                    level,
                    character,
                    position,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        if tiles.is_empty() {
            return Err(Error::EmptyLevel { level });
        }
        if !tiles.len().is_multiple_of(width) {
            return Err(Error::RaggedLevel {
                level,
                width,
                len: tiles.len(),
            });
        }

        let players = tiles.iter().filter(|&&t| t == Tile::Player).count();
        if players != 1 {
            return Err(Error::PlayerCount {
                level,
                found: players,
            });
        }

        Ok(Board { width, tiles })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.tiles.len() / self.width
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Flat row-major field string.
    pub fn field(&self) -> String {
        field_string(&self.tiles)
    }

    /// Number of collectible tiles on the board.
    pub fn collectible_count(&self) -> usize {
        self.count(Tile::Collectible)
    }

    pub fn count(&self, tile: Tile) -> usize {
        self.tiles.iter().filter(|&&t| t == tile).count()
    }

    pub fn has_stairs(&self) -> bool {
        self.count(Tile::Stairs) > 0
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let field = self.field();
        for (i, row) in rows(&field, self.width).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{row}")?;
        }
        Ok(())
    }
}

/// One board instant: level index, transient message and field.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Configuration {
    pub level: usize,
    pub message: String,
    pub tiles: Vec<Tile>,
}

impl Configuration {
    pub fn new(level: usize, message: impl Into<String>, tiles: Vec<Tile>) -> Self {
        Self {
            level,
            message: message.into(),
            tiles,
        }
    }

    /// Canonical string form, `"{level}|{message}|{field}"`.
    ///
    /// # Examples
    ///
    /// ```
    /// use descent::puzzle::{Configuration, Tile};
    ///
    /// let config = Configuration::new(2, "hi", vec![Tile::Player, Tile::Stairs]);
    /// assert_eq!(config.encode(), "2|hi|@>");
    /// ```
    pub fn encode(&self) -> String {
        format!(
            "{}{DELIMITER}{}{DELIMITER}{}",
            self.level,
            self.message,
            self.field()
        )
    }

    pub fn key(&self) -> StateKey {
        StateKey::from(self.encode())
    }

    /// Exact inverse of [`Configuration::encode`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedKey`] when a part is missing, the level is
    /// not a number or the field contains an unknown glyph.
    pub fn decode(key: &str) -> Result<Self> {
        let malformed = |reason: &str| Error::MalformedKey {
            key: key.to_string(),
            reason: reason.to_string(),
        };

        let mut parts = key.splitn(3, DELIMITER);
        let level = parts.next().ok_or_else(|| malformed("missing level"))?;
        let message = parts.next().ok_or_else(|| malformed("missing message"))?;
        let field = parts.next().ok_or_else(|| malformed("missing field"))?;

        let level = level
            .parse::<usize>()
            .map_err(|_| malformed("level is not a number"))?;
        let tiles = field
            .chars()
            .map(Tile::from_char)
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| malformed("field contains an unknown tile"))?;

        Ok(Configuration::new(level, message, tiles))
    }

    pub fn field(&self) -> String {
        field_string(&self.tiles)
    }

    pub fn player_index(&self) -> Option<usize> {
        self.tiles.iter().position(|&t| t == Tile::Player)
    }

    /// Same field and level, different message.
    pub fn with_message(&self, message: impl Into<String>) -> Self {
        Self::new(self.level, message, self.tiles.clone())
    }
}

impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.encode())
    }
}

/// Split a flat field into rows of `width` characters.
pub fn rows(field: &str, width: usize) -> impl Iterator<Item = &str> {
    // Fields are ASCII, so byte chunks are char boundaries.
    field
        .as_bytes()
        .chunks(width.max(1))
        .map(|chunk| std::str::from_utf8(chunk).unwrap_or_default())
}
