//! Move rules: one configuration and a direction in, the next configuration out.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{board::Configuration, tile::Tile};
use crate::{Error, Result};

/// A cardinal move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Down,
    Up,
    Right,
}

impl Direction {
    /// Canonical edge order: left, down, up, right.
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Down,
        Direction::Up,
        Direction::Right,
    ];

    /// Unit delta as (dx, dy), with y growing downwards.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Left => (-1, 0),
            Direction::Down => (0, 1),
            Direction::Up => (0, -1),
            Direction::Right => (1, 0),
        }
    }

    /// Position in [`Direction::ALL`] and in every state's edge array.
    pub fn index(self) -> usize {
        match self {
            Direction::Left => 0,
            Direction::Down => 1,
            Direction::Up => 2,
            Direction::Right => 3,
        }
    }

    /// Accepts vi keys (`hjkl`) and initials (`L`, `D`, `U`, `R`).
    pub fn from_char(c: char) -> Option<Direction> {
        match c {
            'h' | 'L' => Some(Direction::Left),
            'j' | 'D' => Some(Direction::Down),
            'k' | 'U' => Some(Direction::Up),
            'l' | 'R' => Some(Direction::Right),
            _ => None,
        }
    }

    /// Arrow glyph used on navigation links.
    pub fn arrow(self) -> char {
        match self {
            Direction::Left => '<',
            Direction::Down => 'v',
            Direction::Up => '^',
            Direction::Right => '>',
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Left => write!(f, "left"),
            Direction::Down => write!(f, "down"),
            Direction::Up => write!(f, "up"),
            Direction::Right => write!(f, "right"),
        }
    }
}

/// Transient message texts and the level at which hints stop.
///
/// Pit hints taper off on later levels: at `hint_threshold` and above the
/// pit warning and pit-filled messages are suppressed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MessagePolicy {
    pub hint_threshold: usize,
    pub descend: String,
    pub pit_warning: String,
    pub pit_filled: String,
}

impl Default for MessagePolicy {
    fn default() -> Self {
        Self {
            hint_threshold: 6,
            descend: "You descend the stairs... (Press any key.)".to_string(),
            pit_warning: "You narrowly avoid falling into a deep pit!".to_string(),
            pit_filled: "The boulder fills in the pit!".to_string(),
        }
    }
}

impl MessagePolicy {
    pub fn with_hint_threshold(mut self, threshold: usize) -> Self {
        self.hint_threshold = threshold;
        self
    }

    /// The hint text if `level` is still below the threshold, else empty.
    pub fn hint(&self, level: usize, text: &str) -> String {
        if level < self.hint_threshold {
            text.to_string()
        } else {
            String::new()
        }
    }

    pub fn messages(&self) -> [&str; 3] {
        [&self.descend, &self.pit_warning, &self.pit_filled]
    }
}

/// Sequential supply of pickup messages.
///
/// Each collectible step taken by the explorer consumes the next message, so
/// assignment follows discovery order rather than board location. A level
/// must therefore let each collectible be picked up from exactly one
/// configuration: if two configurations (different player approach, boulder
/// arrangement or pending message) can step onto the same collectible, every
/// one of them consumes a message.
#[derive(Debug, Clone)]
pub struct PickupLedger<'a> {
    messages: &'a [String],
    consumed: usize,
}

impl<'a> PickupLedger<'a> {
    pub fn new(messages: &'a [String]) -> Self {
        Self {
            messages,
            consumed: 0,
        }
    }

    pub fn consumed(&self) -> usize {
        self.consumed
    }

    pub fn remaining(&self) -> usize {
        self.messages.len() - self.consumed
    }

    fn take(&mut self) -> Option<&'a str> {
        let message = self.messages.get(self.consumed)?;
        self.consumed += 1;
        Some(message)
    }
}

/// Result of a single move
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub configuration: Configuration,
    /// The player took the stairs; `configuration.level` is the next level.
    pub advanced: bool,
}

impl Step {
    fn within(configuration: Configuration) -> Self {
        Self {
            configuration,
            advanced: false,
        }
    }

    fn blocked(from: &Configuration, message: impl Into<String>) -> Self {
        Self::within(from.with_message(message))
    }
}

/// Apply one move to `config`.
///
/// Cells outside the board behave like walls.
///
/// # Errors
///
/// Returns [`Error::MissingPlayer`] if the field has no player and
/// [`Error::PickupMessagesExhausted`] if a collectible is taken after the
/// ledger ran dry.
///
/// # Examples
///
/// ```
/// use descent::puzzle::{Configuration, Direction, MessagePolicy, PickupLedger, step};
///
/// let config = Configuration::decode("0||@0^")?;
/// let policy = MessagePolicy::default();
/// let mut ledger = PickupLedger::new(&[]);
///
/// let next = step(&config, 3, Direction::Right, &policy, &mut ledger)?;
/// assert_eq!(next.configuration.field(), ".@.");
/// assert_eq!(next.configuration.message, policy.pit_filled);
/// # Ok::<(), descent::Error>(())
/// ```
pub fn step(
    config: &Configuration,
    width: usize,
    direction: Direction,
    policy: &MessagePolicy,
    ledger: &mut PickupLedger<'_>,
) -> Result<Step> {
    let start = config.player_index().ok_or_else(|| Error::MissingPlayer {
        configuration: config.encode(),
    })?;
    let grid = Grid::new(width, config.tiles.len());

    let Some(target) = grid.neighbor(start, direction) else {
        return Ok(Step::blocked(config, ""));
    };

    match config.tiles[target] {
        Tile::Stairs => Ok(Step {
            configuration: Configuration::new(
                config.level + 1,
                policy.descend.clone(),
                walk(&config.tiles, start, target),
            ),
            advanced: true,
        }),
        Tile::Wall => Ok(Step::blocked(config, "")),
        Tile::Pit => Ok(Step::blocked(
            config,
            policy.hint(config.level, &policy.pit_warning),
        )),
        Tile::Boulder => {
            let beyond = grid
                .neighbor(target, direction)
                .map(|index| (index, config.tiles[index]));

            match beyond {
                Some((beyond, Tile::Floor)) => {
                    let mut tiles = walk(&config.tiles, start, target);
                    tiles[beyond] = Tile::Boulder;
                    Ok(Step::within(Configuration::new(config.level, "", tiles)))
                }
                Some((beyond, Tile::Pit)) => {
                    let mut tiles = walk(&config.tiles, start, target);
                    tiles[beyond] = Tile::Floor;
                    Ok(Step::within(Configuration::new(
                        config.level,
                        policy.hint(config.level, &policy.pit_filled),
                        tiles,
                    )))
                }
                _ => Ok(Step::blocked(config, "")),
            }
        }
        Tile::Floor => Ok(Step::within(Configuration::new(
            config.level,
            "",
            walk(&config.tiles, start, target),
        ))),
        Tile::Collectible => {
            let message = ledger
                .take()
                .ok_or_else(|| Error::PickupMessagesExhausted {
                    consumed: ledger.consumed(),
                    configuration: config.encode(),
                })?;
            Ok(Step::within(Configuration::new(
                config.level,
                message,
                walk(&config.tiles, start, target),
            )))
        }
        Tile::Player => Ok(Step::blocked(config, "")),
    }
}

/// Step in every direction, in [`Direction::ALL`] order.
pub fn successors(
    config: &Configuration,
    width: usize,
    policy: &MessagePolicy,
    ledger: &mut PickupLedger<'_>,
) -> Result<[Step; 4]> {
    let [left, down, up, right] = Direction::ALL;
    Ok([
        step(config, width, left, policy, ledger)?,
        step(config, width, down, policy, ledger)?,
        step(config, width, up, policy, ledger)?,
        step(config, width, right, policy, ledger)?,
    ])
}

/// Field dimensions for neighbour lookups.
#[derive(Debug, Clone, Copy)]
struct Grid {
    width: usize,
    height: usize,
}

impl Grid {
    fn new(width: usize, len: usize) -> Self {
        let width = width.max(1);
        Self {
            width,
            height: len / width,
        }
    }

    fn neighbor(&self, index: usize, direction: Direction) -> Option<usize> {
        let (dx, dy) = direction.delta();
        let x = (index % self.width) as isize + dx;
        let y = (index / self.width) as isize + dy;
        if x < 0 || y < 0 || x >= self.width as isize || y >= self.height as isize {
            return None;
        }
        Some(y as usize * self.width + x as usize)
    }
}

/// Move the player from `from` to `to`, leaving floor behind.
fn walk(tiles: &[Tile], from: usize, to: usize) -> Vec<Tile> {
    let mut tiles = tiles.to_vec();
    tiles[from] = Tile::Floor;
    tiles[to] = Tile::Player;
    tiles
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(key: &str, width: usize, direction: Direction) -> Step {
        let config = Configuration::decode(key).unwrap();
        let mut ledger = PickupLedger::new(&[]);
        step(&config, width, direction, &MessagePolicy::default(), &mut ledger).unwrap()
    }

    #[test]
    fn neighbours_do_not_wrap_rows() {
        let grid = Grid::new(3, 6);
        assert_eq!(grid.neighbor(2, Direction::Right), None);
        assert_eq!(grid.neighbor(3, Direction::Left), None);
        assert_eq!(grid.neighbor(1, Direction::Up), None);
        assert_eq!(grid.neighbor(4, Direction::Down), None);
        assert_eq!(grid.neighbor(1, Direction::Down), Some(4));
    }

    #[test]
    fn off_board_behaves_like_a_wall() {
        let next = run("0|old|@.>", 3, Direction::Left);
        assert_eq!(next.configuration.field(), "@.>");
        assert!(next.configuration.message.is_empty());
        assert!(!next.advanced);
    }

    #[test]
    fn stairs_take_precedence_and_advance_the_level() {
        let next = run("3||.@>", 3, Direction::Right);
        assert!(next.advanced);
        assert_eq!(next.configuration.level, 4);
        assert_eq!(next.configuration.field(), "..@");
        assert_eq!(
            next.configuration.message,
            MessagePolicy::default().descend
        );
    }

    #[test]
    fn boulder_is_pushed_onto_floor() {
        let next = run("0||@0.", 3, Direction::Right);
        assert_eq!(next.configuration.field(), ".@0");
        assert!(next.configuration.message.is_empty());
    }

    #[test]
    fn boulder_cannot_be_pushed_off_the_board() {
        let next = run("0||.@0", 3, Direction::Right);
        assert_eq!(next.configuration.field(), ".@0");
    }

    #[test]
    fn boulder_cannot_be_pushed_onto_collectibles() {
        let next = run("0||@0$", 3, Direction::Right);
        assert_eq!(next.configuration.field(), "@0$");
    }

    #[test]
    fn pit_hint_is_suppressed_at_threshold() {
        let policy = MessagePolicy::default().with_hint_threshold(2);
        let mut ledger = PickupLedger::new(&[]);
        let below = Configuration::decode("1||@^").unwrap();
        let at = Configuration::decode("2||@^").unwrap();

        let warned = step(&below, 2, Direction::Right, &policy, &mut ledger).unwrap();
        let silent = step(&at, 2, Direction::Right, &policy, &mut ledger).unwrap();
        assert_eq!(warned.configuration.message, policy.pit_warning);
        assert!(silent.configuration.message.is_empty());
        assert_eq!(silent.configuration.field(), "@^");
    }

    #[test]
    fn exhausted_ledger_is_an_error() {
        let config = Configuration::decode("0||@$").unwrap();
        let mut ledger = PickupLedger::new(&[]);
        let err = step(
            &config,
            2,
            Direction::Right,
            &MessagePolicy::default(),
            &mut ledger,
        )
        .unwrap_err();
        assert!(matches!(err, Error::PickupMessagesExhausted { consumed: 0, .. }));
    }

    #[test]
    fn missing_player_is_an_error() {
        let config = Configuration::decode("0||..>").unwrap();
        let mut ledger = PickupLedger::new(&[]);
        assert!(matches!(
            step(&config, 3, Direction::Left, &MessagePolicy::default(), &mut ledger),
            Err(Error::MissingPlayer { .. })
        ));
    }

    #[test]
    fn successors_follow_canonical_order() {
        // . . .
        // . @ $
        // . > .
        let config = Configuration::decode("0||....@$.>.").unwrap();
        let messages = vec!["gold".to_string()];
        let mut ledger = PickupLedger::new(&messages);
        let [left, down, up, right] =
            successors(&config, 3, &MessagePolicy::default(), &mut ledger).unwrap();

        assert_eq!(left.configuration.field(), "...@.$.>.");
        assert!(down.advanced);
        assert_eq!(up.configuration.field(), ".@...$.>.");
        assert_eq!(right.configuration.field(), ".....@.>.");
        assert_eq!(right.configuration.message, "gold");
        assert_eq!(ledger.consumed(), 1);
        assert_eq!(ledger.remaining(), 0);
    }
}
