//! Error types for the descent crate

use thiserror::Error;

/// Main error type for the descent crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("campaign has no levels")]
    EmptyCampaign,

    #[error("level {level}: width must be at least 1")]
    ZeroWidth { level: usize },

    #[error("level {level}: layout has no tiles")]
    EmptyLevel { level: usize },

    #[error("level {level}: {len} tiles is not a multiple of width {width}")]
    RaggedLevel {
        level: usize,
        width: usize,
        len: usize,
    },

    #[error("level {level}: invalid tile '{character}' at position {position}")]
    InvalidTile {
        level: usize,
        character: char,
        position: usize,
    },

    #[error("level {level}: expected exactly one player '@', found {found}")]
    PlayerCount { level: usize, found: usize },

    #[error("expected {expected} intro messages (one per level), found {found}")]
    MessageCountMismatch { expected: usize, found: usize },

    #[error("campaign has {collectibles} collectibles but only {messages} pickup messages")]
    InsufficientPickupMessages { collectibles: usize, messages: usize },

    #[error("message contains the reserved delimiter '|': '{message}'")]
    ReservedDelimiter { message: String },

    #[error("malformed configuration key '{key}': {reason}")]
    MalformedKey { key: String, reason: String },

    #[error("no player on the board in configuration '{configuration}'")]
    MissingPlayer { configuration: String },

    #[error("level {level} does not exist in this campaign")]
    UnknownLevel { level: usize },

    #[error(
        "state space exceeded {limit} states while exploring level {level} at '{configuration}'"
    )]
    StateSpaceExceeded {
        limit: usize,
        level: usize,
        configuration: String,
    },

    #[error(
        "pickup messages exhausted after {consumed} pickups at '{configuration}' \
         (a collectible is reachable from more than one configuration)"
    )]
    PickupMessagesExhausted {
        consumed: usize,
        configuration: String,
    },

    #[error("internal consistency error: edge from '{from}' to undiscovered '{to}'")]
    DanglingEdge { from: String, to: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("progress bar template error: {message}")]
    ProgressBarTemplate { message: String },
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
