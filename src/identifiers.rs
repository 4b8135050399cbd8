//! Identifier types for discovered states.
//!
//! A state is known by two names: its canonical configuration string, which is
//! the deduplication key, and the integer id the builder hands out in
//! discovery order.

use std::{borrow::Borrow, fmt};

use serde::{Deserialize, Serialize};

/// Canonical configuration string (`"level|message|field"`).
///
/// Two configurations are the same state iff their keys are identical.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct StateKey(String);

impl StateKey {
    /// Create a new state key.
    ///
    /// # Examples
    ///
    /// ```
    /// use descent::identifiers::StateKey;
    ///
    /// let key = StateKey::new("0||#@.>#");
    /// assert_eq!(key.as_str(), "0||#@.>#");
    /// ```
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Get the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert the key into its inner String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for StateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl PartialEq<&str> for StateKey {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl Borrow<str> for StateKey {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl From<String> for StateKey {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for StateKey {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl AsRef<str> for StateKey {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// Sequential id assigned to a state on first discovery. The first state is 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct StateId(u32);

impl StateId {
    /// The id of the first discovered state.
    pub const FIRST: StateId = StateId(1);

    pub fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u32 {
        self.0
    }

    /// Position of this state in discovery order (zero-based). Id 0 is never
    /// handed out and has no position.
    pub fn index(&self) -> Option<usize> {
        self.0.checked_sub(1).map(|i| i as usize)
    }

    pub fn next(&self) -> StateId {
        StateId(self.0 + 1)
    }

    /// Lowercase base-36 rendering, usable as a link fragment.
    ///
    /// # Examples
    ///
    /// ```
    /// use descent::identifiers::StateId;
    ///
    /// assert_eq!(StateId::new(1).anchor(), "1");
    /// assert_eq!(StateId::new(36).anchor(), "10");
    /// assert_eq!(StateId::new(1295).anchor(), "zz");
    /// ```
    pub fn anchor(&self) -> String {
        const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

        let mut n = self.0;
        if n == 0 {
            return "0".to_string();
        }
        let mut out = Vec::new();
        while n > 0 {
            out.push(DIGITS[(n % 36) as usize]);
            n /= 36;
        }
        out.reverse();
        out.into_iter().map(char::from).collect()
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<StateId> for u32 {
    fn from(id: StateId) -> Self {
        id.0
    }
}
