use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// String form of [`Token::Absent`].
pub const NONE_TOKEN: &str = "none";

/// Raw values that all mean "nothing predicted" or "nothing happened".
const NONE_SENTINELS: [&str; 5] = ["", "0", "none", "-", "no"];

/// A raw value after normalization.
///
/// Every "nothing" sentinel collapses into [`Token::Absent`] so equality on
/// tokens is the equality every comparison in the engine relies on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Token {
    #[default]
    Absent,
    Value(String),
}

impl Token {
    pub fn as_str(&self) -> &str {
        match self {
            Token::Absent => NONE_TOKEN,
            Token::Value(value) => value,
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Token::Absent)
    }

    pub fn value(&self) -> Option<&str> {
        match self {
            Token::Absent => None,
            Token::Value(value) => Some(value),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Token {
    fn from(raw: &str) -> Self {
        normalize(raw)
    }
}

impl Serialize for Token {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Token {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(normalize(raw.as_deref()))
    }
}

/// Canonicalize a raw value: trim, lower-case and fold every sentinel into
/// [`Token::Absent`].
///
/// ```
/// # use engine::{normalize, Token};
/// assert_eq!(normalize(" VER "), Token::Value("ver".into()));
/// assert_eq!(normalize("No"), Token::Absent);
/// assert_eq!(normalize(None), Token::Absent);
/// ```
pub fn normalize<'a>(raw: impl Into<Option<&'a str>>) -> Token {
    let Some(raw) = raw.into() else {
        return Token::Absent;
    };

    let canon = raw.trim().to_lowercase();
    if NONE_SENTINELS.contains(&canon.as_str()) {
        Token::Absent
    } else {
        Token::Value(canon)
    }
}
