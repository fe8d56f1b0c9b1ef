use crate::Error;
use crate::normalize::Token;
use std::fmt;
use std::str::FromStr;

/// A short driver code such as `VER`, stored upper-case.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DriverCode(String);

impl DriverCode {
    pub const MAX_LEN: usize = 3;

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for DriverCode {
    type Error = Error;

    fn try_from(raw: &str) -> Result<Self, Self::Error> {
        let code = raw.trim();
        let valid = !code.is_empty()
            && code.len() <= Self::MAX_LEN
            && code.chars().all(|c| c.is_ascii_alphanumeric());
        if valid {
            Ok(Self(code.to_ascii_uppercase()))
        } else {
            Err(Error::InvalidDriverCode(raw.to_owned()))
        }
    }
}

impl FromStr for DriverCode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}

impl fmt::Debug for DriverCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("DriverCode").field(&self.0).finish()
    }
}

impl fmt::Display for DriverCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SafetyCar {
    Yes,
    No,
}

impl TryFrom<&Token> for SafetyCar {
    type Error = Error;

    /// `"No"` is one of the absent sentinels, so an absent token reads as `No`.
    fn try_from(token: &Token) -> Result<Self, Self::Error> {
        match token.value() {
            None => Ok(SafetyCar::No),
            Some("yes") => Ok(SafetyCar::Yes),
            Some(other) => Err(Error::InvalidSafetyCar(other.to_owned())),
        }
    }
}

impl fmt::Display for SafetyCar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SafetyCar::Yes => f.write_str("Yes"),
            SafetyCar::No => f.write_str("No"),
        }
    }
}

/// Number of retirements in a race.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct DnfCount(pub u32);

impl TryFrom<&Token> for DnfCount {
    type Error = Error;

    /// `"0"` is one of the absent sentinels, so an absent token reads as zero.
    fn try_from(token: &Token) -> Result<Self, Self::Error> {
        match token.value() {
            None => Ok(DnfCount(0)),
            Some(raw) if raw.bytes().all(|b| b.is_ascii_digit()) => raw
                .parse()
                .map(DnfCount)
                .map_err(|_| Error::InvalidDnfCount(raw.to_owned())),
            Some(raw) => Err(Error::InvalidDnfCount(raw.to_owned())),
        }
    }
}

impl fmt::Display for DnfCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
