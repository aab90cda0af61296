//! Airport code types.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Error returned when parsing an invalid airport code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid airport code {code:?}: {reason}")]
pub struct InvalidAirportCode {
    code: String,
    reason: &'static str,
}

/// An airport code such as `"PRG"` or `"WIW"`.
///
/// Codes are opaque to the planner: only exact equality matters, so `"prg"`
/// and `"PRG"` are different airports. Any non-empty string is a valid code.
///
/// # Examples
///
/// ```
/// use flight_planner::domain::AirportCode;
///
/// let prg = AirportCode::parse("PRG").unwrap();
/// assert_eq!(prg.as_str(), "PRG");
///
/// assert!(AirportCode::parse("").is_err());
/// assert!(AirportCode::parse("LON-C").is_ok());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AirportCode(String);

impl AirportCode {
    /// Parse an airport code exactly as given.
    pub fn parse(s: &str) -> Result<Self, InvalidAirportCode> {
        if s.is_empty() {
            return Err(InvalidAirportCode {
                code: s.to_string(),
                reason: "must not be empty",
            });
        }

        Ok(Self(s.to_string()))
    }

    /// Parse user input with surrounding whitespace trimmed. Case is kept.
    ///
    /// ```
    /// use flight_planner::domain::AirportCode;
    ///
    /// let code = AirportCode::parse_trimmed(" wiw ").unwrap();
    /// assert_eq!(code.as_str(), "wiw");
    /// ```
    pub fn parse_trimmed(s: &str) -> Result<Self, InvalidAirportCode> {
        Self::parse(s.trim())
    }

    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AirportCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AirportCode({})", self.0)
    }
}

impl fmt::Display for AirportCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for AirportCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for AirportCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        AirportCode::parse(&s).map_err(serde::de::Error::custom)
    }
}
