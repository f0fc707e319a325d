//! Playing positions.

use crate::error::NuflError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A player's position, as offered by the admin player form.
///
/// # Examples
///
/// ```rust
/// use nufl::Position;
///
/// let gk: Position = "gk".parse().unwrap();
/// assert_eq!(gk, Position::Goalkeeper);
/// assert_eq!(gk.to_string(), "Goalkeeper");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Position {
    Goalkeeper,
    Defender,
    Midfielder,
    Forward,
}

impl Position {
    pub const ALL: [Position; 4] = [
        Position::Goalkeeper,
        Position::Defender,
        Position::Midfielder,
        Position::Forward,
    ];

    /// Short label used in squad listings.
    pub fn abbreviation(&self) -> &'static str {
        match self {
            Position::Goalkeeper => "GK",
            Position::Defender => "DEF",
            Position::Midfielder => "MID",
            Position::Forward => "FWD",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Position::Goalkeeper => "Goalkeeper",
            Position::Defender => "Defender",
            Position::Midfielder => "Midfielder",
            Position::Forward => "Forward",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Position {
    type Err = NuflError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "GOALKEEPER" | "GK" | "KEEPER" => Ok(Position::Goalkeeper),
            "DEFENDER" | "DEF" | "DF" => Ok(Position::Defender),
            "MIDFIELDER" | "MID" | "MF" => Ok(Position::Midfielder),
            "FORWARD" | "FWD" | "FW" | "STRIKER" => Ok(Position::Forward),
            _ => Err(NuflError::InvalidPosition {
                position: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_string_conversion() {
        for position in Position::ALL {
            assert_eq!(position.to_string().parse::<Position>().unwrap(), position);
        }
        assert_eq!("def".parse::<Position>().unwrap(), Position::Defender);
        assert_eq!("MF".parse::<Position>().unwrap(), Position::Midfielder);
        assert_eq!("striker".parse::<Position>().unwrap(), Position::Forward);
    }

    #[test]
    fn test_invalid_position() {
        match "Libero".parse::<Position>() {
            Err(NuflError::InvalidPosition { position }) => assert_eq!(position, "Libero"),
            other => panic!("Expected InvalidPosition, got {:?}", other),
        }
    }

    #[test]
    fn test_position_serializes_as_api_label() {
        assert_eq!(
            serde_json::to_string(&Position::Midfielder).unwrap(),
            "\"Midfielder\""
        );
        assert_eq!(Position::Goalkeeper.abbreviation(), "GK");
    }
}
