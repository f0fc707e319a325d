//! ID types for league records.
//!
//! Every record is identified by a server-assigned integer. The wrappers keep
//! a team id from being passed where a fixture id is expected.

use crate::error::{NuflError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

macro_rules! record_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub u64);

        impl $name {
            pub fn new(id: u64) -> Self {
                Self(id)
            }

            pub fn as_u64(&self) -> u64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<$name> for u64 {
            fn from(id: $name) -> u64 {
                id.0
            }
        }

        impl FromStr for $name {
            type Err = NuflError;

            fn from_str(s: &str) -> Result<Self> {
                Ok(Self(s.trim().parse()?))
            }
        }
    };
}

record_id!(
    /// Type-safe wrapper for team IDs.
    ///
    /// ```rust
    /// use nufl::TeamId;
    ///
    /// let id: TeamId = "7".parse().unwrap();
    /// assert_eq!(id, TeamId::new(7));
    /// assert_eq!(id.to_string(), "7");
    /// ```
    TeamId
);
record_id!(
    /// Type-safe wrapper for player IDs.
    PlayerId
);
record_id!(
    /// Type-safe wrapper for fixture IDs. The public pages also call this the
    /// matchweek.
    FixtureId
);
record_id!(
    /// Type-safe wrapper for news article IDs.
    NewsId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_parse_and_display() {
        assert_eq!("12".parse::<TeamId>().unwrap().as_u64(), 12);
        assert_eq!(" 3 ".parse::<FixtureId>().unwrap(), FixtureId::new(3));
        assert_eq!(PlayerId::new(99).to_string(), "99");
        assert!("abc".parse::<NewsId>().is_err());
        assert!("-1".parse::<TeamId>().is_err());
    }

    #[test]
    fn test_ids_serialize_transparently() {
        let json = serde_json::to_string(&TeamId::new(5)).unwrap();
        assert_eq!(json, "5");

        let id: FixtureId = serde_json::from_str("42").unwrap();
        assert_eq!(id, FixtureId::new(42));
    }
}
