//! Strongly-typed ID wrappers for goals and alerts
//!
//! Ids are small positive integers on the wire (`"id": 3`). The newtypes keep
//! goal ids and alert ids from being mixed up at compile time.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

macro_rules! define_id {
    ($name:ident, $display_prefix:literal) => {
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(u32);

        impl $name {
            /// The first id handed out in an empty collection
            pub const FIRST: Self = Self(1);

            pub const fn new(value: u32) -> Self {
                Self(value)
            }

            pub const fn value(&self) -> u32 {
                self.0
            }

            /// The id following this one
            pub const fn next(&self) -> Self {
                Self(self.0.saturating_add(1))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u32> for $name {
            fn from(value: u32) -> Self {
                Self(value)
            }
        }

        impl FromStr for $name {
            type Err = ParseIntError;

            /// Accepts `3` as well as the prefixed form `goal-3` / `alert-3`
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.trim();
                let s = s.strip_prefix($display_prefix).unwrap_or(s);
                Ok(Self(s.parse()?))
            }
        }
    };
}

define_id!(GoalId, "goal-");
define_id!(AlertId, "alert-");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next() {
        assert_eq!(GoalId::FIRST.next(), GoalId::new(2));
        assert_eq!(AlertId::new(u32::MAX).next(), AlertId::new(u32::MAX));
    }

    #[test]
    fn test_parse_with_and_without_prefix() {
        assert_eq!("4".parse::<GoalId>().unwrap(), GoalId::new(4));
        assert_eq!("goal-4".parse::<GoalId>().unwrap(), GoalId::new(4));
        assert_eq!("alert-2".parse::<AlertId>().unwrap(), AlertId::new(2));
        assert!("goal-x".parse::<GoalId>().is_err());
    }

    #[test]
    fn test_serializes_as_number() {
        assert_eq!(serde_json::to_string(&AlertId::new(7)).unwrap(), "7");
        let id: GoalId = serde_json::from_str("12").unwrap();
        assert_eq!(id.value(), 12);
    }
}
