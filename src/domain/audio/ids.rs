//! Sound server object identifiers
//!
//! The server hands out plain integer indices for sinks, sink inputs and
//! modules. Each gets its own newtype so a stream index can never be passed
//! where a sink index is expected.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

macro_rules! server_index {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(u32);

        impl $name {
            pub const fn new(index: u32) -> Self {
                Self(index)
            }

            pub const fn get(&self) -> u32 {
                self.0
            }
        }

        impl From<u32> for $name {
            fn from(index: u32) -> Self {
                Self(index)
            }
        }

        impl FromStr for $name {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim().parse().map(Self)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

server_index!(
    /// Index of a sink (output device or virtual sink)
    SinkId
);

server_index!(
    /// Index of a sink input (one application's stream)
    StreamId
);

server_index!(
    /// Index of a loaded server module
    ModuleId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_plain_index() {
        assert_eq!(SinkId::new(77).to_string(), "77");
        assert_eq!(StreamId::new(1).to_string(), "1");
        assert_eq!(ModuleId::new(536870913).to_string(), "536870913");
    }

    #[test]
    fn parses_trimmed_index() {
        assert_eq!("111\n".parse::<ModuleId>().unwrap(), ModuleId::new(111));
        assert!("abc".parse::<ModuleId>().is_err());
        assert!("-1".parse::<SinkId>().is_err());
    }

    #[test]
    fn deserializes_from_bare_number() {
        let id: SinkId = serde_json::from_str("42").unwrap();
        assert_eq!(id.get(), 42);
    }
}
