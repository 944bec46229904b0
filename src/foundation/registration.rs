//! Registration kinds tracked by a unit of work.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The ways a domain object can be registered with a unit of work.
///
/// `Added` and `Reconstituted` are mutually exclusive for one object.
/// `Removed` may overlap with `Reconstituted`: a loaded object scheduled
/// for deletion holds both registrations until commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Registration {
    /// Pending first-time persistence.
    Added,
    /// Pending deletion from the backing store.
    Removed,
    /// Materialized from the backing store.
    Reconstituted,
}

impl fmt::Display for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Registration::Added => "added",
            Registration::Removed => "removed",
            Registration::Reconstituted => "reconstituted",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_as_lowercase_word() {
        assert_eq!(Registration::Added.to_string(), "added");
        assert_eq!(Registration::Removed.to_string(), "removed");
        assert_eq!(Registration::Reconstituted.to_string(), "reconstituted");
    }

    #[test]
    fn serializes_as_snake_case() {
        let json = serde_json::to_string(&Registration::Reconstituted).unwrap();
        assert_eq!(json, "\"reconstituted\"");
    }
}
