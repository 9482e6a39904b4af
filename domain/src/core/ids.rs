//! Typed identifiers for marketplace entities.
//!
//! Surrogate ids are assigned by the persistence layer. Wrapping them in
//! newtypes keeps a `ProfileId` from being passed where a `ProposalId` is
//! expected, which matters in a codebase whose commands juggle several ids
//! per request.

use serde::{Deserialize, Serialize};

macro_rules! entity_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            pub fn new(id: u64) -> Self {
                Self(id)
            }

            pub fn value(&self) -> u64 {
                self.0
            }
        }

        impl From<u64> for $name {
            fn from(id: u64) -> Self {
                Self(id)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::str::FromStr for $name {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.parse::<u64>().map(Self)
            }
        }
    };
}

entity_id! {
    /// Unique identifier for a [`Profile`](crate::Profile).
    ProfileId
}

entity_id! {
    /// Unique identifier for a [`Proposal`](crate::Proposal).
    ProposalId
}

entity_id! {
    /// Unique identifier for a [`Vote`](crate::Vote).
    VoteId
}

entity_id! {
    /// Unique identifier for a [`Setting`](crate::Setting).
    SettingId
}

entity_id! {
    /// Identifier of the market a setting is scoped to.
    ///
    /// Markets are an external collaborator in this slice; the id is carried
    /// as an opaque scope, never resolved to an entity.
    MarketId
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_display_and_parse() {
        let id: ProfileId = "42".parse().unwrap();
        assert_eq!(id, ProfileId::new(42));
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn test_id_parse_rejects_garbage() {
        assert!("abc".parse::<ProposalId>().is_err());
        assert!("-1".parse::<ProposalId>().is_err());
    }

    #[test]
    fn test_id_serde_is_transparent() {
        let json = serde_json::to_string(&SettingId::new(7)).unwrap();
        assert_eq!(json, "7");
        let back: SettingId = serde_json::from_str("7").unwrap();
        assert_eq!(back, SettingId::new(7));
    }
}
