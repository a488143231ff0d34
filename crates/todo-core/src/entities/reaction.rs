//! Reaction entity - a support or nag pressed on a public to-do

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::{TodoId, UserId};

/// Kind of reaction a user can press on a public to-do
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReactionKind {
    /// Encouragement
    Support,
    /// "Hurry up" poke
    Nag,
}

impl ReactionKind {
    /// Stable string form, used in database rows and cache keys
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Support => "support",
            Self::Nag => "nag",
        }
    }
}

impl std::fmt::Display for ReactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ReactionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "support" => Ok(Self::Support),
            "nag" => Ok(Self::Nag),
            _ => Err(format!("Invalid reaction kind: {s}")),
        }
    }
}

/// Reaction record
///
/// At most one reaction of a kind exists per (reactor, item); the database
/// enforces this with the primary key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reaction {
    pub reactor_id: UserId,
    pub todo_id: TodoId,
    pub kind: ReactionKind,
    pub created_at: DateTime<Utc>,
}

impl Reaction {
    /// Create a new Reaction
    pub fn new(reactor_id: UserId, todo_id: TodoId, kind: ReactionKind) -> Self {
        Self {
            reactor_id,
            todo_id,
            kind,
            created_at: Utc::now(),
        }
    }
}
