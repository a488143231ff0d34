//! Alarm entity - a notification row shown to a receiver

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::reaction::ReactionKind;
use crate::value_objects::{AlarmId, TodoId, UserId};

/// Kind of event an alarm reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlarmKind {
    /// Someone pressed support on a to-do
    Support,
    /// Someone pressed nag on a to-do
    Nag,
    /// Someone started following the receiver
    NewFollower,
}

impl AlarmKind {
    /// Stable string form, used in database rows
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Support => "support",
            Self::Nag => "nag",
            Self::NewFollower => "new_follower",
        }
    }
}

impl From<ReactionKind> for AlarmKind {
    fn from(kind: ReactionKind) -> Self {
        match kind {
            ReactionKind::Support => Self::Support,
            ReactionKind::Nag => Self::Nag,
        }
    }
}

impl std::fmt::Display for AlarmKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for AlarmKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "support" => Ok(Self::Support),
            "nag" => Ok(Self::Nag),
            "new_follower" => Ok(Self::NewFollower),
            _ => Err(format!("Invalid alarm kind: {s}")),
        }
    }
}

/// Alarm row
///
/// Reaction alarms are aggregates: one visible row per (related to-do, kind),
/// with `people_count` tracking how many triggering events it represents.
/// Once a second sender joins the aggregate, `sender_id` is cleared. Follower
/// alarms carry no related to-do and are never aggregated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alarm {
    pub id: AlarmId,
    pub receiver_id: UserId,
    pub sender_id: Option<UserId>,
    pub people_count: i64,
    pub related_todo_id: Option<TodoId>,
    pub kind: AlarmKind,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
}

impl Alarm {
    /// Create a single-sender alarm (not yet persisted, id zero)
    pub fn new(
        receiver_id: UserId,
        sender_id: UserId,
        related_todo_id: Option<TodoId>,
        kind: AlarmKind,
        content: String,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: AlarmId::default(),
            receiver_id,
            sender_id: Some(sender_id),
            people_count: 1,
            related_todo_id,
            kind,
            content,
            created_at: now,
            modified_at: now,
        }
    }

    /// Whether this row aggregates events on a to-do item
    pub fn is_aggregate(&self) -> bool {
        self.related_todo_id.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_reaction() {
        assert_eq!(AlarmKind::from(ReactionKind::Support), AlarmKind::Support);
        assert_eq!(AlarmKind::from(ReactionKind::Nag), AlarmKind::Nag);
    }

    #[test]
    fn test_kind_roundtrip() {
        assert_eq!("new_follower".parse::<AlarmKind>().unwrap(), AlarmKind::NewFollower);
        assert!("poke".parse::<AlarmKind>().is_err());
    }

    #[test]
    fn test_new_alarm_defaults() {
        let alarm = Alarm::new(
            UserId::new(1),
            UserId::new(2),
            Some(TodoId::new(9)),
            AlarmKind::Support,
            "alice is cheering for your todo!".to_string(),
        );
        assert_eq!(alarm.people_count, 1);
        assert_eq!(alarm.sender_id, Some(UserId::new(2)));
        assert!(alarm.is_aggregate());
    }
}
