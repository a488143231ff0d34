//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. The durable store is the source of truth for
//! follows, reactions, alarms, to-dos, and users; caches are derived from it.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::entities::{Alarm, AlarmKind, Follow, PublicTodo, Reaction, ReactionKind, User};
use crate::error::DomainError;
use crate::value_objects::{AlarmId, PageRequest, TodoId, UserId};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: UserId) -> RepoResult<Option<User>>;

    /// Page of users whose nickname contains the given term
    async fn search_by_nickname(&self, term: &str, page: &PageRequest) -> RepoResult<Vec<User>>;

    /// Replace a user's status message; returns false when the user is absent
    async fn update_status_message(&self, id: UserId, message: &str) -> RepoResult<bool>;
}

// ============================================================================
// Follow Repository
// ============================================================================

#[async_trait]
pub trait FollowRepository: Send + Sync {
    /// All users the given user follows, in stable (ascending id) order
    async fn find_followee_ids(&self, sender_id: UserId) -> RepoResult<Vec<UserId>>;

    /// Create a follow edge; fails with `AlreadyFollowing` on a duplicate pair
    async fn create(&self, follow: &Follow) -> RepoResult<()>;

    /// Remove a follow edge; returns false when no edge existed
    async fn delete(&self, sender_id: UserId, receiver_id: UserId) -> RepoResult<bool>;
}

// ============================================================================
// Todo Repository
// ============================================================================

#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// Find a public to-do by ID
    async fn find_by_id(&self, id: TodoId) -> RepoResult<Option<PublicTodo>>;

    /// Page of unfinished to-dos due on `deadline` authored by any of
    /// `author_ids`. Must return an empty page without touching the store
    /// when `author_ids` is empty.
    async fn find_pending(
        &self,
        deadline: NaiveDate,
        author_ids: &[UserId],
        page: &PageRequest,
    ) -> RepoResult<Vec<PublicTodo>>;
}

// ============================================================================
// Reaction Repository
// ============================================================================

#[async_trait]
pub trait ReactionRepository: Send + Sync {
    /// Find a specific reaction record
    async fn find(
        &self,
        reactor_id: UserId,
        todo_id: TodoId,
        kind: ReactionKind,
    ) -> RepoResult<Option<Reaction>>;

    /// Persist a reaction; fails with `ReactionAlreadyExists` on a duplicate
    async fn create(&self, reaction: &Reaction) -> RepoResult<()>;

    /// Remove a reaction; returns false when no record existed
    async fn delete(
        &self,
        reactor_id: UserId,
        todo_id: TodoId,
        kind: ReactionKind,
    ) -> RepoResult<bool>;

    /// Authoritative count of reactions for an item and kind
    async fn count(&self, todo_id: TodoId, kind: ReactionKind) -> RepoResult<i64>;

    /// Page of users who pressed the given kind on an item
    async fn find_reactor_ids(
        &self,
        todo_id: TodoId,
        kind: ReactionKind,
        page: &PageRequest,
    ) -> RepoResult<Vec<UserId>>;
}

// ============================================================================
// Alarm Repository
// ============================================================================

/// Arguments for the atomic create-or-increment of an aggregate alarm
///
/// `initial_content` is used when the row is created; `aggregate_suffix` is
/// appended to the new people-count when an existing row is updated
/// (e.g. " people are cheering for your todo!").
#[derive(Debug, Clone)]
pub struct AggregateAlarmUpsert<'a> {
    pub todo_id: TodoId,
    pub kind: AlarmKind,
    pub receiver_id: UserId,
    pub sender_id: UserId,
    pub initial_content: &'a str,
    pub aggregate_suffix: &'a str,
}

#[async_trait]
pub trait AlarmRepository: Send + Sync {
    /// Find the aggregate alarm for an item and kind, if any
    async fn find_by_todo_and_kind(
        &self,
        todo_id: TodoId,
        kind: AlarmKind,
    ) -> RepoResult<Option<Alarm>>;

    /// Atomically create an aggregate alarm with people-count 1, or increment
    /// the existing row's people-count and regenerate its content. Returns
    /// the resulting row.
    async fn upsert_aggregate(&self, upsert: &AggregateAlarmUpsert<'_>) -> RepoResult<Alarm>;

    /// Persist a non-aggregate alarm (e.g. new follower); returns the stored row
    async fn create(&self, alarm: &Alarm) -> RepoResult<Alarm>;

    /// Page of alarms for a receiver, newest modification first
    async fn find_by_receiver(
        &self,
        receiver_id: UserId,
        page: &PageRequest,
    ) -> RepoResult<Vec<Alarm>>;

    /// Delete one alarm, scoped to the receiver; returns false when no row
    /// matched both the id and the receiver
    async fn delete(&self, id: AlarmId, receiver_id: UserId) -> RepoResult<bool>;

    /// Delete every alarm belonging to a receiver; returns the number removed
    async fn delete_all_for_receiver(&self, receiver_id: UserId) -> RepoResult<u64>;
}
