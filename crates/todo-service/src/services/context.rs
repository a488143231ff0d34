//! Service context - dependency container for services
//!
//! Holds all repositories and cache stores needed by services.

use std::sync::Arc;

use todo_cache::{KeyValueCache, ReactionCounterCache};
use todo_core::{
    AlarmRepository, FollowRepository, ReactionRepository, TodoRepository, UserId, UserRepository,
};

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all services.
/// It provides access to:
/// - Database repositories (the durable source of truth)
/// - The followee-set cache
/// - The reaction counter cache
///
/// Cloning is cheap; the container is handed to spawned background tasks.
#[derive(Clone)]
pub struct ServiceContext {
    // Repositories
    user_repo: Arc<dyn UserRepository>,
    follow_repo: Arc<dyn FollowRepository>,
    todo_repo: Arc<dyn TodoRepository>,
    reaction_repo: Arc<dyn ReactionRepository>,
    alarm_repo: Arc<dyn AlarmRepository>,

    // Cache stores
    followee_cache: Arc<dyn KeyValueCache<UserId, Vec<UserId>>>,
    counter_cache: Arc<dyn ReactionCounterCache>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        follow_repo: Arc<dyn FollowRepository>,
        todo_repo: Arc<dyn TodoRepository>,
        reaction_repo: Arc<dyn ReactionRepository>,
        alarm_repo: Arc<dyn AlarmRepository>,
        followee_cache: Arc<dyn KeyValueCache<UserId, Vec<UserId>>>,
        counter_cache: Arc<dyn ReactionCounterCache>,
    ) -> Self {
        Self {
            user_repo,
            follow_repo,
            todo_repo,
            reaction_repo,
            alarm_repo,
            followee_cache,
            counter_cache,
        }
    }

    // === Repositories ===

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the follow repository
    pub fn follow_repo(&self) -> &dyn FollowRepository {
        self.follow_repo.as_ref()
    }

    /// Get the to-do repository
    pub fn todo_repo(&self) -> &dyn TodoRepository {
        self.todo_repo.as_ref()
    }

    /// Get the reaction repository
    pub fn reaction_repo(&self) -> &dyn ReactionRepository {
        self.reaction_repo.as_ref()
    }

    /// Get the alarm repository
    pub fn alarm_repo(&self) -> &dyn AlarmRepository {
        self.alarm_repo.as_ref()
    }

    // === Cache Stores ===

    /// Get the followee-set cache
    pub fn followee_cache(&self) -> &dyn KeyValueCache<UserId, Vec<UserId>> {
        self.followee_cache.as_ref()
    }

    /// Get the reaction counter cache
    pub fn counter_cache(&self) -> &dyn ReactionCounterCache {
        self.counter_cache.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("cache_stores", &"...")
            .finish()
    }
}
