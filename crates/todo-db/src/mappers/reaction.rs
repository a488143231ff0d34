//! Reaction entity <-> model mapper

use todo_core::{DomainError, Reaction, ReactionKind, TodoId, UserId};

use crate::models::ReactionModel;

impl TryFrom<ReactionModel> for Reaction {
    type Error = DomainError;

    fn try_from(model: ReactionModel) -> Result<Self, Self::Error> {
        let kind: ReactionKind = model
            .kind
            .parse()
            .map_err(DomainError::DatabaseError)?;

        Ok(Reaction {
            reactor_id: UserId::new(model.reactor_user_id),
            todo_id: TodoId::new(model.todo_id),
            kind,
            created_at: model.created_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_unknown_kind_is_an_error() {
        let model = ReactionModel {
            reactor_user_id: 1,
            todo_id: 2,
            kind: "boost".to_string(),
            created_at: Utc::now(),
        };
        assert!(Reaction::try_from(model).is_err());
    }

    #[test]
    fn test_known_kind_maps() {
        let model = ReactionModel {
            reactor_user_id: 1,
            todo_id: 2,
            kind: "nag".to_string(),
            created_at: Utc::now(),
        };
        let reaction = Reaction::try_from(model).unwrap();
        assert_eq!(reaction.kind, ReactionKind::Nag);
    }
}
