//! Alarm entity <-> model mapper

use todo_core::{Alarm, AlarmId, AlarmKind, DomainError, TodoId, UserId};

use crate::models::AlarmModel;

impl TryFrom<AlarmModel> for Alarm {
    type Error = DomainError;

    fn try_from(model: AlarmModel) -> Result<Self, Self::Error> {
        let kind: AlarmKind = model
            .kind
            .parse()
            .map_err(DomainError::DatabaseError)?;

        Ok(Alarm {
            id: AlarmId::new(model.id),
            receiver_id: UserId::new(model.receiver_user_id),
            sender_id: model.sender_user_id.map(UserId::new),
            people_count: model.people_count,
            related_todo_id: model.related_todo_id.map(TodoId::new),
            kind,
            content: model.content,
            created_at: model.created_at,
            modified_at: model.modified_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_aggregate_alarm_maps() {
        let now = Utc::now();
        let model = AlarmModel {
            id: 5,
            receiver_user_id: 1,
            sender_user_id: None,
            people_count: 3,
            related_todo_id: Some(9),
            kind: "support".to_string(),
            content: "3 people are cheering for your todo!".to_string(),
            created_at: now,
            modified_at: now,
        };
        let alarm = Alarm::try_from(model).unwrap();
        assert_eq!(alarm.kind, AlarmKind::Support);
        assert_eq!(alarm.people_count, 3);
        assert!(alarm.is_aggregate());
        assert_eq!(alarm.sender_id, None);
    }
}
