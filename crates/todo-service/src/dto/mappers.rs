//! Entity to DTO mappers

use todo_core::{Alarm, User};

use super::responses::{AlarmResponse, UserResponse};

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            nickname: user.nickname.clone(),
            status_message: user.status_message.clone(),
            created_at: user.created_at,
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

impl From<&Alarm> for AlarmResponse {
    fn from(alarm: &Alarm) -> Self {
        Self {
            id: alarm.id,
            kind: alarm.kind,
            content: alarm.content.clone(),
            people_count: alarm.people_count,
            related_todo_id: alarm.related_todo_id,
            modified_at: alarm.modified_at,
        }
    }
}

impl From<Alarm> for AlarmResponse {
    fn from(alarm: Alarm) -> Self {
        Self::from(&alarm)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use todo_core::{AlarmKind, TodoId, UserId};

    #[test]
    fn test_user_to_response() {
        let user = User::new(UserId::new(1), "alice".to_string());
        let resp = UserResponse::from(&user);
        assert_eq!(resp.id, UserId::new(1));
        assert_eq!(resp.nickname, "alice");
    }

    #[test]
    fn test_alarm_to_response() {
        let alarm = Alarm::new(
            UserId::new(1),
            UserId::new(2),
            Some(TodoId::new(9)),
            AlarmKind::Support,
            "alice is cheering for your todo!".to_string(),
        );
        let resp = AlarmResponse::from(&alarm);
        assert_eq!(resp.kind, AlarmKind::Support);
        assert_eq!(resp.people_count, 1);
        assert_eq!(resp.related_todo_id, Some(TodoId::new(9)));
    }
}
