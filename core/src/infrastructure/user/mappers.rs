use chrono::{TimeZone, Utc};

use crate::domain::user::entities::User;
use crate::entity::users::Model as UserModel;

impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: model.id,
            name: model.name,
            email: model.email,
            password_hash: model.password_hash,
            avatar: model.avatar,
            dark_mode: model.dark_mode,
            created_at: Utc.from_utc_datetime(&model.created_at),
            updated_at: Utc.from_utc_datetime(&model.updated_at),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use uuid::Uuid;

    use super::*;

    #[test]
    fn test_model_maps_to_utc_user() {
        let created = NaiveDate::from_ymd_opt(2025, 3, 1)
            .unwrap()
            .and_hms_opt(12, 30, 0)
            .unwrap();

        let user = User::from(UserModel {
            id: Uuid::nil(),
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            password_hash: "hash".to_string(),
            avatar: None,
            dark_mode: true,
            created_at: created,
            updated_at: created,
        });

        assert_eq!(user.created_at.to_rfc3339(), "2025-03-01T12:30:00+00:00");
        assert!(user.dark_mode);
        assert_eq!(user.password_hash, "hash");
    }
}
