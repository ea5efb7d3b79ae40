use chrono::{DateTime, Utc};

use crate::controllers::{Editable, ListController};
use crate::dto::user_dto::{CreateUserPayload, UpdateUserPayload, UserForm};
use crate::models::user::User;

pub type UsersController = ListController<User>;

impl Editable for User {
    type Form = UserForm;
    type Create = CreateUserPayload;
    type Patch = UpdateUserPayload;

    fn to_create(form: &UserForm, now: DateTime<Utc>) -> CreateUserPayload {
        CreateUserPayload {
            name: form.name.clone(),
            date_of_birth: form.date_of_birth,
            email: form.email.clone(),
            status: form.status,
            hourly_rate: form.hourly_rate,
            created_at: now,
            updated_at: now,
        }
    }

    fn to_patch(form: &UserForm, now: DateTime<Utc>) -> UpdateUserPayload {
        UpdateUserPayload {
            name: form.name.clone(),
            date_of_birth: form.date_of_birth,
            email: form.email.clone(),
            status: form.status,
            hourly_rate: form.hourly_rate,
            updated_at: now,
        }
    }

    fn fill_form(&self) -> UserForm {
        UserForm {
            name: self.name.clone(),
            date_of_birth: Some(self.date_of_birth),
            email: self.email.clone(),
            status: Some(self.status),
            hourly_rate: self.hourly_rate,
        }
    }
}
