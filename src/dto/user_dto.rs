use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::user::Status;
use crate::utils::validation::validate_email_pattern;

/// Editable fields of a user, as bound to the entry form. Date of birth and
/// status start unselected; both must be chosen before submission.
#[derive(Debug, Clone, Default, Validate)]
pub struct UserForm {
    pub name: String,
    #[validate(required)]
    pub date_of_birth: Option<NaiveDate>,
    #[validate(custom(function = validate_email_pattern))]
    pub email: String,
    #[validate(required)]
    pub status: Option<Status>,
    #[validate(range(min = 0.0))]
    pub hourly_rate: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserPayload {
    pub name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub email: String,
    pub status: Option<Status>,
    pub hourly_rate: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserPayload {
    pub name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub email: String,
    pub status: Option<Status>,
    pub hourly_rate: f64,
    pub updated_at: DateTime<Utc>,
}
