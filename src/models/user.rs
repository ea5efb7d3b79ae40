use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::{Entity, ModelType};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Option<i64>,
    pub name: String,
    pub date_of_birth: NaiveDate,
    pub email: String,
    pub status: Status,
    pub hourly_rate: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Entity for User {
    const MODEL: ModelType = ModelType::User;

    fn id(&self) -> Option<i64> {
        self.id
    }
}

/// Categorical status field, displayed with an icon and a label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Male,
    Female,
    Other,
}

impl Status {
    pub const ALL: [Status; 3] = [Status::Male, Status::Female, Status::Other];

    /// Wire value, as stored on the record.
    pub fn value(&self) -> &'static str {
        match self {
            Status::Male => "male",
            Status::Female => "female",
            Status::Other => "other",
        }
    }

    /// Name of the svg icon shown next to the label.
    pub fn icon(&self) -> &'static str {
        self.value()
    }

    pub fn label(&self) -> &'static str {
        match self {
            Status::Male => "Male",
            Status::Female => "Female",
            Status::Other => "Other",
        }
    }

    pub fn from_value(value: &str) -> Option<Status> {
        Status::ALL.into_iter().find(|s| s.value() == value)
    }
}
