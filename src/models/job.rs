use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Entity, ModelType};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: Option<i64>,
    pub title: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Entity for Job {
    const MODEL: ModelType = ModelType::Job;

    fn id(&self) -> Option<i64> {
        self.id
    }
}
