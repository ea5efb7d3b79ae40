use chrono::{DateTime, Utc};

use crate::controllers::{Editable, ListController};
use crate::dto::job_dto::{CreateJobPayload, JobForm, UpdateJobPayload};
use crate::models::job::Job;

pub type JobsController = ListController<Job>;

impl Editable for Job {
    type Form = JobForm;
    type Create = CreateJobPayload;
    type Patch = UpdateJobPayload;

    fn to_create(form: &JobForm, now: DateTime<Utc>) -> CreateJobPayload {
        CreateJobPayload {
            title: form.title.clone(),
            description: form.description.clone(),
            created_at: now,
            updated_at: now,
        }
    }

    fn to_patch(form: &JobForm, now: DateTime<Utc>) -> UpdateJobPayload {
        UpdateJobPayload {
            title: form.title.clone(),
            description: form.description.clone(),
            updated_at: now,
        }
    }

    fn fill_form(&self) -> JobForm {
        JobForm {
            title: self.title.clone(),
            description: self.description.clone(),
        }
    }
}
