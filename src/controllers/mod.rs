pub mod jobs;
pub mod users;

pub use jobs::JobsController;
pub use users::UsersController;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::warn;
use validator::Validate;

use crate::error::{Error, Result};
use crate::models::Entity;
use crate::services::data_service::DataService;
use crate::utils::time;

/// Which submit action the caller should present. Purely informational: the
/// submit operations themselves never consult it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Add,
    Update,
}

/// Binds an entity to its form and wire payloads. The mapping functions are
/// the only place where form fields and record fields meet; the controller
/// itself stays generic.
pub trait Editable: Entity {
    type Form: Validate + Default + Clone + Send + Sync;
    type Create: Serialize + Send + Sync;
    type Patch: Serialize + Send + Sync;

    /// Build a creation payload from the form, stamping both timestamps.
    fn to_create(form: &Self::Form, now: DateTime<Utc>) -> Self::Create;

    /// Build an update payload from the form with a refreshed `updated_at`.
    /// `created_at` is never part of a patch.
    fn to_patch(form: &Self::Form, now: DateTime<Utc>) -> Self::Patch;

    /// Copy the editable-field subset of a record into a fresh form.
    fn fill_form(&self) -> Self::Form;
}

/// List/form controller for one entity collection.
///
/// Owns the form model, the list snapshot and the current selection, and
/// funnels every mutation through confirmed server responses: nothing is
/// shown optimistically, and a failed call leaves all state untouched.
pub struct ListController<E: Editable> {
    service: DataService,
    form: E::Form,
    records: Vec<E>,
    selected_id: Option<i64>,
    mode: Mode,
}

impl<E: Editable> ListController<E> {
    pub fn new(service: DataService) -> Self {
        Self {
            service,
            form: E::Form::default(),
            records: Vec::new(),
            selected_id: None,
            mode: Mode::Add,
        }
    }

    /// Fetch the full collection and replace the snapshot wholesale,
    /// unwrapping the page envelope if the service paginates.
    pub async fn load(&mut self) -> Result<()> {
        let found = self.service.get_data::<E>().await?;
        self.records = found.into_records();
        Ok(())
    }

    /// Create a record from the current form. The new record is appended to
    /// the snapshot and the form reset only once the server confirms.
    pub async fn submit_add(&mut self) -> Result<()> {
        self.form.validate()?;
        let payload = E::to_create(&self.form, time::now());
        let created: E = self.service.add_data(&payload).await?;
        self.records.push(created);
        self.reset_form();
        Ok(())
    }

    /// Update the selected record from the current form. The snapshot entry
    /// whose identifier matches the server's returned record is replaced;
    /// entries with other identifiers are untouched.
    pub async fn submit_update(&mut self) -> Result<()> {
        let id = self.selected_id.ok_or(Error::NoSelection)?;
        self.form.validate()?;
        let payload = E::to_patch(&self.form, time::now());
        let updated: E = self.service.update_data(id, &payload).await?;
        match self.records.iter().position(|r| r.id() == updated.id()) {
            Some(index) => self.records[index] = updated,
            // The server committed an update we cannot see locally; the
            // snapshot has diverged from the collection.
            None => warn!(model = %E::MODEL, id, "updated record not found in list snapshot"),
        }
        self.reset_form();
        Ok(())
    }

    /// Delete a record by identifier. The snapshot entry matching the
    /// *returned* record's identifier is removed; the server's echoed
    /// identity is authoritative, not the argument.
    pub async fn submit_delete(&mut self, id: i64) -> Result<E> {
        let removed: E = self.service.delete_data(id).await?;
        match self.records.iter().position(|r| r.id() == removed.id()) {
            Some(index) => {
                self.records.remove(index);
            }
            None => warn!(model = %E::MODEL, id, "deleted record not found in list snapshot"),
        }
        Ok(removed)
    }

    /// Start editing an existing record: copy its editable fields into the
    /// form and remember its identifier.
    pub fn begin_edit(&mut self, record: &E) {
        self.form = record.fill_form();
        self.selected_id = record.id();
        self.mode = Mode::Update;
    }

    /// Clear the selection and the form, returning to `Add` mode.
    pub fn reset_form(&mut self) {
        self.selected_id = None;
        self.form = E::Form::default();
        self.mode = Mode::Add;
    }

    pub fn records(&self) -> &[E] {
        &self.records
    }

    pub fn form(&self) -> &E::Form {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut E::Form {
        &mut self.form
    }

    pub fn selected_id(&self) -> Option<i64> {
        self.selected_id
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }
}
