use serde::Serialize;

use crate::error::Result;
use crate::models::{Entity, ModelType};
use crate::services::remote::{Found, Resource, ServiceClient};

/// Uniform asynchronous CRUD interface over the remote service. Each
/// operation dispatches on the entity's `ModelType` to the matching resource
/// binding; the tag set is closed, so dispatch is an exhaustive match with
/// no fallback arm.
///
/// This layer interprets nothing: no retries, no timeout of its own, no
/// pagination flattening. Whatever the remote client returns or rejects with
/// reaches the caller unchanged.
#[derive(Debug, Clone)]
pub struct DataService {
    jobs: Resource,
    users: Resource,
}

impl DataService {
    pub fn new(client: &ServiceClient) -> Self {
        Self {
            jobs: client.resource(ModelType::Job),
            users: client.resource(ModelType::User),
        }
    }

    fn binding(&self, model: ModelType) -> &Resource {
        match model {
            ModelType::Job => &self.jobs,
            ModelType::User => &self.users,
        }
    }

    /// Fetch every record of the entity's collection. The response keeps
    /// whatever shape the service returned, envelope or bare array.
    pub async fn get_data<E: Entity>(&self) -> Result<Found<E>> {
        self.binding(E::MODEL).find().await
    }

    /// Create a record; the result carries the server-assigned identifier.
    pub async fn add_data<E, P>(&self, data: &P) -> Result<E>
    where
        E: Entity,
        P: Serialize + ?Sized,
    {
        self.binding(E::MODEL).create(data).await
    }

    /// Update the record with the given identifier, returning it as stored.
    pub async fn update_data<E, P>(&self, id: i64, data: &P) -> Result<E>
    where
        E: Entity,
        P: Serialize + ?Sized,
    {
        self.binding(E::MODEL).update(id, data).await
    }

    /// Remove the record with the given identifier; the removed record comes
    /// back as confirmation.
    pub async fn delete_data<E: Entity>(&self, id: i64) -> Result<E> {
        self.binding(E::MODEL).remove(id).await
    }
}
