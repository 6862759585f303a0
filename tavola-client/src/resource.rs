//! Generic CRUD service over one backend collection
//!
//! Every catalog endpoint exposes the same five operations. A [`Resource`]
//! names the collection path, the record returned by the backend and the
//! form sent on create/update; [`ResourceService`] issues the requests.

use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use shared::EntityId;
use shared::models::MultipartForm;

use crate::error::ClientResult;
use crate::session::SharedClient;

/// A backend collection.
pub trait Resource: Send + Sync + 'static {
    /// Collection path without the style suffix (`category`, `desk`).
    const PATH: &'static str;

    /// Record returned by list/get/create/update
    type Record: DeserializeOwned + Send;

    /// Payload sent on create/update
    type Form: MultipartForm + Sync;
}

/// CRUD operations for one resource.
///
/// Every operation fails with a [`ClientError`](crate::ClientError) on a
/// transport failure or a non-2xx status; errors are never handed back as
/// data.
pub struct ResourceService<R: Resource> {
    client: SharedClient,
    _resource: PhantomData<fn() -> R>,
}

impl<R: Resource> Clone for ResourceService<R> {
    fn clone(&self) -> Self {
        Self::new(self.client.clone())
    }
}

impl<R: Resource> std::fmt::Debug for ResourceService<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResourceService")
            .field("resource", &R::PATH)
            .finish()
    }
}

impl<R: Resource> ResourceService<R> {
    pub fn new(client: SharedClient) -> Self {
        Self {
            client,
            _resource: PhantomData,
        }
    }

    pub fn client(&self) -> &SharedClient {
        &self.client
    }

    /// GET `<path>`
    pub async fn list(&self) -> ClientResult<Vec<R::Record>> {
        let http = self.client.current().await;
        let path = http.path_style().collection_path(R::PATH);
        http.get(&path).await
    }

    /// GET `<path>/<id>`
    pub async fn get(&self, id: EntityId) -> ClientResult<R::Record> {
        let http = self.client.current().await;
        let path = http.path_style().member_path(R::PATH, id);
        http.get(&path).await
    }

    /// POST `<path>` with a multipart body
    pub async fn create(&self, form: &R::Form) -> ClientResult<R::Record> {
        let http = self.client.current().await;
        let path = http.path_style().collection_path(R::PATH);
        let record = http.post_multipart(&path, form.fields()).await?;
        tracing::info!(resource = R::PATH, "Created");
        Ok(record)
    }

    /// PUT `<path>/<id>` with a multipart body
    pub async fn update(&self, id: EntityId, form: &R::Form) -> ClientResult<R::Record> {
        let http = self.client.current().await;
        let path = http.path_style().member_path(R::PATH, id);
        let record = http.put_multipart(&path, form.fields()).await?;
        tracing::info!(resource = R::PATH, id, "Updated");
        Ok(record)
    }

    /// DELETE `<path>/<id>`
    ///
    /// The confirmation body is backend-defined and returned as-is (`null`
    /// when empty).
    pub async fn delete(&self, id: EntityId) -> ClientResult<serde_json::Value> {
        let http = self.client.current().await;
        let path = http.path_style().member_path(R::PATH, id);
        let confirmation = http.delete(&path).await?;
        tracing::info!(resource = R::PATH, id, "Deleted");
        Ok(confirmation)
    }
}
