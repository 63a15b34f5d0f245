use std::marker::PhantomData;

use serde::de::IgnoredAny;
use types::{Product, RecordId, Resource, Result, User};

use crate::ApiClient;

/// CRUD access to one resource collection.
#[allow(async_fn_in_trait)]
pub trait Crud<R: Resource> {
    async fn list(&self) -> Result<Vec<R>>;
    async fn get(&self, id: RecordId) -> Result<R>;
    async fn create(&self, draft: &R::Draft) -> Result<R>;
    async fn update(&self, id: RecordId, draft: &R::Draft) -> Result<R>;
    async fn remove(&self, id: RecordId) -> Result<()>;
}

/// Typed façade over [`ApiClient`] for the collection at `R::PATH`.
pub struct ResourceService<R> {
    client: ApiClient,
    _resource: PhantomData<fn() -> R>,
}

pub type UserService = ResourceService<User>;
pub type ProductService = ResourceService<Product>;

impl<R: Resource> ResourceService<R> {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            _resource: PhantomData,
        }
    }
}

impl<R> Clone for ResourceService<R> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            _resource: PhantomData,
        }
    }
}

impl<R: Resource> Crud<R> for ResourceService<R> {
    async fn list(&self) -> Result<Vec<R>> {
        self.client.get(R::PATH).await
    }

    async fn get(&self, id: RecordId) -> Result<R> {
        self.client.get(&R::item_path(id)).await
    }

    async fn create(&self, draft: &R::Draft) -> Result<R> {
        self.client.post(R::PATH, draft).await
    }

    async fn update(&self, id: RecordId, draft: &R::Draft) -> Result<R> {
        self.client.put(&R::item_path(id), draft).await
    }

    async fn remove(&self, id: RecordId) -> Result<()> {
        // Backends differ on what a delete returns; the body is not needed.
        self.client
            .delete::<IgnoredAny>(&R::item_path(id))
            .await
            .map(|_| ())
    }
}
