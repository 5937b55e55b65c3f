use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{COLLECTION_ALREADY_EXISTS, VectorDbError, VectorDbResult};
use crate::models::{Collection, CreateCollection};
use crate::pagination::{Page, PageRequest, paginate};

type CollectionMap = HashMap<String, HashMap<String, Arc<Collection>>>;

/// Repository trait for collections, keyed by `(database_name, name)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CollectionRepository: Send + Sync {
    /// Create a collection. Does not check that the database exists.
    async fn create_collection(
        &self,
        database_name: &str,
        input: CreateCollection,
    ) -> VectorDbResult<Arc<Collection>>;

    async fn get_collection(&self, database_name: &str, name: &str)
    -> VectorDbResult<Arc<Collection>>;

    /// An unknown database lists as empty rather than failing
    async fn list_collections(
        &self,
        database_name: &str,
        page: i64,
        limit: i64,
    ) -> VectorDbResult<Page<Arc<Collection>>>;

    /// Remove a collection. Its points are left untouched.
    async fn delete_collection(&self, database_name: &str, name: &str) -> VectorDbResult<()>;
}

#[derive(Debug, Default, Clone)]
pub struct InMemoryCollectionRepository {
    collections: Arc<RwLock<CollectionMap>>,
}

impl InMemoryCollectionRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CollectionRepository for InMemoryCollectionRepository {
    async fn create_collection(
        &self,
        database_name: &str,
        input: CreateCollection,
    ) -> VectorDbResult<Arc<Collection>> {
        let mut collections = self.collections.write().await;
        let by_name = collections.entry(database_name.to_string()).or_default();

        if by_name.contains_key(&input.name) {
            return Err(VectorDbError::validation(COLLECTION_ALREADY_EXISTS));
        }

        let collection = Arc::new(Collection::new(database_name, input));
        by_name.insert(collection.name.clone(), Arc::clone(&collection));

        tracing::info!(
            database = %database_name,
            collection = %collection.name,
            dimension = collection.dimension,
            metric = %collection.metric,
            "Created collection"
        );
        Ok(collection)
    }

    async fn get_collection(
        &self,
        database_name: &str,
        name: &str,
    ) -> VectorDbResult<Arc<Collection>> {
        let collections = self.collections.read().await;
        collections
            .get(database_name)
            .ok_or_else(VectorDbError::database_not_found)?
            .get(name)
            .cloned()
            .ok_or_else(VectorDbError::collection_not_found)
    }

    async fn list_collections(
        &self,
        database_name: &str,
        page: i64,
        limit: i64,
    ) -> VectorDbResult<Page<Arc<Collection>>> {
        let collections = self.collections.read().await;
        Ok(match collections.get(database_name) {
            Some(by_name) => paginate(by_name.values().cloned(), PageRequest::new(page, limit)),
            None => Page::empty(),
        })
    }

    async fn delete_collection(&self, database_name: &str, name: &str) -> VectorDbResult<()> {
        let mut collections = self.collections.write().await;
        let by_name = collections
            .get_mut(database_name)
            .ok_or_else(VectorDbError::database_not_found)?;

        if by_name.remove(name).is_none() {
            return Err(VectorDbError::collection_not_found());
        }

        tracing::info!(database = %database_name, collection = %name, "Deleted collection");
        Ok(())
    }
}
