use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{DATABASE_ALREADY_EXISTS, VectorDbError, VectorDbResult};
use crate::models::Database;
use crate::pagination::{Page, PageRequest, paginate};

/// Repository trait for Database records, keyed by name
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DatabaseRepository: Send + Sync {
    /// Create a database; fails with a validation error if the name is taken
    async fn create_database(&self, name: &str) -> VectorDbResult<Arc<Database>>;

    async fn get_database(&self, name: &str) -> VectorDbResult<Arc<Database>>;

    /// List databases in unspecified order
    async fn list_databases(&self, page: i64, limit: i64) -> VectorDbResult<Page<Arc<Database>>>;

    /// Remove a database. Its collections are left untouched.
    async fn delete_database(&self, name: &str) -> VectorDbResult<()>;
}

#[derive(Debug, Default, Clone)]
pub struct InMemoryDatabaseRepository {
    databases: Arc<RwLock<HashMap<String, Arc<Database>>>>,
}

impl InMemoryDatabaseRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DatabaseRepository for InMemoryDatabaseRepository {
    async fn create_database(&self, name: &str) -> VectorDbResult<Arc<Database>> {
        let mut databases = self.databases.write().await;

        if databases.contains_key(name) {
            return Err(VectorDbError::validation(DATABASE_ALREADY_EXISTS));
        }

        let database = Arc::new(Database::new(name));
        databases.insert(name.to_string(), Arc::clone(&database));

        tracing::info!(database = %name, database_id = %database.id, "Created database");
        Ok(database)
    }

    async fn get_database(&self, name: &str) -> VectorDbResult<Arc<Database>> {
        let databases = self.databases.read().await;
        databases
            .get(name)
            .cloned()
            .ok_or_else(VectorDbError::database_not_found)
    }

    async fn list_databases(&self, page: i64, limit: i64) -> VectorDbResult<Page<Arc<Database>>> {
        let databases = self.databases.read().await;
        Ok(paginate(
            databases.values().cloned(),
            PageRequest::new(page, limit),
        ))
    }

    async fn delete_database(&self, name: &str) -> VectorDbResult<()> {
        let mut databases = self.databases.write().await;

        if databases.remove(name).is_none() {
            return Err(VectorDbError::database_not_found());
        }

        tracing::info!(database = %name, "Deleted database");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[tokio::test]
    async fn test_create_and_get_database() {
        let repo = InMemoryDatabaseRepository::new();

        let created = repo.create_database("db1").await.unwrap();
        assert_eq!(created.name, "db1");
        assert_eq!(created.created_at, created.updated_at);

        let fetched = repo.get_database("db1").await.unwrap();
        assert_eq!(fetched.id, created.id);
        assert!(Arc::ptr_eq(&fetched, &created));
    }

    #[tokio::test]
    async fn test_duplicate_name_rejected() {
        let repo = InMemoryDatabaseRepository::new();
        repo.create_database("db1").await.unwrap();

        let err = repo.create_database("db1").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert_eq!(err.message(), "database already exists");
    }

    #[tokio::test]
    async fn test_get_missing_database() {
        let repo = InMemoryDatabaseRepository::new();
        let err = repo.get_database("nope").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(err.message(), "database not found");
    }

    #[tokio::test]
    async fn test_delete_then_recreate_gets_new_id() {
        let repo = InMemoryDatabaseRepository::new();
        let first = repo.create_database("db1").await.unwrap();

        repo.delete_database("db1").await.unwrap();
        assert!(repo.get_database("db1").await.unwrap_err().is_not_found());
        assert!(repo.delete_database("db1").await.unwrap_err().is_not_found());

        let second = repo.create_database("db1").await.unwrap();
        assert_ne!(first.id, second.id);
    }

    #[tokio::test]
    async fn test_list_coerces_page_and_limit() {
        let repo = InMemoryDatabaseRepository::new();
        for i in 0..12 {
            repo.create_database(&format!("db{i}")).await.unwrap();
        }

        let page = repo.list_databases(0, 0).await.unwrap();
        assert_eq!(page.items.len(), 10);
        assert_eq!(page.total, 12);

        let page = repo.list_databases(2, -5).await.unwrap();
        assert_eq!(page.items.len(), 2);

        let page = repo.list_databases(9, 10).await.unwrap();
        assert!(page.items.is_empty());
        assert_eq!(page.total, 12);
    }
}
