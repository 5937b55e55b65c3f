use std::sync::Arc;
use validator::Validate;

use crate::error::{VectorDbError, VectorDbResult};
use crate::models::{
    Collection, CreateCollection, Database, NewPoint, Point, ScoredPoint, SearchRequest,
    SearchResponse,
};
use crate::pagination::{DEFAULT_LIMIT, Page, PageRequest};
use crate::repository::{CollectionRepository, DatabaseRepository, PointRepository};

fn require(value: &str, field: &str) -> VectorDbResult<()> {
    if value.trim().is_empty() {
        return Err(VectorDbError::validation(format!("{field} is required")));
    }
    Ok(())
}

/// Orchestrates the three stores.
///
/// Requests are validated here, and parent existence is checked before any
/// collection or point operation reaches its store. Points are partitioned
/// by [`Collection::points_key`].
pub struct VectorDbService<D, C, P> {
    databases: Arc<D>,
    collections: Arc<C>,
    points: Arc<P>,
}

impl<D, C, P> Clone for VectorDbService<D, C, P> {
    fn clone(&self) -> Self {
        Self {
            databases: Arc::clone(&self.databases),
            collections: Arc::clone(&self.collections),
            points: Arc::clone(&self.points),
        }
    }
}

impl<D, C, P> VectorDbService<D, C, P>
where
    D: DatabaseRepository,
    C: CollectionRepository,
    P: PointRepository,
{
    pub fn new(databases: D, collections: C, points: P) -> Self {
        Self {
            databases: Arc::new(databases),
            collections: Arc::new(collections),
            points: Arc::new(points),
        }
    }

    // ---- databases ----

    pub async fn create_database(&self, name: &str) -> VectorDbResult<Arc<Database>> {
        require(name, "name")?;
        self.databases.create_database(name).await
    }

    pub async fn get_database(&self, name: &str) -> VectorDbResult<Arc<Database>> {
        require(name, "database_name")?;
        self.databases.get_database(name).await
    }

    pub async fn list_databases(&self, request: PageRequest) -> VectorDbResult<Page<Arc<Database>>> {
        let request = request.normalized();
        self.databases
            .list_databases(request.page, request.limit)
            .await
    }

    pub async fn delete_database(&self, name: &str) -> VectorDbResult<()> {
        require(name, "database_name")?;
        self.databases.delete_database(name).await
    }

    // ---- collections ----

    pub async fn create_collection(
        &self,
        database_name: &str,
        input: CreateCollection,
    ) -> VectorDbResult<Arc<Collection>> {
        require(database_name, "database_name")?;
        require(&input.name, "name")?;
        if input.dimension == 0 {
            return Err(VectorDbError::validation("dimension must be positive"));
        }
        input
            .validate()
            .map_err(|e| VectorDbError::validation(e.to_string()))?;

        self.databases.get_database(database_name).await?;
        self.collections
            .create_collection(database_name, input)
            .await
    }

    pub async fn get_collection(
        &self,
        database_name: &str,
        name: &str,
    ) -> VectorDbResult<Arc<Collection>> {
        self.require_collection(database_name, name).await
    }

    pub async fn list_collections(
        &self,
        database_name: &str,
        request: PageRequest,
    ) -> VectorDbResult<Page<Arc<Collection>>> {
        require(database_name, "database_name")?;
        self.databases.get_database(database_name).await?;

        let request = request.normalized();
        self.collections
            .list_collections(database_name, request.page, request.limit)
            .await
    }

    pub async fn delete_collection(&self, database_name: &str, name: &str) -> VectorDbResult<()> {
        require(database_name, "database_name")?;
        require(name, "collection_name")?;
        self.databases.get_database(database_name).await?;
        self.collections
            .delete_collection(database_name, name)
            .await
    }

    // ---- points ----

    pub async fn upsert_points(
        &self,
        database_name: &str,
        collection_name: &str,
        points: Vec<NewPoint>,
    ) -> VectorDbResult<Vec<String>> {
        let collection = self
            .require_collection(database_name, collection_name)
            .await?;
        if points.is_empty() {
            return Err(VectorDbError::validation("points are required"));
        }

        self.points.upsert_points(&collection.points_key(), points).await
    }

    pub async fn get_point(
        &self,
        database_name: &str,
        collection_name: &str,
        point_id: &str,
    ) -> VectorDbResult<Arc<Point>> {
        require(point_id, "point_id")?;
        let found = self
            .get_points(database_name, collection_name, &[point_id.to_string()])
            .await?;

        found
            .into_iter()
            .next()
            .ok_or_else(VectorDbError::point_not_found)
    }

    /// Collections that have never received a point report no matches
    /// instead of an error.
    pub async fn get_points(
        &self,
        database_name: &str,
        collection_name: &str,
        ids: &[String],
    ) -> VectorDbResult<Vec<Arc<Point>>> {
        let collection = self
            .require_collection(database_name, collection_name)
            .await?;

        match self.points.get_points(&collection.points_key(), ids).await {
            Err(err) if err.is_not_found() => Ok(Vec::new()),
            other => other,
        }
    }

    pub async fn delete_points(
        &self,
        database_name: &str,
        collection_name: &str,
        ids: &[String],
    ) -> VectorDbResult<()> {
        let collection = self
            .require_collection(database_name, collection_name)
            .await?;
        if ids.is_empty() {
            return Err(VectorDbError::validation("point_id is required"));
        }

        match self.points.delete_points(&collection.points_key(), ids).await {
            Err(err) if err.is_not_found() => Ok(()),
            other => other,
        }
    }

    /// Placeholder nearest-neighbour search: returns up to `limit` points with
    /// a distance of zero.
    pub async fn search(
        &self,
        database_name: &str,
        collection_name: &str,
        request: SearchRequest,
    ) -> VectorDbResult<SearchResponse> {
        let collection = self
            .require_collection(database_name, collection_name)
            .await?;
        if request.query_vector.is_empty() {
            return Err(VectorDbError::validation("query_vector is required"));
        }

        let limit = if request.limit <= 0 {
            DEFAULT_LIMIT
        } else {
            request.limit
        };
        let top_k = usize::try_from(limit).unwrap_or(usize::MAX);

        let points = match self
            .points
            .search_points(&collection.points_key(), &request.query_vector, top_k)
            .await
        {
            Err(err) if err.is_not_found() => Vec::new(),
            other => other?,
        };

        let results: Vec<ScoredPoint> = points
            .into_iter()
            .map(|point| ScoredPoint {
                point: Point::clone(&point),
                distance: 0.0,
            })
            .collect();

        let distance_metric = match request.distance_metric {
            Some(metric) if !metric.is_empty() => metric,
            _ => collection.metric.clone(),
        };

        tracing::debug!(
            database = %database_name,
            collection = %collection_name,
            top_k,
            matches = results.len(),
            "Searched collection"
        );

        Ok(SearchResponse {
            total_matches: results.len(),
            results,
            distance_metric,
            query_vector: request.query_vector,
        })
    }

    async fn require_collection(
        &self,
        database_name: &str,
        collection_name: &str,
    ) -> VectorDbResult<Arc<Collection>> {
        require(database_name, "database_name")?;
        require(collection_name, "collection_name")?;
        self.databases.get_database(database_name).await?;
        self.collections
            .get_collection(database_name, collection_name)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::repository::{
        InMemoryCollectionRepository, InMemoryDatabaseRepository, InMemoryPointRepository,
        MockCollectionRepository, MockDatabaseRepository, MockPointRepository,
    };
    use mockall::predicate::eq;

    type InMemoryService = VectorDbService<
        InMemoryDatabaseRepository,
        InMemoryCollectionRepository,
        InMemoryPointRepository,
    >;

    fn in_memory() -> InMemoryService {
        VectorDbService::new(
            InMemoryDatabaseRepository::new(),
            InMemoryCollectionRepository::new(),
            InMemoryPointRepository::new(),
        )
    }

    #[tokio::test]
    async fn test_blank_names_are_rejected_before_storage() {
        let service = VectorDbService::new(
            MockDatabaseRepository::new(),
            MockCollectionRepository::new(),
            MockPointRepository::new(),
        );

        let err = service.create_database("").await.unwrap_err();
        assert_eq!(err.message(), "name is required");

        let err = service.get_collection("", "docs").await.unwrap_err();
        assert_eq!(err.message(), "database_name is required");

        let err = service.get_collection("db1", " ").await.unwrap_err();
        assert_eq!(err.message(), "collection_name is required");

        let err = service.get_point("db1", "docs", "").await.unwrap_err();
        assert_eq!(err.message(), "point_id is required");
    }

    #[tokio::test]
    async fn test_list_databases_passes_normalized_paging() {
        let mut databases = MockDatabaseRepository::new();
        databases
            .expect_list_databases()
            .with(eq(1), eq(10))
            .times(1)
            .returning(|_, _| Ok(Page::empty()));

        let service = VectorDbService::new(
            databases,
            MockCollectionRepository::new(),
            MockPointRepository::new(),
        );
        let page = service
            .list_databases(PageRequest { page: -2, limit: 0 })
            .await
            .unwrap();
        assert_eq!(page.total, 0);
    }

    #[tokio::test]
    async fn test_create_collection_requires_database() {
        let mut databases = MockDatabaseRepository::new();
        databases
            .expect_get_database()
            .returning(|_| Err(VectorDbError::database_not_found()));
        let mut collections = MockCollectionRepository::new();
        collections.expect_create_collection().never();

        let service = VectorDbService::new(databases, collections, MockPointRepository::new());
        let err = service
            .create_collection("missing", CreateCollection::new("docs", 3, "cosine"))
            .await
            .unwrap_err();
        assert_eq!(err.message(), "database not found");
    }

    #[tokio::test]
    async fn test_create_collection_rejects_zero_dimension() {
        let service = in_memory();
        service.create_database("db1").await.unwrap();

        let err = service
            .create_collection("db1", CreateCollection::new("docs", 0, "cosine"))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert_eq!(err.message(), "dimension must be positive");
    }

    #[tokio::test]
    async fn test_get_point_not_found() {
        let service = in_memory();
        service.create_database("db1").await.unwrap();
        service
            .create_collection("db1", CreateCollection::new("docs", 2, "cosine"))
            .await
            .unwrap();

        // No partition yet
        let err = service.get_point("db1", "docs", "p1").await.unwrap_err();
        assert_eq!(err.message(), "point not found");

        service
            .upsert_points("db1", "docs", vec![NewPoint::new(vec![1.0, 2.0]).with_id("p2")])
            .await
            .unwrap();
        let err = service.get_point("db1", "docs", "p1").await.unwrap_err();
        assert_eq!(err.message(), "point not found");

        let point = service.get_point("db1", "docs", "p2").await.unwrap();
        assert_eq!(point.vector, vec![1.0, 2.0]);
    }

    #[tokio::test]
    async fn test_search_defaults_limit_and_echoes_request() {
        let service = in_memory();
        service.create_database("db1").await.unwrap();
        service
            .create_collection("db1", CreateCollection::new("docs", 1, "euclidean"))
            .await
            .unwrap();

        let points = (0..15)
            .map(|i| NewPoint::new(vec![i as f32]))
            .collect();
        service.upsert_points("db1", "docs", points).await.unwrap();

        let response = service
            .search(
                "db1",
                "docs",
                SearchRequest {
                    query_vector: vec![0.5],
                    limit: 0,
                    distance_metric: None,
                },
            )
            .await
            .unwrap();

        assert_eq!(response.results.len(), 10);
        assert_eq!(response.total_matches, 10);
        assert_eq!(response.distance_metric, "euclidean");
        assert_eq!(response.query_vector, vec![0.5]);
        assert!(response.results.iter().all(|r| r.distance == 0.0));
    }

    #[tokio::test]
    async fn test_search_requires_query_vector() {
        let service = in_memory();
        service.create_database("db1").await.unwrap();
        service
            .create_collection("db1", CreateCollection::new("docs", 1, "cosine"))
            .await
            .unwrap();

        let err = service
            .search(
                "db1",
                "docs",
                SearchRequest {
                    query_vector: vec![],
                    limit: 5,
                    distance_metric: Some("dot_product".into()),
                },
            )
            .await
            .unwrap_err();
        assert_eq!(err.message(), "query_vector is required");
    }

    #[tokio::test]
    async fn test_search_routes_by_points_key() {
        let collection = Arc::new(Collection::new(
            "db1",
            CreateCollection::new("docs", 2, "cosine"),
        ));
        let expected_key = collection.points_key();

        let mut databases = MockDatabaseRepository::new();
        databases
            .expect_get_database()
            .returning(|name| Ok(Arc::new(Database::new(name))));
        let mut collections = MockCollectionRepository::new();
        collections
            .expect_get_collection()
            .returning(move |_, _| Ok(Arc::clone(&collection)));
        let mut points = MockPointRepository::new();
        points
            .expect_search_points()
            .withf(move |collection_id, _, top_k| collection_id == expected_key && *top_k == 3)
            .times(1)
            .returning(|_, _, _| Ok(Vec::new()));

        let service = VectorDbService::new(databases, collections, points);
        let response = service
            .search(
                "db1",
                "docs",
                SearchRequest {
                    query_vector: vec![1.0, 0.0],
                    limit: 3,
                    distance_metric: Some("dot_product".into()),
                },
            )
            .await
            .unwrap();
        assert!(response.results.is_empty());
        assert_eq!(response.distance_metric, "dot_product");
    }

    #[tokio::test]
    async fn test_same_named_collections_do_not_share_points() {
        let service = in_memory();
        for db in ["db1", "db2"] {
            service.create_database(db).await.unwrap();
            service
                .create_collection(db, CreateCollection::new("docs", 2, "cosine"))
                .await
                .unwrap();
        }
        service
            .upsert_points("db1", "docs", vec![NewPoint::new(vec![1.0, 2.0]).with_id("secret")])
            .await
            .unwrap();

        let err = service.get_point("db2", "docs", "secret").await.unwrap_err();
        assert_eq!(err.message(), "point not found");
        let response = service
            .search(
                "db2",
                "docs",
                SearchRequest {
                    query_vector: vec![1.0, 2.0],
                    limit: 10,
                    distance_metric: None,
                },
            )
            .await
            .unwrap();
        assert!(response.results.is_empty());

        let point = service.get_point("db1", "docs", "secret").await.unwrap();
        assert_eq!(point.vector, vec![1.0, 2.0]);
    }

    #[tokio::test]
    async fn test_recreated_collection_starts_empty() {
        let service = in_memory();
        service.create_database("db1").await.unwrap();
        service
            .create_collection("db1", CreateCollection::new("docs", 2, "cosine"))
            .await
            .unwrap();
        service
            .upsert_points("db1", "docs", vec![NewPoint::new(vec![1.0, 2.0]).with_id("p1")])
            .await
            .unwrap();

        service.delete_collection("db1", "docs").await.unwrap();
        service
            .create_collection("db1", CreateCollection::new("docs", 2, "cosine"))
            .await
            .unwrap();

        let err = service.get_point("db1", "docs", "p1").await.unwrap_err();
        assert_eq!(err.message(), "point not found");
    }

    #[tokio::test]
    async fn test_delete_database_does_not_cascade() {
        let service = in_memory();
        service.create_database("db1").await.unwrap();
        service
            .create_collection("db1", CreateCollection::new("docs", 1, "cosine"))
            .await
            .unwrap();

        service.delete_database("db1").await.unwrap();

        // Parent is gone, so lookups through the service fail on the database
        let err = service.get_collection("db1", "docs").await.unwrap_err();
        assert_eq!(err.message(), "database not found");

        // Recreating the database exposes the orphaned collection again
        service.create_database("db1").await.unwrap();
        assert!(service.get_collection("db1", "docs").await.is_ok());
    }
}
