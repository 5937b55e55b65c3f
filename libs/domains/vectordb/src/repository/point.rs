use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{VectorDbError, VectorDbResult};
use crate::models::{NewPoint, Point};

type PointMap = HashMap<String, HashMap<String, Arc<Point>>>;

/// Repository trait for points, partitioned by collection id
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PointRepository: Send + Sync {
    /// Insert or overwrite each point; returns the written ids in input order
    async fn upsert_points(
        &self,
        collection_id: &str,
        points: Vec<NewPoint>,
    ) -> VectorDbResult<Vec<String>>;

    /// Present points in the order of `ids`; unknown ids are skipped
    async fn get_points(&self, collection_id: &str, ids: &[String])
    -> VectorDbResult<Vec<Arc<Point>>>;

    /// Remove each present id; unknown ids are ignored
    async fn delete_points(&self, collection_id: &str, ids: &[String]) -> VectorDbResult<()>;

    /// Up to `top_k` points of the collection, in no particular order.
    ///
    /// The query vector is accepted but not used for ranking.
    async fn search_points(
        &self,
        collection_id: &str,
        query_vector: &[f32],
        top_k: usize,
    ) -> VectorDbResult<Vec<Arc<Point>>>;
}

#[derive(Debug, Default, Clone)]
pub struct InMemoryPointRepository {
    points: Arc<RwLock<PointMap>>,
}

impl InMemoryPointRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PointRepository for InMemoryPointRepository {
    async fn upsert_points(
        &self,
        collection_id: &str,
        points: Vec<NewPoint>,
    ) -> VectorDbResult<Vec<String>> {
        let mut partitions = self.points.write().await;
        let by_id = partitions.entry(collection_id.to_string()).or_default();

        let mut ids = Vec::with_capacity(points.len());
        for input in points {
            let id = input.resolve_id();
            let previous = by_id.get(&id).map(Arc::as_ref);
            let point = Point::from_new(collection_id, id.clone(), input, previous);
            by_id.insert(id.clone(), Arc::new(point));
            ids.push(id);
        }

        tracing::debug!(collection = %collection_id, count = ids.len(), "Upserted points");
        Ok(ids)
    }

    async fn get_points(
        &self,
        collection_id: &str,
        ids: &[String],
    ) -> VectorDbResult<Vec<Arc<Point>>> {
        let partitions = self.points.read().await;
        let by_id = partitions
            .get(collection_id)
            .ok_or_else(VectorDbError::collection_not_found)?;

        Ok(ids.iter().filter_map(|id| by_id.get(id).cloned()).collect())
    }

    async fn delete_points(&self, collection_id: &str, ids: &[String]) -> VectorDbResult<()> {
        let mut partitions = self.points.write().await;
        let by_id = partitions
            .get_mut(collection_id)
            .ok_or_else(VectorDbError::collection_not_found)?;

        let removed = ids.iter().filter(|id| by_id.remove(*id).is_some()).count();

        tracing::debug!(collection = %collection_id, removed, "Deleted points");
        Ok(())
    }

    async fn search_points(
        &self,
        collection_id: &str,
        _query_vector: &[f32],
        top_k: usize,
    ) -> VectorDbResult<Vec<Arc<Point>>> {
        let partitions = self.points.read().await;
        let by_id = partitions
            .get(collection_id)
            .ok_or_else(VectorDbError::collection_not_found)?;

        Ok(by_id.values().take(top_k).cloned().collect())
    }
}
