use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;
use validator::Validate;

use crate::models::{Collection, Database, NewPoint, Point};
use crate::pagination::Page;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DatabaseListResponse {
    pub databases: Vec<Database>,
    pub total: u64,
}

impl From<Page<Arc<Database>>> for DatabaseListResponse {
    fn from(page: Page<Arc<Database>>) -> Self {
        let page = page.map(|db| Database::clone(&db));
        Self {
            databases: page.items,
            total: page.total,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CollectionListResponse {
    pub collections: Vec<Collection>,
    pub total: u64,
}

impl From<Page<Arc<Collection>>> for CollectionListResponse {
    fn from(page: Page<Arc<Collection>>) -> Self {
        let page = page.map(|c| Collection::clone(&c));
        Self {
            collections: page.items,
            total: page.total,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct UpsertPointsRequest {
    #[validate(length(min = 1))]
    pub points: Vec<NewPoint>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UpsertPointsResponse {
    pub ids: Vec<String>,
    pub count: usize,
}

/// Point ids to fetch or delete
#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct PointIdsRequest {
    #[validate(length(min = 1))]
    pub ids: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PointsResponse {
    pub points: Vec<Point>,
}

impl From<Vec<Arc<Point>>> for PointsResponse {
    fn from(points: Vec<Arc<Point>>) -> Self {
        Self {
            points: points.iter().map(|p| Point::clone(p)).collect(),
        }
    }
}
