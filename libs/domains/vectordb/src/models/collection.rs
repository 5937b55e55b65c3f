use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::Metadata;

/// Metric label recorded when a collection is created without one.
pub const DEFAULT_METRIC: &str = "cosine";

/// Named group of points inside a database.
///
/// `dimension` and `metric` are recorded at creation and never enforced
/// against stored points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Collection {
    pub id: Uuid,
    pub name: String,
    pub database_name: String,
    pub dimension: u32,
    pub metric: String,
    #[schema(value_type = Option<Object>)]
    pub index_config: Option<Metadata>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Collection {
    pub fn new(database_name: impl Into<String>, input: CreateCollection) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            name: input.name,
            database_name: database_name.into(),
            dimension: input.dimension,
            metric: input.metric.unwrap_or_else(|| DEFAULT_METRIC.to_string()),
            index_config: input.index_config,
            created_at: now,
            updated_at: now,
        }
    }

    /// Key of this collection's point partition.
    ///
    /// Unique per created collection, so same-named collections in other
    /// databases, or a later recreation of this one, never see its points.
    pub fn points_key(&self) -> String {
        self.id.to_string()
    }
}

/// Request body for creating a collection
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct CreateCollection {
    #[validate(length(min = 1, max = 255))]
    pub name: String,

    #[validate(range(min = 1))]
    pub dimension: u32,

    /// Free-form metric label such as "euclidean", "cosine" or "dot_product"
    #[serde(default)]
    pub metric: Option<String>,

    #[serde(default)]
    #[schema(value_type = Option<Object>)]
    pub index_config: Option<Metadata>,
}

impl CreateCollection {
    pub fn new(name: impl Into<String>, dimension: u32, metric: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            dimension,
            metric: Some(metric.into()),
            index_config: None,
        }
    }

    pub fn with_index_config(mut self, index_config: Metadata) -> Self {
        self.index_config = Some(index_config);
        self
    }
}
