use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::Point;

/// Nearest-neighbour request. `limit <= 0` falls back to the default of 10.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct SearchRequest {
    #[validate(length(min = 1))]
    pub query_vector: Vec<f32>,

    #[serde(default)]
    pub limit: i64,

    /// Echoed back in the response; the collection's metric is used when absent
    #[serde(default)]
    pub distance_metric: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ScoredPoint {
    pub point: Point,
    pub distance: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SearchResponse {
    pub results: Vec<ScoredPoint>,
    pub distance_metric: String,
    pub query_vector: Vec<f32>,
    pub total_matches: usize,
}
