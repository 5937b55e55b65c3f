use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::Metadata;

/// A stored vector with optional metadata.
///
/// `collection_id` holds the owning collection's [`points_key`](super::Collection::points_key).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Point {
    pub id: String,
    pub collection_id: String,
    pub vector: Vec<f32>,
    #[schema(value_type = Option<Object>)]
    pub metadata: Option<Metadata>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Point {
    /// Build the record for `input`, keeping `created_at` from the entry it
    /// replaces, if any.
    pub(crate) fn from_new(
        collection_id: &str,
        id: String,
        input: NewPoint,
        previous: Option<&Point>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            collection_id: collection_id.to_string(),
            vector: input.vector,
            metadata: input.metadata,
            created_at: previous.map_or(now, |p| p.created_at),
            updated_at: now,
        }
    }
}

/// Point as submitted for upsert. A missing id is generated on write.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NewPoint {
    #[serde(default)]
    pub id: Option<String>,
    pub vector: Vec<f32>,
    #[serde(default)]
    #[schema(value_type = Option<Object>)]
    pub metadata: Option<Metadata>,
}

impl NewPoint {
    pub fn new(vector: Vec<f32>) -> Self {
        Self {
            id: None,
            vector,
            metadata: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// The caller-supplied id, or a fresh UUID v4 string.
    pub(crate) fn resolve_id(&self) -> String {
        match &self.id {
            Some(id) if !id.is_empty() => id.clone(),
            _ => Uuid::new_v4().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_id_prefers_caller_id() {
        let point = NewPoint::new(vec![1.0]).with_id("p1");
        assert_eq!(point.resolve_id(), "p1");
    }

    #[test]
    fn test_resolve_id_generates_uuid() {
        let point = NewPoint::new(vec![1.0]);
        let id = point.resolve_id();
        assert!(Uuid::parse_str(&id).is_ok());
        assert_ne!(id, point.resolve_id());
    }

    #[test]
    fn test_from_new_keeps_created_at() {
        let first = Point::from_new("docs", "p1".into(), NewPoint::new(vec![1.0]), None);
        let second = Point::from_new("docs", "p1".into(), NewPoint::new(vec![2.0]), Some(&first));
        assert_eq!(second.created_at, first.created_at);
        assert!(second.updated_at >= first.updated_at);
        assert_eq!(second.vector, vec![2.0]);
    }
}
