mod collection;
mod database;
mod point;
mod search;

pub use collection::{Collection, CreateCollection, DEFAULT_METRIC};
pub use database::{CreateDatabase, Database};
pub use point::{NewPoint, Point};
pub use search::{ScoredPoint, SearchRequest, SearchResponse};

/// Opaque key-value bag attached to collections and points.
pub type Metadata = serde_json::Map<String, serde_json::Value>;
